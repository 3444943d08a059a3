use crate::diff::{escape_text, render_caret};
use crate::script::{Script, ScriptError, Step};
use input_core::{EditSession, Key, KeyOutcome, Modifiers, Notification};
use policy::FormatPolicy;
use serde::Serialize;
use std::fmt::Write;
use std::sync::Arc;

/// The session's state after one step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: String,
    /// Display with the caret marked `|`, or the selection `[...]`.
    pub display: String,
    pub raw: String,
    pub notifications: Vec<String>,
    /// Anything the step handed back to the host: clipboard text, the
    /// submitted value or an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
}

impl StepReport {
    /// `type "12" -> "$12|" raw="12" [input]`
    pub fn line(&self) -> String {
        let mut line = format!(
            "{} -> \"{}\" raw=\"{}\"",
            self.step,
            escape_text(&self.display),
            escape_text(&self.raw)
        );
        if !self.notifications.is_empty() {
            let _ = write!(&mut line, " [{}]", self.notifications.join(", "));
        }
        if let Some(outcome) = &self.outcome {
            let _ = write!(&mut line, " {outcome}");
        }
        line
    }
}

pub fn describe_notification(notification: &Notification) -> String {
    match notification {
        Notification::Input => "input".to_string(),
        Notification::Change { previous, current } => format!(
            "change \"{}\" -> \"{}\"",
            escape_text(previous),
            escape_text(current)
        ),
        Notification::MinExceeded => "min-exceeded".to_string(),
        Notification::MaxExceeded => "max-exceeded".to_string(),
        Notification::InvalidPaste => "invalid-paste".to_string(),
        Notification::InvalidFormula => "invalid-formula".to_string(),
    }
}

/// Replay `script` and report the session after every step.
///
/// Only building the session can fail; a refused `set` step is reported as
/// that step's outcome.
pub fn run(script: &Script) -> Result<Vec<StepReport>, ScriptError> {
    let policy = FormatPolicy::resolve(&script.options).map_err(input_core::SessionError::from)?;
    let mut session = EditSession::new(&script.host.element(), Arc::new(policy), &script.initial)?;
    log::debug!(
        target: "numfield.script",
        "replaying {} ({} steps) from {:?}",
        script.name.as_deref().unwrap_or("<unnamed>"),
        script.steps.len(),
        session.formatted_value()
    );

    let mut reports = Vec::with_capacity(script.steps.len());
    for step in &script.steps {
        let outcome = apply(&mut session, step);
        let report = StepReport {
            step: step.to_string(),
            display: render_caret(
                session.formatted_value(),
                session.caret(),
                session.selection().map(|range| range.start..range.end),
            ),
            raw: session.raw_value(),
            notifications: session
                .take_notifications()
                .iter()
                .map(describe_notification)
                .collect(),
            outcome,
        };
        log::trace!(target: "numfield.script", "{}", report.line());
        reports.push(report);
    }
    Ok(reports)
}

fn apply(session: &mut EditSession, step: &Step) -> Option<String> {
    match step {
        Step::Focus => {
            session.on_focus_gained();
            None
        }
        Step::Blur => {
            session.on_focus_lost();
            None
        }
        Step::Type(text) => {
            for ch in text.chars() {
                let key = Key::Char(ch);
                if session.on_key_down(key, Modifiers::NONE) == KeyOutcome::PassThrough {
                    session.on_key_press(ch);
                }
                session.on_key_up(key);
            }
            None
        }
        Step::Key(stroke) => {
            let mut outcome = session.on_key_down(stroke.key, stroke.modifiers);
            if let Key::Char(ch) = stroke.key
                && outcome == KeyOutcome::PassThrough
                && !stroke.modifiers.command()
                && !stroke.modifiers.alt
            {
                outcome = session.on_key_press(ch);
            }
            session.on_key_up(stroke.key);
            match outcome {
                KeyOutcome::Clipboard(text) => Some(format!("clipboard=\"{}\"", escape_text(&text))),
                KeyOutcome::PassThrough | KeyOutcome::Handled => None,
            }
        }
        Step::Paste(text) => {
            session.on_paste(text);
            None
        }
        Step::Select([anchor, caret]) => {
            session.select(*anchor, *caret);
            None
        }
        Step::Caret(at) => {
            session.set_caret(*at, false);
            None
        }
        Step::Set(value) => match session.set_value(value) {
            Ok(()) => None,
            Err(err) => Some(format!("error: {err}")),
        },
        Step::Submit => {
            let posted = session.on_submit();
            session.on_submit_finished();
            Some(format!("posted=\"{}\"", escape_text(&posted)))
        }
    }
}
