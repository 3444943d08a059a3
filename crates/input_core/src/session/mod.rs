//! The per-field editing state machine.
//!
//! An [`EditSession`] owns everything that changes while a user edits one
//! field: the display string, the raw value behind it, caret and selection,
//! and the notifications produced along the way. Policies are shared and
//! immutable; a session only ever swaps its `Arc` for a new one.

mod delete;
mod edit;
mod focus;
mod formula;
mod keys;
mod paste;

#[cfg(test)]
mod tests;

use crate::caret::{clamp_to_char_boundary, numeric_span};
use crate::error::SessionError;
use crate::host::{HostElement, HostKind, host_kind};
use crate::key::Key;
use crate::notification::Notification;
use crate::selection::SelectionRange;
use codec::{Localized, Presentation, in_range, localize, parse_number, render, round};
use decimal::Decimal;
use policy::{EmptyValue, FormatOptions, FormatPolicy, LeadingZero, OutputLocale, SignSide};
use std::sync::Arc;

use self::formula::FormulaDraft;
use self::paste::PasteSnapshot;

/// Editing state of one numeric field.
///
/// The host forwards focus, keyboard and clipboard events; the session
/// answers with a [`KeyOutcome`](crate::KeyOutcome) and updates
/// [`formatted_value`](Self::formatted_value), [`caret`](Self::caret) and
/// [`selection`](Self::selection), which the host copies back into the
/// element.
#[derive(Debug)]
pub struct EditSession {
    policy: Arc<FormatPolicy>,
    kind: HostKind,
    display: String,
    /// Raw value of the display. While editing it may carry a trailing point
    /// or `-0`; `""` means empty.
    raw: String,
    /// Byte offset into `display` (always on a UTF-8 char boundary).
    caret: usize,
    /// When `Some(anchor)`, the selection is `min(anchor, caret)..max(anchor, caret)`.
    selection_anchor: Option<usize>,
    focused: bool,
    pending_paste: Option<PasteSnapshot>,
    trailing_negative: bool,
    last_committed: String,
    last_key: Option<Key>,
    formula: Option<FormulaDraft>,
    notifications: Vec<Notification>,
}

impl EditSession {
    /// Bind a session to `host`, showing `initial` (which may be empty).
    pub fn new(
        host: &HostElement,
        policy: Arc<FormatPolicy>,
        initial: &str,
    ) -> Result<Self, SessionError> {
        let kind = host_kind(host).ok_or_else(|| SessionError::UnsupportedHost {
            tag: host.tag.clone(),
            input_type: host.input_type.clone(),
        })?;

        let mut session = Self {
            policy,
            kind,
            display: String::new(),
            raw: String::new(),
            caret: 0,
            selection_anchor: None,
            focused: false,
            pending_paste: None,
            trailing_negative: false,
            last_committed: String::new(),
            last_key: None,
            formula: None,
            notifications: Vec::new(),
        };
        session.set_value(initial)?;
        session.last_committed = session.raw.clone();
        session.notifications.clear();
        log::debug!(
            target: "numfield.session",
            "bound {kind:?} <{}> with {:?}",
            host.tag,
            session.raw
        );
        Ok(session)
    }

    /// Resolve `options` and bind, for hosts that do not share policies.
    pub fn with_options(
        host: &HostElement,
        options: &FormatOptions,
        initial: &str,
    ) -> Result<Self, SessionError> {
        let policy = FormatPolicy::resolve(options)?;
        Self::new(host, Arc::new(policy), initial)
    }

    pub fn policy(&self) -> &Arc<FormatPolicy> {
        &self.policy
    }

    pub fn host_kind(&self) -> HostKind {
        self.kind
    }

    /// The exact text the field shows.
    pub fn formatted_value(&self) -> &str {
        &self.display
    }

    /// The canonical raw value, or `""` for an empty field.
    pub fn raw_value(&self) -> String {
        self.settle(&self.raw)
    }

    pub fn localized_value(&self, locale: OutputLocale) -> Localized {
        localize(&self.raw_value(), locale)
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Option<SelectionRange> {
        self.selection_range()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the only negative sign sits after the digits.
    pub fn is_trailing_negative(&self) -> bool {
        self.trailing_negative
    }

    pub fn in_formula_mode(&self) -> bool {
        self.formula.is_some()
    }

    /// Drain the notifications produced since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Set the value programmatically.
    ///
    /// Accepts plain decimals (`-1234.5`) and text in the field's own
    /// notation (`-$1,234.50`). The value is rounded to the raw precision
    /// before the range check; on error the session is unchanged.
    pub fn set_value(&mut self, value: &str) -> Result<(), SessionError> {
        let text = value.trim();
        let parsed = if text.is_empty() {
            String::new()
        } else if Decimal::parse(text).is_ok() {
            text.strip_prefix('+').unwrap_or(text).to_string()
        } else {
            parse_number(text, &self.policy).ok_or_else(|| SessionError::NotNumeric {
                value: value.to_string(),
            })?
        };

        let precision = &self.policy.precision;
        let rounded = round(&parsed, precision.raw_places(), precision.rounding, false);
        if !in_range(&rounded, &self.policy).is_ok() {
            let bounds = &self.policy.bounds;
            return Err(SessionError::OutOfRange {
                value: text.to_string(),
                minimum: bounds.minimum.to_string(),
                maximum: bounds.maximum.to_string(),
            });
        }

        let mut raw = self.settle(&rounded);
        if raw.is_empty() && self.policy.behavior.empty_value == EmptyValue::Zero {
            raw = "0".to_string();
        }
        log::debug!(target: "numfield.session", "set value {value:?} -> {raw:?}");
        self.raw = raw;
        self.show(self.resting_or_focused());
        Ok(())
    }

    /// Re-resolve the policy with `patch` applied, then re-set the current
    /// value under it. On error the old policy stays in place.
    pub fn update_policy(&mut self, patch: &FormatOptions) -> Result<(), SessionError> {
        let options = self.policy.options().merged(patch);
        let policy = FormatPolicy::resolve(&options)?;
        let raw = self.raw_value();
        let previous = std::mem::replace(&mut self.policy, Arc::new(policy));
        if let Err(err) = self.set_value(&raw) {
            self.policy = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Record text the host wrote into the element behind the session's back.
    /// It is reconciled with the raw value at blur.
    pub fn replace_display(&mut self, text: &str) {
        self.display = text.to_string();
        self.caret = self.display.len();
        self.clear_selection();
    }

    /// Select `anchor..caret` (or place the caret when they are equal).
    pub fn select(&mut self, anchor: usize, caret: usize) {
        self.caret = clamp_to_char_boundary(&self.display, caret);
        self.selection_anchor = Some(anchor);
        self.normalize_selection_anchor();
    }

    /// Set the caret to a byte position. With `selecting`, extend the
    /// selection from the current caret.
    pub fn set_caret(&mut self, caret: usize, selecting: bool) {
        self.clamp_state();
        let caret = clamp_to_char_boundary(&self.display, caret);
        if selecting {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.caret);
            }
            self.caret = caret;
            self.normalize_selection_anchor();
        } else {
            self.caret = caret;
            self.clear_selection();
        }
    }

    /// Release the session. Pending notifications are dropped.
    pub fn destroy(self) {
        log::debug!(target: "numfield.session", "released field holding {:?}", self.raw);
    }

    // --- helpers shared by the transition modules ---

    fn accepts_input(&self) -> bool {
        self.focused && self.kind.is_editable()
    }

    fn resting_or_focused(&self) -> Presentation {
        if self.focused {
            Presentation::Focused
        } else {
            Presentation::Resting
        }
    }

    /// Round to the raw precision and canonicalize (unless leading zeros are
    /// kept).
    fn settle(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }
        let precision = &self.policy.precision;
        let rounded = round(raw, precision.raw_places(), precision.rounding, false);
        if self.policy.behavior.leading_zero == LeadingZero::Keep {
            return rounded;
        }
        codec::canonicalize(&rounded).unwrap_or(rounded)
    }

    /// Replace the display with a rendering of `raw`; the caret goes to the
    /// end of the number.
    fn show(&mut self, presentation: Presentation) {
        self.display = render(&self.raw, &self.policy, presentation);
        self.caret = numeric_span(&self.display, &self.policy).end;
        self.clear_selection();
        self.refresh_trailing_negative();
    }

    /// Adopt an already validated raw value while focused, announcing the
    /// change when the display moved.
    fn commit_value(&mut self, raw: String) {
        let before = std::mem::take(&mut self.display);
        self.raw = raw;
        self.show(Presentation::Focused);
        if self.display != before {
            self.notifications.push(Notification::Input);
        }
    }

    fn refresh_trailing_negative(&mut self) {
        self.trailing_negative = self.raw.starts_with('-')
            && self.policy.symbols.sign_side() == SignSide::Trailing;
    }

    fn selection_range(&self) -> Option<SelectionRange> {
        let anchor = self.selection_anchor?;
        let a = clamp_to_char_boundary(&self.display, anchor);
        let c = clamp_to_char_boundary(&self.display, self.caret);
        if a == c {
            return None;
        }
        Some(SelectionRange::new(a, c))
    }

    /// The selection, or the collapsed range at the caret.
    fn edit_range(&self) -> SelectionRange {
        self.selection_range()
            .unwrap_or_else(|| SelectionRange::caret(clamp_to_char_boundary(&self.display, self.caret)))
    }

    fn normalize_selection_anchor(&mut self) {
        let Some(anchor) = self.selection_anchor else {
            return;
        };
        let anchor = clamp_to_char_boundary(&self.display, anchor);
        self.selection_anchor = Some(anchor);

        // A collapsed selection is no selection.
        if anchor == self.caret {
            self.selection_anchor = None;
        }
    }

    fn clamp_state(&mut self) {
        self.caret = clamp_to_char_boundary(&self.display, self.caret);
        if let Some(a) = self.selection_anchor {
            self.selection_anchor = Some(clamp_to_char_boundary(&self.display, a));
        }
    }

    fn clear_selection(&mut self) {
        self.selection_anchor = None;
    }
}
