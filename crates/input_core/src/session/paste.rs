//! Clipboard paste.
//!
//! `Ctrl+V` at keydown snapshots the selection; the paste event that
//! follows consumes the snapshot. When the paste event arrives without a
//! keydown (a context menu paste) the current selection is used.

use super::EditSession;
use super::edit::{Draft, Halves, Rejection};
use crate::key::KeyOutcome;
use crate::notification::Notification;
use crate::selection::SelectionRange;
use codec::{parse_number, strip_part};
use policy::InvalidPaste;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct PasteSnapshot {
    selection: SelectionRange,
    display: String,
}

impl EditSession {
    pub(super) fn capture_paste(&mut self) {
        self.pending_paste = Some(PasteSnapshot {
            selection: self.edit_range(),
            display: self.display.clone(),
        });
    }

    pub fn on_paste(&mut self, text: &str) -> KeyOutcome {
        if !self.accepts_input() {
            return KeyOutcome::PassThrough;
        }
        if self.formula.is_some() {
            for ch in text.chars() {
                self.formula_key_press(ch);
            }
            return KeyOutcome::Handled;
        }

        let snapshot = self.pending_paste.take().unwrap_or_else(|| PasteSnapshot {
            selection: self.edit_range(),
            display: self.display.clone(),
        });
        let mode = self.policy.behavior.invalid_paste;

        let Some(pasted) = parse_number(text, &self.policy) else {
            log::debug!(target: "numfield.session", "paste {text:?} is not a number");
            if mode == InvalidPaste::Reject {
                self.notifications.push(Notification::InvalidPaste);
            }
            self.restore(&snapshot);
            return KeyOutcome::Handled;
        };

        let selection = snapshot.selection;
        let halves = Halves {
            left: strip_part(&snapshot.display[..selection.start], &self.policy),
            right: strip_part(&snapshot.display[selection.end..], &self.policy),
        };
        let (pasted_negative, mut digits) = match pasted.strip_prefix('-') {
            Some(body) => (true, body.to_string()),
            None => (false, pasted),
        };
        if halves.left.has_point() || halves.right.has_point() {
            digits.retain(|c| c != '.');
        }
        let negative = halves.negative() || pasted_negative;
        let draft = |inserted: &str| Draft {
            negative,
            left: format!("{}{inserted}", halves.left.digits),
            right: halves.right.digits.clone(),
        };

        let rejection = match self.prepare(draft(&digits)) {
            Ok(prepared) => {
                self.apply(prepared);
                return KeyOutcome::Handled;
            }
            Err(rejection) => rejection,
        };
        log::debug!(target: "numfield.session", "paste {text:?} refused ({rejection:?}), {mode:?}");

        match mode {
            InvalidPaste::Reject => {
                self.notifications.push(Notification::InvalidPaste);
                self.notifications.extend(rejection.notification());
                self.restore(&snapshot);
            }
            InvalidPaste::Ignore => self.restore(&snapshot),
            InvalidPaste::Clamp => {
                let bounds = &self.policy.bounds;
                let bound = match rejection {
                    Rejection::Below => &bounds.minimum,
                    Rejection::Above => &bounds.maximum,
                    Rejection::Capacity if negative => &bounds.minimum,
                    Rejection::Capacity => &bounds.maximum,
                };
                let raw = self.settle(&bound.to_string());
                self.display = snapshot.display;
                self.commit_value(raw);
            }
            InvalidPaste::Truncate => {
                let accepted = (1..digits.len())
                    .rev()
                    .find_map(|len| self.prepare(draft(&digits[..len])).ok());
                match accepted {
                    Some(prepared) => self.apply(prepared),
                    None => {
                        self.notifications.push(Notification::InvalidPaste);
                        self.restore(&snapshot);
                    }
                }
            }
        }
        KeyOutcome::Handled
    }

    /// Put back the display and selection a paste started from.
    fn restore(&mut self, snapshot: &PasteSnapshot) {
        self.display.clone_from(&snapshot.display);
        self.select(snapshot.selection.start, snapshot.selection.end);
    }
}
