//! Focus changes and form submission.

use super::EditSession;
use crate::caret::numeric_span;
use crate::notification::Notification;
use codec::{Presentation, in_range, render, strip};
use policy::EmptyValue;

impl EditSession {
    pub fn on_focus_gained(&mut self) {
        if self.focused || !self.kind.is_editable() {
            return;
        }
        self.focused = true;
        self.last_committed = self.raw_value();
        self.raw = self.last_committed.clone();
        self.show(Presentation::Focused);

        if self.policy.behavior.select_on_focus {
            let span = numeric_span(&self.display, &self.policy);
            self.select(span.start, span.end);
        }
        log::debug!(target: "numfield.session", "focus gained showing {:?}", self.display);
    }

    /// Reconcile the live display with the raw value, round, and show the
    /// resting format. `Change` fires when the value differs from the one
    /// the field had at focus.
    pub fn on_focus_lost(&mut self) {
        if !self.focused {
            return;
        }
        self.leave_formula();
        self.pending_paste = None;
        self.last_key = None;

        let stripped = strip(&self.display, &self.policy);
        let candidate = self.settle(&stripped.raw);
        let check = in_range(&candidate, &self.policy);
        if check.is_ok() {
            self.raw = candidate;
        } else {
            log::warn!(
                target: "numfield.session",
                "display {:?} is out of range at blur, keeping {:?}",
                self.display,
                self.raw
            );
            self.notifications.push(if check.floor_ok {
                Notification::MaxExceeded
            } else {
                Notification::MinExceeded
            });
            self.raw = self.settle(&self.raw);
        }
        if self.raw.is_empty() && self.policy.behavior.empty_value == EmptyValue::Zero {
            self.raw = "0".to_string();
        }

        self.focused = false;
        self.show(Presentation::Resting);
        self.announce_change();
        log::debug!(target: "numfield.session", "focus lost showing {:?}", self.display);
    }

    /// The value the form posts. With `unformat_on_submit` the display is
    /// replaced by the raw value until [`on_submit_finished`](Self::on_submit_finished).
    pub fn on_submit(&mut self) -> String {
        if self.policy.behavior.unformat_on_submit {
            self.display = self.raw_value();
            self.caret = self.display.len();
            self.clear_selection();
        }
        self.display.clone()
    }

    pub fn on_submit_finished(&mut self) {
        if self.policy.behavior.unformat_on_submit {
            self.display = render(&self.raw, &self.policy, self.resting_or_focused());
            self.caret = self.display.len();
            self.clear_selection();
        }
    }
}
