//! Keyboard transitions: `keydown` for control keys and shortcuts,
//! `keypress` for the inserted character, `keyup` for cleanup.

use super::EditSession;
use crate::caret::{next_cursor_boundary, numeric_span, prev_cursor_boundary};
use crate::key::{Key, KeyOutcome, Modifiers};
use crate::notification::Notification;
use crate::selection::SelectionRange;
use codec::{Presentation, format_empty, in_range};
use decimal::Decimal;
use policy::{EmptyValue, SignSide};

impl EditSession {
    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> KeyOutcome {
        if !self.accepts_input() {
            return KeyOutcome::PassThrough;
        }
        self.last_key = Some(key);
        if self.formula.is_some() {
            return self.formula_key_down(key);
        }
        if modifiers.command() {
            return self.shortcut(key);
        }
        if modifiers.alt {
            return KeyOutcome::PassThrough;
        }

        let selecting = modifiers.shift;
        match key {
            Key::Backspace => {
                self.delete_backward();
                KeyOutcome::Handled
            }
            Key::Delete => {
                self.delete_forward();
                KeyOutcome::Handled
            }
            Key::ArrowLeft => {
                self.move_caret_left(selecting);
                KeyOutcome::Handled
            }
            Key::ArrowRight => {
                self.move_caret_right(selecting);
                KeyOutcome::Handled
            }
            Key::Home => {
                self.set_caret(0, selecting);
                KeyOutcome::Handled
            }
            Key::End => {
                self.set_caret(self.display.len(), selecting);
                KeyOutcome::Handled
            }
            Key::ArrowUp => self.step(true),
            Key::ArrowDown => self.step(false),
            Key::Escape => self.cancel(),
            Key::Enter => {
                self.announce_change();
                KeyOutcome::PassThrough
            }
            Key::Tab | Key::Char(_) | Key::Other => KeyOutcome::PassThrough,
        }
    }

    pub fn on_key_press(&mut self, ch: char) -> KeyOutcome {
        if !self.accepts_input() {
            return KeyOutcome::PassThrough;
        }
        if self.formula.is_some() {
            return self.formula_key_press(ch);
        }

        let symbols = &self.policy.symbols;
        if ch.is_ascii_digit() {
            self.insert_digit(ch);
        } else if symbols.is_decimal(ch) {
            self.insert_decimal();
        } else if ch == symbols.negative_sign || ch == '-' {
            self.toggle_sign();
        } else if ch == symbols.positive_sign || ch == '+' {
            self.force_positive();
        } else if ch == '=' && self.policy.behavior.formula_mode {
            self.enter_formula();
        } else {
            log::trace!(target: "numfield.session", "dropped {ch:?}");
        }
        KeyOutcome::Handled
    }

    pub fn on_key_up(&mut self, _key: Key) {
        if self.last_key.take().is_none() || !self.accepts_input() || self.formula.is_some() {
            return;
        }
        if self.policy.behavior.empty_value == EmptyValue::Press
            && self.raw.is_empty()
            && self.display.is_empty()
        {
            self.display = format_empty(&self.policy, false);
            self.caret = numeric_span(&self.display, &self.policy).start;
            self.clear_selection();
        }
    }

    fn shortcut(&mut self, key: Key) -> KeyOutcome {
        let Key::Char(ch) = key else {
            return KeyOutcome::PassThrough;
        };
        match ch.to_ascii_lowercase() {
            'a' => {
                self.select_all();
                KeyOutcome::Handled
            }
            'c' => match self.clipboard_range() {
                Some(range) => KeyOutcome::Clipboard(range.slice(&self.display).to_string()),
                None => KeyOutcome::PassThrough,
            },
            'x' => match self.clipboard_range() {
                Some(range) => {
                    let text = range.slice(&self.display).to_string();
                    self.selection_anchor = Some(range.start);
                    self.caret = range.end;
                    self.delete_selection();
                    KeyOutcome::Clipboard(text)
                }
                None => KeyOutcome::PassThrough,
            },
            'v' => {
                self.capture_paste();
                KeyOutcome::PassThrough
            }
            _ => KeyOutcome::PassThrough,
        }
    }

    fn select_all(&mut self) {
        let range = if self.policy.behavior.select_number_only {
            numeric_span(&self.display, &self.policy)
        } else {
            0..self.display.len()
        };
        self.select(range.start, range.end);
    }

    /// The selection widened so a partly covered sign, currency symbol or
    /// suffix is taken whole.
    fn clipboard_range(&self) -> Option<SelectionRange> {
        let selection = self.selection_range()?;
        let span = numeric_span(&self.display, &self.policy);
        let mut range = selection;
        if selection.start < span.start {
            range = range.union(0..span.start);
        }
        if selection.end > span.end {
            range = range.union(span.end..self.display.len());
        }
        Some(range)
    }

    fn move_caret_left(&mut self, selecting: bool) {
        self.clamp_state();
        if selecting {
            let caret = prev_cursor_boundary(&self.display, self.caret);
            self.set_caret(caret, true);
            return;
        }
        let caret = match self.selection_range() {
            Some(selection) => selection.start,
            None => prev_cursor_boundary(&self.display, self.caret),
        };
        self.set_caret(caret, false);
    }

    fn move_caret_right(&mut self, selecting: bool) {
        self.clamp_state();
        if selecting {
            let caret = next_cursor_boundary(&self.display, self.caret);
            self.set_caret(caret, true);
            return;
        }
        let caret = match self.selection_range() {
            Some(selection) => selection.end,
            None => next_cursor_boundary(&self.display, self.caret),
        };
        self.set_caret(caret, false);
    }

    fn insert_digit(&mut self, digit: char) {
        let mut halves = self.halves();
        let mut negative = halves.negative();
        if !negative && digit != '0' && self.policy.bounds.only_non_positive() {
            negative = true;
        }
        halves.left.digits.push(digit);
        self.commit(halves.into_draft(negative));
    }

    fn insert_decimal(&mut self) {
        let policy = &self.policy;
        if policy.precision.focused_places() == 0 {
            return;
        }
        let mut halves = self.halves();
        if halves.left.has_point() {
            return;
        }
        if halves.right.sign && policy.symbols.sign_side() == SignSide::Leading {
            return;
        }
        match halves.right.digits.find('.') {
            // The point right after the caret is swallowed and moves left.
            Some(0) => {
                halves.right.digits.remove(0);
            }
            Some(_) => return,
            None => {}
        }
        let negative = halves.negative();
        halves.left.digits.push('.');
        self.commit(halves.into_draft(negative));
    }

    fn toggle_sign(&mut self) {
        if !self.policy.bounds.allows_negative() {
            return;
        }
        let halves = self.halves_at_caret();
        let negative = !halves.negative();
        self.commit(halves.into_draft(negative));
    }

    fn force_positive(&mut self) {
        let halves = self.halves_at_caret();
        if !halves.negative() {
            return;
        }
        self.commit(halves.into_draft(false));
    }

    /// ArrowUp/ArrowDown: add or subtract the step, exactly.
    fn step(&mut self, up: bool) -> KeyOutcome {
        if !self.policy.behavior.arrow_step {
            return KeyOutcome::PassThrough;
        }
        let current = Decimal::parse(&self.raw_value()).unwrap_or_else(|_| Decimal::zero());
        let step = &self.policy.behavior.step;
        let next = if up { &current + step } else { &current - step };
        let raw = self.settle(&next.to_string());

        let check = in_range(&raw, &self.policy);
        if !check.floor_ok {
            self.notifications.push(Notification::MinExceeded);
        } else if !check.ceiling_ok {
            self.notifications.push(Notification::MaxExceeded);
        } else {
            log::debug!(target: "numfield.session", "step {} -> {raw:?}", if up { "up" } else { "down" });
            self.commit_value(raw);
        }
        KeyOutcome::Handled
    }

    /// Escape: back to the value the field had when it gained focus.
    fn cancel(&mut self) -> KeyOutcome {
        if !self.policy.behavior.cancellable {
            return KeyOutcome::PassThrough;
        }
        let before = std::mem::take(&mut self.display);
        self.raw = self.last_committed.clone();
        self.show(Presentation::Focused);
        let span = numeric_span(&self.display, &self.policy);
        self.select(span.start, span.end);
        if self.display != before {
            self.notifications.push(Notification::Input);
        }
        log::debug!(target: "numfield.session", "cancelled back to {:?}", self.raw);
        KeyOutcome::Handled
    }

    /// Emit `Change` when the value moved since it was last committed.
    pub(super) fn announce_change(&mut self) {
        let current = self.raw_value();
        if current != self.last_committed {
            let previous = std::mem::replace(&mut self.last_committed, current.clone());
            self.notifications.push(Notification::Change { previous, current });
        }
    }
}
