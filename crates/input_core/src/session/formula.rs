//! Formula mode: `=` starts an arithmetic expression that replaces the
//! value once evaluated.

use super::EditSession;
use crate::key::{Key, KeyOutcome};
use crate::notification::Notification;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct FormulaDraft {
    text: String,
    saved_display: String,
    saved_caret: usize,
    saved_anchor: Option<usize>,
}

/// Longest expression formula mode accepts; further keys are dropped.
pub(crate) const MAX_FORMULA_LEN: usize = 256;

fn is_formula_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '+' | '-' | '*' | '/' | '(' | ')' | '.' | ' ')
}

impl EditSession {
    /// The expression typed so far, while in formula mode.
    pub fn formula_text(&self) -> Option<&str> {
        self.formula.as_ref().map(|draft| draft.text.as_str())
    }

    pub(super) fn enter_formula(&mut self) {
        self.formula = Some(FormulaDraft {
            text: String::new(),
            saved_display: self.display.clone(),
            saved_caret: self.caret,
            saved_anchor: self.selection_anchor,
        });
        self.show_formula();
        log::debug!(target: "numfield.session", "formula mode entered");
    }

    fn show_formula(&mut self) {
        if let Some(draft) = &self.formula {
            self.display = format!("={}", draft.text);
            self.caret = self.display.len();
            self.selection_anchor = None;
        }
    }

    /// Leave formula mode, putting back what the field showed before.
    pub(super) fn leave_formula(&mut self) {
        if let Some(draft) = self.formula.take() {
            self.display = draft.saved_display;
            self.caret = draft.saved_caret;
            self.selection_anchor = draft.saved_anchor;
        }
    }

    pub(super) fn formula_key_press(&mut self, ch: char) -> KeyOutcome {
        let ch = if self.policy.symbols.is_decimal(ch) {
            '.'
        } else {
            ch
        };
        if is_formula_char(ch)
            && let Some(draft) = &mut self.formula
            && draft.text.len() < MAX_FORMULA_LEN
        {
            draft.text.push(ch);
            self.show_formula();
        }
        KeyOutcome::Handled
    }

    pub(super) fn formula_key_down(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Backspace => {
                if let Some(draft) = &mut self.formula {
                    draft.text.pop();
                }
                self.show_formula();
                KeyOutcome::Handled
            }
            Key::Escape => {
                self.leave_formula();
                KeyOutcome::Handled
            }
            Key::Enter => {
                self.evaluate_formula();
                KeyOutcome::Handled
            }
            Key::Tab | Key::Char(_) => KeyOutcome::PassThrough,
            _ => KeyOutcome::Handled,
        }
    }

    /// Evaluate and commit through [`set_value`](Self::set_value). Any
    /// failure keeps the expression so it can be corrected.
    fn evaluate_formula(&mut self) {
        let Some(draft) = self.formula.clone() else {
            return;
        };
        let value = match formula::evaluate(&draft.text) {
            Ok(value) => value,
            Err(err) => {
                log::debug!(target: "numfield.session", "formula {:?} failed: {err}", draft.text);
                self.notifications.push(Notification::InvalidFormula);
                return;
            }
        };

        let before = draft.saved_display.clone();
        self.leave_formula();
        if let Err(err) = self.set_value(&value) {
            log::debug!(target: "numfield.session", "formula result {value} refused: {err}");
            self.notifications.push(Notification::InvalidFormula);
            self.formula = Some(draft);
            self.show_formula();
            return;
        }
        if self.display != before {
            self.notifications.push(Notification::Input);
        }
    }
}
