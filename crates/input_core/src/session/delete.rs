//! Backspace and Delete.
//!
//! Removing a character next to the sign depends on which side of the
//! digits the sign sits on, so each direction has a rule per sign side.
//! A rule returns `false` when there was nothing to remove.

use super::EditSession;
use super::edit::Halves;
use policy::SignSide;

type Rule = fn(&mut Halves) -> bool;

/// `-$12|` style layouts: the sign goes once no digit is left of the caret.
fn backspace_leading(halves: &mut Halves) -> bool {
    if halves.left.sign && !halves.left.has_digits() {
        halves.left.sign = false;
        return true;
    }
    halves.left.digits.pop().is_some()
}

/// `12-|` style layouts: a sign left of the caret is the nearest glyph.
fn backspace_trailing(halves: &mut Halves) -> bool {
    if halves.left.sign {
        halves.left.sign = false;
        return true;
    }
    halves.left.digits.pop().is_some()
}

fn delete_leading(halves: &mut Halves) -> bool {
    if halves.right.sign {
        halves.right.sign = false;
        return true;
    }
    remove_first(&mut halves.right.digits)
}

fn delete_trailing(halves: &mut Halves) -> bool {
    if halves.right.sign && !halves.right.has_digits() {
        halves.right.sign = false;
        return true;
    }
    remove_first(&mut halves.right.digits)
}

fn remove_first(digits: &mut String) -> bool {
    if digits.is_empty() {
        return false;
    }
    digits.remove(0);
    true
}

fn rule(side: SignSide, forward: bool) -> Rule {
    match (side, forward) {
        (SignSide::Leading, false) => backspace_leading,
        (SignSide::Trailing, false) => backspace_trailing,
        (SignSide::Leading, true) => delete_leading,
        (SignSide::Trailing, true) => delete_trailing,
    }
}

impl EditSession {
    pub(super) fn delete_backward(&mut self) {
        self.delete(false);
    }

    pub(super) fn delete_forward(&mut self) {
        self.delete(true);
    }

    fn delete(&mut self, forward: bool) {
        if self.selection_range().is_some() {
            self.delete_selection();
            return;
        }

        let mut halves = self.halves_at_caret();
        let removed = rule(self.policy.symbols.sign_side(), forward)(&mut halves);
        log::trace!(
            target: "numfield.session",
            "{} at {} removed={removed}",
            if forward { "delete" } else { "backspace" },
            self.caret
        );
        if !removed {
            return;
        }
        let negative = halves.negative();
        self.commit(halves.into_draft(negative));
    }

    /// Remove the selected text. A sign inside the selection goes with it.
    pub(super) fn delete_selection(&mut self) {
        let halves = self.halves();
        let negative = halves.negative();
        self.commit(halves.into_draft(negative));
    }
}
