//! The commit pipeline every edit ends in: validate the edited halves,
//! reformat, and put the caret back behind the same digits.

use super::EditSession;
use crate::caret::relocate_caret;
use crate::notification::Notification;
use codec::{Presentation, Part, format, format_empty, in_range, strip_part};
use policy::{EmptyValue, LeadingZero, SignSide};

/// An edit expressed as the digits either side of the caret.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct Draft {
    pub negative: bool,
    /// Digits (and possibly `.`) before the caret.
    pub left: String,
    /// Digits (and possibly `.`) after the caret.
    pub right: String,
}

/// A draft that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Prepared {
    raw: String,
    negative: bool,
    left: String,
}

/// Why a draft was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Rejection {
    /// Too many integer digits. Dropped without notice.
    Capacity,
    Below,
    Above,
}

impl Rejection {
    pub(super) fn notification(self) -> Option<Notification> {
        match self {
            Rejection::Capacity => None,
            Rejection::Below => Some(Notification::MinExceeded),
            Rejection::Above => Some(Notification::MaxExceeded),
        }
    }
}

/// The two halves of the display around a range, stripped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct Halves {
    pub left: Part,
    pub right: Part,
}

impl Halves {
    pub(super) fn negative(&self) -> bool {
        self.left.sign || self.right.sign
    }

    pub(super) fn into_draft(self, negative: bool) -> Draft {
        Draft {
            negative,
            left: self.left.digits,
            right: self.right.digits,
        }
    }
}

fn integer_len(left: &str, right: &str) -> (usize, usize) {
    match left.find('.') {
        Some(p) => (p, 0),
        None => (left.len(), right.find('.').unwrap_or(right.len())),
    }
}

/// Drop fraction digits beyond `places`, from the end of the right half
/// first.
fn truncate_fraction(left: &mut String, right: &mut String, places: usize) {
    let (left_frac, right_frac) = if let Some(p) = left.find('.') {
        (left.len() - p - 1, right.len())
    } else if let Some(p) = right.find('.') {
        (0, right.len() - p - 1)
    } else {
        return;
    };

    if places == 0 {
        if let Some(p) = left.find('.') {
            left.truncate(p);
            right.clear();
        } else if let Some(p) = right.find('.') {
            right.truncate(p);
        }
        return;
    }

    let mut excess = (left_frac + right_frac).saturating_sub(places);
    let from_right = excess.min(right_frac);
    right.truncate(right.len() - from_right);
    excess -= from_right;
    left.truncate(left.len() - excess);
}

impl EditSession {
    /// The stripped halves around the selection (or caret).
    pub(super) fn halves(&self) -> Halves {
        let range = self.edit_range();
        Halves {
            left: strip_part(&self.display[..range.start], &self.policy),
            right: strip_part(&self.display[range.end..], &self.policy),
        }
    }

    /// The stripped halves around the caret, ignoring any selection.
    pub(super) fn halves_at_caret(&self) -> Halves {
        let (left, right) = self.display.split_at(self.caret.min(self.display.len()));
        Halves {
            left: strip_part(left, &self.policy),
            right: strip_part(right, &self.policy),
        }
    }

    pub(super) fn prepare(&self, draft: Draft) -> Result<Prepared, Rejection> {
        let policy = &self.policy;
        let Draft {
            negative,
            mut left,
            mut right,
        } = draft;

        if left.contains('.') {
            right.retain(|c| c != '.');
        }
        truncate_fraction(&mut left, &mut right, policy.precision.focused_places());

        let (left_int, right_int) = integer_len(&left, &right);
        let int_len = left_int + right_int;
        let zeros = left
            .bytes()
            .take(left_int)
            .chain(right.bytes().take(right_int))
            .take_while(|b| *b == b'0')
            .count();
        let drop = match policy.behavior.leading_zero {
            // One zero stays when the integer part is nothing but zeros.
            LeadingZero::Deny if zeros == int_len => zeros.saturating_sub(1),
            LeadingZero::Deny => zeros,
            LeadingZero::Allow | LeadingZero::Keep => {
                zeros.min(int_len.saturating_sub(policy.bounds.integer_budget(negative)))
            }
        };
        let from_left = drop.min(left_int);
        left.drain(..from_left);
        right.drain(..drop - from_left);

        if left.starts_with('.') || (left.is_empty() && right.starts_with('.')) {
            left.insert(0, '0');
        }

        let (left_int, right_int) = integer_len(&left, &right);
        if left_int + right_int > policy.bounds.integer_budget(negative) {
            log::trace!(target: "numfield.session", "capacity exceeded by {left:?}|{right:?}");
            return Err(Rejection::Capacity);
        }

        let mut combined = String::with_capacity(left.len() + right.len() + 1);
        let has_digits = left.bytes().chain(right.bytes()).any(|b| b.is_ascii_digit());
        if has_digits {
            if negative {
                combined.push('-');
            }
            combined.push_str(&left);
            combined.push_str(&right);
        }

        let check = in_range(&combined, policy);
        if !check.floor_ok {
            return Err(Rejection::Below);
        }
        if !check.ceiling_ok {
            return Err(Rejection::Above);
        }
        Ok(Prepared {
            raw: combined,
            negative,
            left,
        })
    }

    /// Show a prepared edit. `Input` fires only when the display changed.
    pub(super) fn apply(&mut self, prepared: Prepared) {
        let display = if prepared.raw.is_empty() {
            self.empty_display(prepared.negative)
        } else {
            format(&prepared.raw, &self.policy, Presentation::Editing)
        };
        let caret = relocate_caret(&display, &prepared.left, &self.policy);
        log::trace!(
            target: "numfield.session",
            "apply {:?} -> {display:?} caret {caret}",
            prepared.raw
        );

        let changed = display != self.display;
        self.display = display;
        self.caret = caret;
        self.raw = prepared.raw;
        self.trailing_negative =
            prepared.negative && self.policy.symbols.sign_side() == SignSide::Trailing;
        self.clear_selection();
        if changed {
            self.notifications.push(Notification::Input);
        }
    }

    pub(super) fn reject(&mut self, rejection: Rejection) {
        log::debug!(target: "numfield.session", "edit rejected: {rejection:?}");
        self.notifications.extend(rejection.notification());
    }

    /// Prepare and apply, or reject leaving display and caret untouched.
    pub(super) fn commit(&mut self, draft: Draft) -> bool {
        match self.prepare(draft) {
            Ok(prepared) => {
                self.apply(prepared);
                true
            }
            Err(rejection) => {
                self.reject(rejection);
                false
            }
        }
    }

    /// What a field without digits shows mid-edit.
    pub(super) fn empty_display(&self, negative: bool) -> String {
        if negative {
            return format_empty(&self.policy, true);
        }
        match self.policy.behavior.empty_value {
            EmptyValue::Zero => String::new(),
            EmptyValue::Focus | EmptyValue::Press | EmptyValue::Always => {
                format_empty(&self.policy, false)
            }
        }
    }
}
