//! Raw digits to display.

use crate::round::round;
use policy::{EmptyValue, FormatPolicy, Glyph, GroupingStyle};

/// Which rendering of a value is wanted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Presentation {
    /// Unfocused: `decimal_places`, padding, brackets for negatives.
    Resting,
    /// Focused and idle: focus precision, padding, never brackets.
    Focused,
    /// Mid-edit: the typed fraction as is (a trailing decimal character and
    /// `-0` survive), never padded, never brackets.
    Editing,
}

impl Presentation {
    pub fn places(self, policy: &FormatPolicy) -> usize {
        match self {
            Presentation::Resting => policy.precision.decimal_places,
            Presentation::Focused | Presentation::Editing => policy.precision.focused_places(),
        }
    }
}

/// Insert `separator` into a run of integer digits.
pub fn group_integer(int: &str, separator: &str, style: GroupingStyle) -> String {
    if separator.is_empty() {
        return int.to_string();
    }
    let mut groups: Vec<&str> = Vec::new();
    let mut end = int.len();
    let mut sizes = style.group_sizes();
    while end > 0 {
        let size = sizes.next().unwrap_or(3);
        let start = end.saturating_sub(size);
        groups.push(&int[start..end]);
        end = start;
    }
    groups.reverse();
    groups.join(separator)
}

fn assemble(policy: &FormatPolicy, sign: Option<char>, number: &str) -> String {
    let symbols = &policy.symbols;
    let mut out = String::with_capacity(number.len() + symbols.currency.len() + 8);
    for glyph in symbols.glyph_order() {
        match glyph {
            Glyph::Sign => out.extend(sign),
            Glyph::Currency => out.push_str(&symbols.currency),
            Glyph::Number => out.push_str(number),
        }
    }
    out.push_str(&symbols.suffix_text);
    out
}

/// What an empty field shows: sign and currency in their slots, plus the
/// suffix text, without a number.
pub fn format_empty(policy: &FormatPolicy, negative: bool) -> String {
    let sign = negative.then_some(policy.symbols.negative_sign);
    assemble(policy, sign, "")
}

/// Format a raw value. No rounding happens here: the fraction is truncated
/// to the presentation's places and padded when the policy asks for it.
pub fn format(raw: &str, policy: &FormatPolicy, presentation: Presentation) -> String {
    if raw.is_empty() {
        let shown = match policy.behavior.empty_value {
            EmptyValue::Always => true,
            EmptyValue::Focus => presentation != Presentation::Resting,
            EmptyValue::Press | EmptyValue::Zero => false,
        };
        return if shown {
            format_empty(policy, false)
        } else {
            String::new()
        };
    }

    let symbols = &policy.symbols;
    let (negative, body) = match raw.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, raw),
    };
    let (int, frac, has_point) = match body.split_once('.') {
        Some((int, frac)) => (int, frac, true),
        None => (body, "", false),
    };
    let int = if int.is_empty() { "0" } else { int };

    let places = presentation.places(policy);
    let mut fraction: String = frac.chars().take(places).collect();
    let show_point = match presentation {
        Presentation::Editing => has_point && places > 0,
        Presentation::Resting | Presentation::Focused => {
            if policy.precision.padding {
                while fraction.len() < places {
                    fraction.push('0');
                }
            }
            !fraction.is_empty()
        }
    };

    let mut number = group_integer(int, &symbols.group_separator, symbols.grouping);
    if show_point {
        number.push(symbols.decimal);
        number.push_str(&fraction);
    }

    let out = match (negative, symbols.brackets) {
        (true, Some(pair)) if presentation == Presentation::Resting => {
            let inner = assemble(policy, None, &number);
            let mut wrapped = String::with_capacity(inner.len() + 8);
            wrapped.push(pair.open);
            wrapped.push_str(&inner);
            wrapped.push(pair.close);
            wrapped
        }
        (true, _) => assemble(policy, Some(symbols.negative_sign), &number),
        (false, _) if symbols.show_positive_sign => {
            assemble(policy, Some(symbols.positive_sign), &number)
        }
        (false, _) => assemble(policy, None, &number),
    };

    log::trace!(target: "numfield.codec", "format {raw:?} as {presentation:?} -> {out:?}");
    out
}

/// Round to the presentation's places, then format.
pub fn render(raw: &str, policy: &FormatPolicy, presentation: Presentation) -> String {
    if presentation == Presentation::Editing {
        return format(raw, policy, presentation);
    }
    let rounded = round(
        raw,
        presentation.places(policy),
        policy.precision.rounding,
        policy.precision.padding,
    );
    format(&rounded, policy, presentation)
}
