//! Caret arithmetic over formatted displays.
//!
//! Offsets are byte indices into the display string and always land on a
//! UTF-8 character boundary, so currency symbols such as `€` or narrow
//! no-break spaces never split.

use policy::{CurrencyPlacement, FormatPolicy, Glyph};
use std::ops::Range;

/// Clamp a byte index to the nearest character boundary at or before it.
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "1€";
/// assert_eq!(clamp_to_char_boundary(s, 2), 1);
/// assert_eq!(clamp_to_char_boundary(s, 99), 4);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// The caret position one character to the left of `i`.
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i].char_indices().next_back().map_or(0, |(idx, _)| idx)
}

/// The caret position one character to the right of `i`.
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[i..].chars().next().map_or(s.len(), |c| i + c.len_utf8())
}

/// Byte range of the number inside a display.
///
/// With digits present this runs from the first to the last digit or
/// decimal character. An empty shell (`-$`, `€`) yields the empty range
/// where the number would be written, found by walking the layout past a
/// leading bracket, sign and currency.
pub fn numeric_span(display: &str, policy: &FormatPolicy) -> Range<usize> {
    let symbols = &policy.symbols;
    let is_number_char = |c: char| c.is_ascii_digit() || c == symbols.decimal;
    let first = display.char_indices().find(|(_, c)| is_number_char(*c));
    let last = display.char_indices().rev().find(|(_, c)| is_number_char(*c));
    if let (Some((start, _)), Some((end, ch))) = (first, last) {
        return start..end + ch.len_utf8();
    }

    let mut offset = 0;
    if let Some(pair) = symbols.brackets
        && display.starts_with(pair.open)
    {
        offset += pair.open.len_utf8();
    }
    for glyph in symbols.glyph_order() {
        let rest = &display[offset..];
        match glyph {
            Glyph::Sign => {
                if let Some(sign) = rest
                    .chars()
                    .next()
                    .filter(|c| *c == symbols.negative_sign || *c == symbols.positive_sign)
                {
                    offset += sign.len_utf8();
                }
            }
            Glyph::Currency => {
                if !symbols.currency.is_empty() && rest.starts_with(&symbols.currency) {
                    offset += symbols.currency.len();
                }
            }
            Glyph::Number => break,
        }
    }
    offset..offset
}

/// Where the caret belongs in a freshly formatted `display`, given the
/// significant characters (`left`: digits and `.`) that preceded it before
/// formatting.
///
/// The characters are looked up in order inside the number, skipping any
/// run of separators between them. An empty `left` puts the caret at the
/// start of the number; a failed lookup falls back next to the currency
/// symbol.
pub fn relocate_caret(display: &str, left: &str, policy: &FormatPolicy) -> usize {
    let symbols = &policy.symbols;
    let span = numeric_span(display, policy);
    if left.is_empty() {
        return span.start;
    }

    let mut wanted = left
        .chars()
        .map(|c| if c == '.' { symbols.decimal } else { c })
        .peekable();
    let mut found = None;
    for (i, ch) in display[span.clone()].char_indices() {
        let Some(&want) = wanted.peek() else {
            break;
        };
        if ch == want {
            wanted.next();
            if wanted.peek().is_none() {
                found = Some(span.start + i + ch.len_utf8());
                break;
            }
        } else if ch.is_ascii_digit() || ch == symbols.decimal {
            break;
        }
    }

    let caret = found.unwrap_or_else(|| {
        log::trace!(target: "numfield.session", "caret lookup of {left:?} failed in {display:?}");
        match symbols.currency_placement {
            CurrencyPlacement::Prefix => span.start,
            CurrencyPlacement::Suffix => span.end,
        }
    });
    caret.clamp(span.start, span.end)
}
