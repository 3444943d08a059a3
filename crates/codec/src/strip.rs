//! Formatted display to raw digits.

use memchr::memmem;
use policy::{FormatPolicy, LeadingZero, SignSide};
use std::borrow::Cow;

/// Result of stripping a whole display string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stripped {
    /// Signed raw digits, `""` when no digit survived.
    pub raw: String,
    /// A negative sign or bracket glyph was present, digits or not.
    pub negative: bool,
    /// The only negative sign sat after the digits of a trailing-sign layout.
    pub trailing_negative: bool,
}

/// One side of a display split at the caret.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Part {
    /// Unsigned digits with at most one `.`, leading zeros untouched.
    pub digits: String,
    /// A negative sign or bracket glyph was seen in this part.
    pub sign: bool,
}

impl Part {
    pub fn has_digits(&self) -> bool {
        self.digits.bytes().any(|b| b.is_ascii_digit())
    }

    pub fn has_point(&self) -> bool {
        self.digits.contains('.')
    }
}

struct Scan {
    digits: String,
    sign_before: bool,
    sign_after: bool,
    bracket: bool,
}

fn remove_all<'a>(haystack: Cow<'a, str>, needle: &str) -> Cow<'a, str> {
    if needle.is_empty() || memmem::find(haystack.as_bytes(), needle.as_bytes()).is_none() {
        return haystack;
    }
    let bytes = haystack.as_bytes();
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    for at in memmem::find_iter(bytes, needle.as_bytes()) {
        if at < last {
            continue;
        }
        out.push_str(&haystack[last..at]);
        last = at + needle.len();
    }
    out.push_str(&haystack[last..]);
    Cow::Owned(out)
}

/// Currency symbol and suffix text removed.
fn without_affixes<'a>(text: &'a str, policy: &FormatPolicy) -> Cow<'a, str> {
    let text = remove_all(Cow::Borrowed(text), &policy.symbols.suffix_text);
    remove_all(text, &policy.symbols.currency)
}

fn is_skippable(ch: char, policy: &FormatPolicy) -> bool {
    ch.is_whitespace() || policy.symbols.group_separator.contains(ch)
}

fn scan(text: &str, policy: &FormatPolicy) -> Scan {
    let symbols = &policy.symbols;
    let text = without_affixes(text, policy);
    let chars: Vec<char> = text
        .chars()
        .map(|c| {
            if symbols.is_decimal(c) {
                symbols.decimal
            } else {
                c
            }
        })
        .collect();

    let is_number_char = |c: char| c.is_ascii_digit() || c == symbols.decimal;
    let bracket = symbols
        .brackets
        .is_some_and(|pair| chars.iter().any(|c| pair.contains(*c)));
    let (Some(first), Some(last)) = (
        chars.iter().position(|c| is_number_char(*c)),
        chars.iter().rposition(|c| is_number_char(*c)),
    ) else {
        return Scan {
            digits: String::new(),
            sign_before: chars.contains(&symbols.negative_sign),
            sign_after: false,
            bracket,
        };
    };

    let mut digits = String::with_capacity(last + 1 - first);
    for &c in &chars[first..=last] {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if c == symbols.decimal && !digits.contains('.') {
            digits.push('.');
        } else if c != symbols.decimal && is_skippable(c, policy) {
            continue;
        } else {
            break;
        }
    }

    Scan {
        digits,
        sign_before: chars[..first].contains(&symbols.negative_sign),
        sign_after: chars[last + 1..].contains(&symbols.negative_sign),
        bracket,
    }
}

/// Drop leading zeros the policy does not allow. A bare leading `.` gains
/// its `0`.
fn normalize_leading_zeros(digits: &str, negative: bool, policy: &FormatPolicy) -> String {
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    let zeros = int.bytes().take_while(|b| *b == b'0').count();
    let drop = match policy.behavior.leading_zero {
        LeadingZero::Deny => zeros,
        LeadingZero::Allow | LeadingZero::Keep => {
            let budget = policy.bounds.integer_budget(negative);
            zeros.min(int.len().saturating_sub(budget))
        }
    };

    let mut out = String::with_capacity(digits.len() + 1);
    let int = &int[drop..];
    if int.is_empty() && (drop > 0 || frac.is_some()) {
        out.push('0');
    }
    out.push_str(int);
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Strip a whole display string back to raw digits.
///
/// Currency and suffix are removed wherever they occur; junk before the first
/// and after the last digit is discarded; separators inside the number are
/// skipped and any other character ends it.
pub fn strip(display: &str, policy: &FormatPolicy) -> Stripped {
    let scan = scan(display, policy);
    let negative = scan.sign_before || scan.sign_after || scan.bracket;
    let trailing_negative = scan.sign_after
        && !scan.sign_before
        && policy.symbols.sign_side() == SignSide::Trailing;

    let has_digit = scan.digits.bytes().any(|b| b.is_ascii_digit());
    let raw = if has_digit {
        let body = normalize_leading_zeros(&scan.digits, negative, policy);
        if negative { format!("-{body}") } else { body }
    } else {
        String::new()
    };

    log::trace!(
        target: "numfield.codec",
        "strip {display:?} -> {raw:?} negative={negative} trailing={trailing_negative}"
    );
    Stripped {
        raw,
        negative,
        trailing_negative,
    }
}

/// Strip one side of a split display without touching leading zeros.
pub fn strip_part(text: &str, policy: &FormatPolicy) -> Part {
    let scan = scan(text, policy);
    Part {
        digits: scan.digits,
        sign: scan.sign_before || scan.sign_after || scan.bracket,
    }
}

/// Strictly parse free text (a paste, a programmatic value in display
/// notation) as a number.
///
/// Accepts optional brackets around the whole value, the currency symbol and
/// suffix text anywhere, one leading or trailing sign, group separators in
/// the integer part, and one decimal character. Returns the signed raw
/// digits, or `None` when anything else is present.
pub fn parse_number(text: &str, policy: &FormatPolicy) -> Option<String> {
    let symbols = &policy.symbols;
    let text = without_affixes(text, policy);
    let mut body = text.trim();
    let mut negative = false;

    if let Some(pair) = symbols.brackets {
        if let Some(inner) = body
            .strip_prefix(pair.open)
            .and_then(|rest| rest.strip_suffix(pair.close))
        {
            negative = true;
            body = inner.trim();
        }
    }

    let is_minus = |c: char| c == symbols.negative_sign || c == '-';
    let is_sign = |c: char| is_minus(c) || c == '+' || c == symbols.positive_sign;
    if let Some(c) = body.chars().next().filter(|c| is_sign(*c)) {
        negative ^= is_minus(c);
        body = body[c.len_utf8()..].trim_start();
    } else if let Some(c) = body.chars().next_back().filter(|c| is_sign(*c)) {
        negative ^= is_minus(c);
        body = body[..body.len() - c.len_utf8()].trim_end();
    }

    let mut digits = String::with_capacity(body.len());
    let mut seen_point = false;
    for c in body.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if symbols.is_decimal(c) && !seen_point {
            seen_point = true;
            digits.push('.');
        } else if !seen_point && !digits.is_empty() && symbols.group_separator.contains(c) {
            continue;
        } else {
            return None;
        }
    }
    if !digits.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.ends_with('.') {
        digits.pop();
    }
    if digits.starts_with('.') {
        digits.insert(0, '0');
    }
    Some(if negative { format!("-{digits}") } else { digits })
}

#[cfg(test)]
mod tests {
    use super::*;
    use policy::{CurrencyPlacement, FormatOptions, NegativePlacement};

    fn policy(options: FormatOptions) -> FormatPolicy {
        FormatPolicy::resolve(&options).unwrap()
    }

    #[test]
    fn strips_currency_separators_and_sign() {
        let p = policy(FormatOptions::dollar());
        let s = strip("-$1,234.50", &p);
        assert_eq!(s.raw, "-1234.50");
        assert!(s.negative);
        assert!(!s.trailing_negative);
        assert_eq!(strip("$220,242.76", &p).raw, "220242.76");
        assert_eq!(strip("", &p), Stripped::default());
    }

    #[test]
    fn junk_inside_the_number_ends_it() {
        let p = policy(FormatOptions::default());
        assert_eq!(strip("12abc34", &p).raw, "12");
        assert_eq!(strip("1.2.3", &p).raw, "1.2");
        assert_eq!(strip("abc", &p).raw, "");
    }

    #[test]
    fn alternate_decimal_maps_to_the_decimal_character() {
        let p = policy(FormatOptions {
            group_separator: Some(" ".to_string()),
            ..Default::default()
        });
        assert_eq!(strip("1 234,5", &p).raw, "1234.5");
    }

    #[test]
    fn suffix_currency_and_trailing_sign() {
        let p = policy(FormatOptions {
            currency_symbol: Some("€".to_string()),
            currency_placement: Some(CurrencyPlacement::Suffix),
            negative_placement: Some(NegativePlacement::Suffix),
            ..Default::default()
        });
        let s = strip("1,234.00€-", &p);
        assert_eq!(s.raw, "-1234.00");
        assert!(s.trailing_negative);

        let leading = policy(FormatOptions::dollar());
        assert!(!strip("$1.00-", &leading).trailing_negative);
    }

    #[test]
    fn brackets_mean_negative() {
        let p = policy(FormatOptions {
            bracket_pair: Some("(,)".to_string()),
            ..Default::default()
        });
        let s = strip("(999.99)", &p);
        assert_eq!(s.raw, "-999.99");
        assert!(s.negative);
    }

    #[test]
    fn leading_zeros_per_policy() {
        let deny = policy(FormatOptions::default());
        assert_eq!(strip("007", &deny).raw, "7");
        assert_eq!(strip("000", &deny).raw, "0");
        assert_eq!(strip("00.5", &deny).raw, "0.5");
        assert_eq!(strip(".5", &deny).raw, "0.5");

        let allow = policy(FormatOptions {
            leading_zero: Some(LeadingZero::Allow),
            maximum_value: Some("999".to_string()),
            ..Default::default()
        });
        assert_eq!(strip("007", &allow).raw, "007");
        assert_eq!(strip("0007", &allow).raw, "007");
        assert_eq!(strip("00012", &allow).raw, "012");
    }

    #[test]
    fn lone_sign_is_negative_without_digits() {
        let p = policy(FormatOptions::dollar());
        let s = strip("-$", &p);
        assert_eq!(s.raw, "");
        assert!(s.negative);
    }

    #[test]
    fn parts_keep_leading_zeros_and_report_signs() {
        let p = policy(FormatOptions::dollar());
        assert_eq!(
            strip_part("-$0,0", &p),
            Part {
                digits: "00".to_string(),
                sign: true
            }
        );
        let right = strip_part("34.50", &p);
        assert_eq!(right.digits, "34.50");
        assert!(!right.sign);
        assert!(right.has_point());
        assert!(!strip_part("$", &p).has_digits());
    }

    #[test]
    fn parse_number_is_strict() {
        let p = policy(FormatOptions {
            currency_symbol: Some("$".to_string()),
            bracket_pair: Some("(,)".to_string()),
            ..Default::default()
        });
        assert_eq!(parse_number("1234.5", &p).as_deref(), Some("1234.5"));
        assert_eq!(parse_number(" -$1,234.5 ", &p).as_deref(), Some("-1234.5"));
        assert_eq!(parse_number("1234.5-", &p).as_deref(), Some("-1234.5"));
        assert_eq!(parse_number("(12)", &p).as_deref(), Some("-12"));
        assert_eq!(parse_number("+7.", &p).as_deref(), Some("7"));
        assert_eq!(parse_number(".25", &p).as_deref(), Some("0.25"));
        assert_eq!(parse_number("foobar", &p), None);
        assert_eq!(parse_number("12abc", &p), None);
        assert_eq!(parse_number("1.2.3", &p), None);
        assert_eq!(parse_number("-", &p), None);
        assert_eq!(parse_number("", &p), None);
    }
}
