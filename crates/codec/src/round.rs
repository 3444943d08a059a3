//! Digit-string rounding.

use policy::RoundingMode;

fn should_increment(mode: RoundingMode, negative: bool, digit: u8, sticky: bool, prev: u8) -> bool {
    let above_half = digit > 5 || (digit == 5 && sticky);
    let at_least_half = digit >= 5;
    let discarded = digit > 0 || sticky;
    match mode {
        RoundingMode::HalfUpSymmetric => at_least_half,
        RoundingMode::HalfUpAsymmetric if negative => above_half,
        RoundingMode::HalfUpAsymmetric => at_least_half,
        RoundingMode::HalfDownSymmetric => above_half,
        RoundingMode::HalfDownAsymmetric if negative => at_least_half,
        RoundingMode::HalfDownAsymmetric => above_half,
        RoundingMode::HalfEven => above_half || (digit == 5 && prev % 2 == 1),
        RoundingMode::Up => discarded,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => !negative && discarded,
        RoundingMode::Floor => negative && discarded,
        RoundingMode::Nearest05 | RoundingMode::Up05 | RoundingMode::Down05 => false,
    }
}

fn finish(negative: bool, int: &str, frac: &str, places: usize, pad: bool) -> String {
    let mut frac: String = frac.chars().take(places).collect();
    if pad {
        while frac.len() < places {
            frac.push('0');
        }
    } else {
        while frac.ends_with('0') {
            frac.pop();
        }
    }
    let int = if int.is_empty() { "0" } else { int };
    let zero = int.bytes().chain(frac.bytes()).all(|b| b == b'0');

    let mut out = String::with_capacity(int.len() + frac.len() + 2);
    if negative && !zero {
        out.push('-');
    }
    out.push_str(int);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

fn round_twentieth(raw: &str, places: usize, mode: RoundingMode, pad: bool) -> String {
    let value: f64 = raw.parse().unwrap_or(0.0);
    let scaled = value * 20.0;
    let stepped = match mode {
        RoundingMode::Up05 => scaled.ceil(),
        RoundingMode::Down05 => scaled.floor(),
        _ => scaled.round(),
    } / 20.0;
    let text = format!("{stepped:.2}");
    if places < 2 {
        return round(&text, places, RoundingMode::HalfUpSymmetric, pad);
    }
    let (negative, body) = match text.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, text.as_str()),
    };
    let (int, frac) = body.split_once('.').unwrap_or((body, ""));
    finish(negative, int, frac, places, pad)
}

/// ASCII digits with at most one `.`.
fn is_plain_decimal(body: &str) -> bool {
    let mut dot = false;
    body.bytes().all(|b| match b {
        b'0'..=b'9' => true,
        b'.' if !dot => {
            dot = true;
            true
        }
        _ => false,
    })
}

/// Round a raw value to `places` fractional digits.
///
/// `raw` must be a plain decimal: an optional leading `-`, digits and at
/// most one `.`. Anything else, like the empty string, rounds to the empty
/// string.
///
/// Works on the digits themselves so values longer than an `f64` mantissa
/// stay exact; only the `*05` modes go through floating point. With `pad`
/// the result has exactly `places` fractional digits, otherwise trailing
/// zeros are dropped. A result of zero is never negative.
pub fn round(raw: &str, places: usize, mode: RoundingMode, pad: bool) -> String {
    if raw.is_empty() || raw == "-" {
        return String::new();
    }
    if !is_plain_decimal(raw.strip_prefix('-').unwrap_or(raw)) {
        log::debug!(target: "numfield.codec", "round refused {raw:?}");
        return String::new();
    }
    if mode.is_twentieth() {
        return round_twentieth(raw, places, mode, pad);
    }

    let (negative, body) = match raw.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, raw),
    };
    let (int, frac) = body.split_once('.').unwrap_or((body, ""));
    if frac.len() <= places {
        return finish(negative, int, frac, places, pad);
    }

    let int = if int.is_empty() { "0" } else { int };
    let mut kept: Vec<u8> = int
        .bytes()
        .chain(frac.bytes().take(places))
        .map(|b| b - b'0')
        .collect();
    let digit = frac.as_bytes()[places] - b'0';
    let sticky = frac.bytes().skip(places + 1).any(|b| b != b'0');
    let prev = kept.last().copied().unwrap_or(0);

    let mut int_len = int.len();
    if should_increment(mode, negative, digit, sticky, prev) {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, 1);
            int_len += 1;
        }
    }

    let text: String = kept.iter().map(|d| char::from(b'0' + d)).collect();
    let (int, frac) = text.split_at(int_len);
    let rounded = finish(negative, int, frac, places, pad);
    log::trace!(target: "numfield.codec", "round {raw:?} to {places} ({}) -> {rounded:?}", mode.code());
    rounded
}
