//! The normalized decimal representation.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// An exact decimal number.
///
/// The value is `0.d₀d₁d₂… × 10^exponent`, with `digits` free of leading and
/// trailing zeros. Zero is a single `0` digit with exponent `0` and is never
/// negative, so structural equality is numeric equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
    pub(crate) negative: bool,
    pub(crate) exponent: i64,
    pub(crate) digits: Vec<u8>,
}

/// Error returned when a string is not a plain decimal number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDecimalError {
    input: String,
}

impl ParseDecimalError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a decimal number: {:?}", self.input)
    }
}

impl std::error::Error for ParseDecimalError {}

impl Decimal {
    pub fn zero() -> Self {
        Self {
            negative: false,
            exponent: 0,
            digits: vec![0],
        }
    }

    /// Parse `[+-]digits[.digits]`. Either side of the point may be empty but
    /// not both; leading zeros and a trailing point are accepted.
    pub fn parse(raw: &str) -> Result<Self, ParseDecimalError> {
        let err = || ParseDecimalError {
            input: raw.to_string(),
        };

        let (negative, body) = match raw.as_bytes().first() {
            Some(b'-') => (true, &raw[1..]),
            Some(b'+') => (false, &raw[1..]),
            _ => (false, raw),
        };
        let (int, frac) = body.split_once('.').unwrap_or((body, ""));
        if int.is_empty() && frac.is_empty() {
            return Err(err());
        }
        if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        let all = int.bytes().chain(frac.bytes()).map(|b| b - b'0');
        let leading = int
            .bytes()
            .chain(frac.bytes())
            .take_while(|b| *b == b'0')
            .count();
        let mut digits: Vec<u8> = all.skip(leading).collect();
        while digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            return Ok(Self::zero());
        }

        Ok(Self {
            negative,
            exponent: int.len() as i64 - leading as i64,
            digits,
        })
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// `true` for values strictly above zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// Number of digits needed to write the integer part of `|self|`,
    /// counting a lone `0` as one digit.
    pub fn integer_digits(&self) -> usize {
        if self.is_zero() {
            return 1;
        }
        self.exponent.max(1) as usize
    }

    /// Number of significant fractional digits.
    pub fn fraction_digits(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        (self.digits.len() as i64 - self.exponent).max(0) as usize
    }

    /// Lossy conversion for callers that explicitly want a native number.
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(0.0)
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        // `Vec<u8>` ordering is digit-by-digit, then shorter-is-smaller, which
        // is exactly the magnitude order once trailing zeros are gone.
        self.exponent
            .cmp(&other.exponent)
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => {
                return if other.negative {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
            (false, true) => {
                return if self.negative {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
            (false, false) => {}
        }

        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut out = String::with_capacity(self.digits.len() + 3);
        if self.negative {
            out.push('-');
        }

        let len = self.digits.len() as i64;
        if self.exponent <= 0 {
            out.push_str("0.");
            out.extend(std::iter::repeat_n('0', (-self.exponent) as usize));
            out.extend(self.digits.iter().map(|d| char::from(b'0' + d)));
        } else {
            let int_len = self.exponent.min(len) as usize;
            out.extend(self.digits[..int_len].iter().map(|d| char::from(b'0' + d)));
            if self.exponent > len {
                out.extend(std::iter::repeat_n('0', (self.exponent - len) as usize));
            } else if self.exponent < len {
                out.push('.');
                out.extend(self.digits[int_len..].iter().map(|d| char::from(b'0' + d)));
            }
        }
        f.write_str(&out)
    }
}
