//! Exact addition and subtraction, used for arrow-key stepping.

use crate::value::Decimal;
use std::cmp::Ordering;
use std::ops::{Add, Neg, Sub};

impl Decimal {
    /// Magnitude scaled by `10^scale` as big-endian digits.
    ///
    /// `scale` must be at least `self.fraction_digits()`.
    fn scaled_magnitude(&self, scale: usize) -> Vec<u8> {
        if self.is_zero() {
            return vec![0];
        }
        let total = self.exponent + scale as i64;
        debug_assert!(total >= self.digits.len() as i64);
        let mut out = self.digits.clone();
        out.resize(total as usize, 0);
        out
    }

    fn from_scaled(negative: bool, magnitude: &[u8], scale: usize) -> Self {
        let mut text = String::with_capacity(magnitude.len() + 2);
        if negative {
            text.push('-');
        }
        let (int, frac) = if magnitude.len() > scale {
            magnitude.split_at(magnitude.len() - scale)
        } else {
            (&[][..], magnitude)
        };
        if int.is_empty() {
            text.push('0');
        }
        text.extend(int.iter().map(|d| char::from(b'0' + d)));
        if scale > 0 {
            text.push('.');
            text.extend(std::iter::repeat_n('0', scale - frac.len()));
            text.extend(frac.iter().map(|d| char::from(b'0' + d)));
        }
        // Built from digits only, so parsing cannot fail.
        Self::parse(&text).unwrap_or_default()
    }
}

fn add_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0u8;
    let mut ai = a.iter().rev();
    let mut bi = b.iter().rev();
    loop {
        let (x, y) = (ai.next(), bi.next());
        if x.is_none() && y.is_none() {
            break;
        }
        let sum = x.copied().unwrap_or(0) + y.copied().unwrap_or(0) + carry;
        out.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out.reverse();
    out
}

/// `a - b` for magnitudes with `a >= b`.
fn sub_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i8;
    let mut bi = b.iter().rev();
    for x in a.iter().rev() {
        let mut diff = *x as i8 - borrow - bi.next().copied().unwrap_or(0) as i8;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u8);
    }
    out.reverse();
    out
}

fn cmp_scaled(a: &[u8], b: &[u8]) -> Ordering {
    let a = &a[a.iter().take_while(|d| **d == 0).count()..];
    let b = &b[b.iter().take_while(|d| **d == 0).count()..];
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Add<&Decimal> for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: &Decimal) -> Decimal {
        let scale = self.fraction_digits().max(rhs.fraction_digits());
        let a = self.scaled_magnitude(scale);
        let b = rhs.scaled_magnitude(scale);

        if self.negative == rhs.negative {
            return Decimal::from_scaled(self.negative, &add_magnitudes(&a, &b), scale);
        }
        match cmp_scaled(&a, &b) {
            Ordering::Equal => Decimal::zero(),
            Ordering::Greater => Decimal::from_scaled(self.negative, &sub_magnitudes(&a, &b), scale),
            Ordering::Less => Decimal::from_scaled(rhs.negative, &sub_magnitudes(&b, &a), scale),
        }
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        if self.is_zero() {
            return Decimal::zero();
        }
        Decimal {
            negative: !self.negative,
            ..self.clone()
        }
    }
}

impl Sub<&Decimal> for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &Decimal) -> Decimal {
        self + &(-rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn adds_with_carry_across_the_point() {
        assert_eq!((&d("999.99") + &d("0.01")).to_string(), "1000");
        assert_eq!((&d("0.5") + &d("0.25")).to_string(), "0.75");
    }

    #[test]
    fn mixed_signs_subtract() {
        assert_eq!((&d("-5") + &d("3")).to_string(), "-2");
        assert_eq!((&d("5") + &d("-7.5")).to_string(), "-2.5");
        assert_eq!((&d("1.25") - &d("1.25")).to_string(), "0");
        assert_eq!((&d("0") - &d("1")).to_string(), "-1");
    }

    #[test]
    fn exact_for_long_values() {
        let big = d("9999999999999999999999999999.99");
        assert_eq!(
            (&big + &d("0.01")).to_string(),
            "10000000000000000000000000000"
        );
    }

    #[test]
    fn negating_zero_stays_zero() {
        assert!(!(-&Decimal::zero()).is_negative());
    }
}
