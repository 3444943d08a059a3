//! # decimal
//!
//! Exact decimal values for numeric input fields.
//!
//! Bounds such as `9999999999999.99` cannot be compared reliably through
//! `f64`, and neither can user input of arbitrary length. This crate keeps a
//! decimal string as a sign, an exponent and an array of significant digits,
//! which makes ordering a lexicographic comparison on a normalized form.
//!
//! - [`Decimal`]: the normalized value type (`Ord`, `Display`, `FromStr`)
//! - [`compare`]: compare two decimal strings without building values by hand
//! - [`canonicalize`]: the canonical text of a decimal string
//!
//! ```
//! use decimal::{Decimal, compare};
//! use std::cmp::Ordering;
//!
//! let a: Decimal = "9999999999999999999999999999.99".parse().unwrap();
//! let b: Decimal = "10000000000000000000000000000.00".parse().unwrap();
//! assert!(a < b);
//! assert_eq!(compare("-0.50", "-0.5"), Ok(Ordering::Equal));
//! ```

mod arith;
mod value;

pub use value::{Decimal, ParseDecimalError};

use std::cmp::Ordering;

/// Compare two decimal strings by value.
pub fn compare(a: &str, b: &str) -> Result<Ordering, ParseDecimalError> {
    let a: Decimal = a.parse()?;
    let b: Decimal = b.parse()?;
    Ok(a.cmp(&b))
}

/// Canonical text of a decimal string: no leading zeros (one kept before the
/// point), no trailing fractional zeros, no trailing point, and `0` for any
/// zero regardless of sign.
pub fn canonicalize(raw: &str) -> Result<String, ParseDecimalError> {
    raw.parse::<Decimal>().map(|d| d.to_string())
}
