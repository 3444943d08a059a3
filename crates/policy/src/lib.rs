//! # policy
//!
//! The formatting configuration of a numeric input field.
//!
//! User-facing options arrive as a [`FormatOptions`] value (deserializable
//! from TOML, every field optional). [`FormatPolicy::resolve`] validates them
//! once and produces an immutable policy that can be shared between fields
//! and threads. Derived artifacts (integer digit budgets, the effective sign
//! placement, the default alternate decimal character) are computed during
//! resolution and never recomputed per keystroke.
//!
//! ```
//! use policy::{FormatOptions, FormatPolicy};
//!
//! let options = FormatOptions::from_toml_str(r#"
//!     currency_symbol = "$"
//!     minimum_value = "-1000"
//!     maximum_value = "1000.125"
//! "#).unwrap();
//! let policy = FormatPolicy::resolve(&options).unwrap();
//! assert_eq!(policy.precision.decimal_places, 3);
//! assert_eq!(policy.bounds.max_integer_digits_positive, 4);
//! ```

mod brackets;
mod error;
mod grouping;
mod modes;
mod options;
mod placement;
mod resolve;
mod rounding;

pub use brackets::BracketPair;
pub use error::PolicyError;
pub use grouping::{GroupSizes, GroupingStyle};
pub use modes::{EmptyValue, InvalidPaste, LeadingZero, OutputLocale, OverrideLimits};
pub use options::FormatOptions;
pub use placement::{CurrencyPlacement, Glyph, NegativePlacement, SignSide, glyph_order};
pub use resolve::{Behavior, Bounds, FormatPolicy, Precision, Symbols};
pub use rounding::RoundingMode;

pub use decimal::Decimal;
