//! # codec
//!
//! Pure transforms between the text a numeric field displays and the raw
//! decimal string it stands for.
//!
//! - [`strip`] / [`strip_part`]: formatted display to raw digits
//! - [`format`] / [`render`]: raw digits to display
//! - [`round`]: digit-string rounding under a [`RoundingMode`](policy::RoundingMode)
//! - [`in_range`]: bound checks on the exact decimal value
//! - [`localize`]: raw value rendered for an [`OutputLocale`](policy::OutputLocale)
//!
//! Raw strings are canonical ASCII: an optional leading `-`, digits, and an
//! optional `.` fraction. Nothing in this crate holds state.
//!
//! ```
//! use codec::{Presentation, render, strip};
//! use policy::{FormatOptions, FormatPolicy};
//!
//! let policy = FormatPolicy::resolve(&FormatOptions::dollar()).unwrap();
//! let shown = render("-1234.5", &policy, Presentation::Resting);
//! assert_eq!(shown, "-$1,234.50");
//! assert_eq!(strip(&shown, &policy).raw, "-1234.50");
//! ```

mod format;
mod locale;
mod range;
mod round;
mod strip;

pub use format::{Presentation, format, format_empty, group_integer, render};
pub use locale::{Localized, localize};
pub use range::{RangeCheck, in_range};
pub use round::round;
pub use strip::{Part, Stripped, parse_number, strip, strip_part};

pub use decimal::{canonicalize, compare};
