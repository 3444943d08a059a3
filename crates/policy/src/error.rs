use std::fmt;

/// Reasons a set of [`FormatOptions`](crate::FormatOptions) is rejected.
///
/// Resolution never corrects an invalid option silently: every variant is
/// fatal to the `resolve` call that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// The decimal character (or its alternate) also appears in the group separator.
    SeparatorCollision { separator: String, decimal: char },
    /// A decimal-place count is negative.
    InvalidDecimalPlaces { field: &'static str, value: i64 },
    /// `focus_decimal_places` is smaller than `decimal_places`.
    FocusPlacesBelowDecimalPlaces { focus: usize, decimal: usize },
    MinAboveMax { minimum: String, maximum: String },
    /// A bound (or the arrow step) is not a decimal number.
    InvalidBound { field: &'static str, value: String },
    UnknownRoundingMode(String),
    UnknownBracketPair(String),
    UnknownOutputLocale(String),
    /// The currency symbol or suffix text could be mistaken for part of the number.
    AmbiguousAffix { field: &'static str, value: String },
    /// A sign character collides with digits or separators.
    AmbiguousSign { field: &'static str, value: char },
    /// The options document itself could not be parsed.
    Parse(String),
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::SeparatorCollision { separator, decimal } => write!(
                f,
                "decimal character {decimal:?} collides with group separator {separator:?}"
            ),
            PolicyError::InvalidDecimalPlaces { field, value } => {
                write!(f, "{field} must be a non-negative integer, got {value}")
            }
            PolicyError::FocusPlacesBelowDecimalPlaces { focus, decimal } => write!(
                f,
                "focus_decimal_places ({focus}) must be at least decimal_places ({decimal})"
            ),
            PolicyError::MinAboveMax { minimum, maximum } => write!(
                f,
                "minimum_value {minimum} is greater than maximum_value {maximum}"
            ),
            PolicyError::InvalidBound { field, value } => {
                write!(f, "{field} is not a decimal number: {value:?}")
            }
            PolicyError::UnknownRoundingMode(mode) => write!(f, "unknown rounding mode {mode:?}"),
            PolicyError::UnknownBracketPair(pair) => write!(f, "unsupported bracket pair {pair:?}"),
            PolicyError::UnknownOutputLocale(locale) => {
                write!(f, "unknown output locale {locale:?}")
            }
            PolicyError::AmbiguousAffix { field, value } => write!(
                f,
                "{field} {value:?} contains digits, the decimal character or the negative sign"
            ),
            PolicyError::AmbiguousSign { field, value } => write!(
                f,
                "{field} {value:?} collides with digits, the decimal character or the group separator"
            ),
            PolicyError::Parse(message) => write!(f, "invalid format options: {message}"),
        }
    }
}

impl std::error::Error for PolicyError {}
