//! Small behavioural switches carried by a policy.

use crate::error::PolicyError;
use serde::Deserialize;
use std::str::FromStr;

/// How leading zeros typed by the user are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadingZero {
    /// Allowed while editing (up to the integer digit budget), removed on blur.
    Allow,
    /// Never kept: `007` becomes `7`.
    #[default]
    Deny,
    /// Allowed while editing and kept on blur.
    Keep,
}

/// What an empty field shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyValue {
    /// Show the currency symbol while focused.
    #[default]
    Focus,
    /// Show the currency symbol once a key has been pressed.
    Press,
    /// Always show the currency symbol.
    Always,
    /// An empty field becomes `0` on blur.
    Zero,
}

/// Bounds to ignore during validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideLimits {
    /// Enforce the maximum only.
    Ceiling,
    /// Enforce the minimum only.
    Floor,
    /// Enforce neither bound.
    Ignore,
}

/// Reaction to a paste that would leave the value out of range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidPaste {
    /// Restore the field and emit a notification.
    #[default]
    Reject,
    /// Restore the field silently.
    Ignore,
    /// Commit the violated bound instead.
    Clamp,
    /// Insert the longest prefix of the pasted digits that stays in range.
    Truncate,
}

/// Rendering used by localized value accessors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputLocale {
    /// The canonical raw string, e.g. `-1234.5`.
    #[default]
    String,
    /// A native number.
    Number,
    /// `.`: dot decimal, leading sign.
    Dot,
    /// `-.`: dot decimal, leading sign.
    NegativeDot,
    /// `,`: comma decimal, leading sign.
    Comma,
    /// `-,`: comma decimal, leading sign.
    NegativeComma,
    /// `.-`: dot decimal, trailing sign (`1234.5-`).
    DotNegative,
    /// `,-`: comma decimal, trailing sign (`1234,5-`).
    CommaNegative,
}

impl FromStr for OutputLocale {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "string" => Self::String,
            "number" => Self::Number,
            "." => Self::Dot,
            "-." => Self::NegativeDot,
            "," => Self::Comma,
            "-," => Self::NegativeComma,
            ".-" => Self::DotNegative,
            ",-" => Self::CommaNegative,
            other => return Err(PolicyError::UnknownOutputLocale(other.to_string())),
        })
    }
}
