use crate::error::PolicyError;
use std::str::FromStr;

/// The rounding rules applied when a value has more fractional digits than
/// the policy allows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// `S`: half away from zero.
    #[default]
    HalfUpSymmetric,
    /// `A`: half toward positive infinity.
    HalfUpAsymmetric,
    /// `s`: half toward zero.
    HalfDownSymmetric,
    /// `a`: half toward negative infinity.
    HalfDownAsymmetric,
    /// `B`: half to even (banker's rounding).
    HalfEven,
    /// `U`: away from zero.
    Up,
    /// `D`: toward zero.
    Down,
    /// `C`: toward positive infinity.
    Ceiling,
    /// `F`: toward negative infinity.
    Floor,
    /// `N05`: to the nearest 0.05.
    Nearest05,
    /// `U05`: up to the next 0.05.
    Up05,
    /// `D05`: down to the previous 0.05.
    Down05,
}

impl RoundingMode {
    pub fn code(self) -> &'static str {
        match self {
            RoundingMode::HalfUpSymmetric => "S",
            RoundingMode::HalfUpAsymmetric => "A",
            RoundingMode::HalfDownSymmetric => "s",
            RoundingMode::HalfDownAsymmetric => "a",
            RoundingMode::HalfEven => "B",
            RoundingMode::Up => "U",
            RoundingMode::Down => "D",
            RoundingMode::Ceiling => "C",
            RoundingMode::Floor => "F",
            RoundingMode::Nearest05 => "N05",
            RoundingMode::Up05 => "U05",
            RoundingMode::Down05 => "D05",
        }
    }

    /// The `*05` modes work in steps of one twentieth.
    pub fn is_twentieth(self) -> bool {
        matches!(
            self,
            RoundingMode::Nearest05 | RoundingMode::Up05 | RoundingMode::Down05
        )
    }
}

impl FromStr for RoundingMode {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "S" | "half-up-symmetric" => RoundingMode::HalfUpSymmetric,
            "A" | "half-up-asymmetric" => RoundingMode::HalfUpAsymmetric,
            "s" | "half-down-symmetric" => RoundingMode::HalfDownSymmetric,
            "a" | "half-down-asymmetric" => RoundingMode::HalfDownAsymmetric,
            "B" | "half-even" | "bankers" => RoundingMode::HalfEven,
            "U" | "up" => RoundingMode::Up,
            "D" | "down" => RoundingMode::Down,
            "C" | "ceiling" => RoundingMode::Ceiling,
            "F" | "floor" => RoundingMode::Floor,
            "N05" | "nearest-0.05" | "CHF" => RoundingMode::Nearest05,
            "U05" | "up-0.05" => RoundingMode::Up05,
            "D05" | "down-0.05" => RoundingMode::Down05,
            other => return Err(PolicyError::UnknownRoundingMode(other.to_string())),
        })
    }
}
