use crate::error::PolicyError;
use std::fmt;
use std::str::FromStr;

/// Glyph pairs accepted for negative-bracket notation, written `open,close`.
const SUPPORTED: &[(char, char)] = &[
    ('(', ')'),
    ('[', ']'),
    ('<', '>'),
    ('{', '}'),
    ('〈', '〉'),
    ('｢', '｣'),
    ('⸤', '⸥'),
    ('⟦', '⟧'),
    ('‹', '›'),
    ('«', '»'),
];

/// Opening and closing glyphs that replace the negative sign while a field is
/// not focused, e.g. `(1,234.56)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BracketPair {
    pub open: char,
    pub close: char,
}

impl BracketPair {
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        ch == self.open || ch == self.close
    }
}

impl FromStr for BracketPair {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || PolicyError::UnknownBracketPair(s.to_string());
        let (open, close) = s.split_once(',').ok_or_else(unknown)?;
        let mut open_chars = open.chars();
        let mut close_chars = close.chars();
        let (Some(open), None, Some(close), None) = (
            open_chars.next(),
            open_chars.next(),
            close_chars.next(),
            close_chars.next(),
        ) else {
            return Err(unknown());
        };

        SUPPORTED
            .iter()
            .any(|pair| *pair == (open, close))
            .then_some(Self { open, close })
            .ok_or_else(unknown)
    }
}

impl fmt::Display for BracketPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.open, self.close)
    }
}
