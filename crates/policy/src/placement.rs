use serde::Deserialize;

/// Side of the number the currency symbol sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPlacement {
    #[default]
    Prefix,
    Suffix,
}

/// Position of the sign relative to the currency symbol and the number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativePlacement {
    Left,
    Right,
    Prefix,
    Suffix,
}

impl NegativePlacement {
    pub fn default_for(currency: CurrencyPlacement) -> Self {
        match currency {
            CurrencyPlacement::Prefix => NegativePlacement::Left,
            CurrencyPlacement::Suffix => NegativePlacement::Prefix,
        }
    }
}

/// One of the three movable pieces of a formatted value. Suffix text is not a
/// glyph: it is always rendered last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Sign,
    Currency,
    Number,
}

/// Whether the sign is rendered before or after the digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignSide {
    Leading,
    Trailing,
}

/// Left-to-right order of sign, currency and number for one placement pair.
///
/// Every combination is spelled out so a new placement cannot fall through to
/// a default layout.
pub fn glyph_order(currency: CurrencyPlacement, negative: NegativePlacement) -> [Glyph; 3] {
    use CurrencyPlacement as C;
    use Glyph::*;
    use NegativePlacement as N;

    match (currency, negative) {
        (C::Prefix, N::Left) => [Sign, Currency, Number],
        (C::Prefix, N::Right) => [Currency, Sign, Number],
        (C::Prefix, N::Prefix) => [Sign, Currency, Number],
        (C::Prefix, N::Suffix) => [Currency, Number, Sign],
        (C::Suffix, N::Left) => [Number, Sign, Currency],
        (C::Suffix, N::Right) => [Number, Currency, Sign],
        (C::Suffix, N::Prefix) => [Sign, Number, Currency],
        (C::Suffix, N::Suffix) => [Number, Currency, Sign],
    }
}

impl SignSide {
    pub fn of(currency: CurrencyPlacement, negative: NegativePlacement) -> Self {
        let order = glyph_order(currency, negative);
        let sign = order.iter().position(|g| *g == Glyph::Sign);
        let number = order.iter().position(|g| *g == Glyph::Number);
        if sign < number {
            SignSide::Leading
        } else {
            SignSide::Trailing
        }
    }
}
