use crate::brackets::BracketPair;
use crate::error::PolicyError;
use crate::grouping::GroupingStyle;
use crate::modes::{EmptyValue, InvalidPaste, LeadingZero, OutputLocale, OverrideLimits};
use crate::options::FormatOptions;
use crate::placement::{CurrencyPlacement, Glyph, NegativePlacement, SignSide, glyph_order};
use crate::rounding::RoundingMode;
use decimal::Decimal;

const DEFAULT_MINIMUM: &str = "-9999999999999.99";
const DEFAULT_MAXIMUM: &str = "9999999999999.99";

/// Characters and affixes used to render a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbols {
    /// May be empty (no grouping) or longer than one character.
    pub group_separator: String,
    pub decimal: char,
    /// Accepted on input as a synonym for `decimal`, never rendered.
    pub alternate_decimal: Option<char>,
    pub grouping: GroupingStyle,
    pub currency: String,
    pub currency_placement: CurrencyPlacement,
    /// Always resolved, even when the options leave it unset.
    pub negative_placement: NegativePlacement,
    pub negative_sign: char,
    pub positive_sign: char,
    pub show_positive_sign: bool,
    pub suffix_text: String,
    pub brackets: Option<BracketPair>,
}

impl Symbols {
    pub fn glyph_order(&self) -> [Glyph; 3] {
        glyph_order(self.currency_placement, self.negative_placement)
    }

    pub fn sign_side(&self) -> SignSide {
        SignSide::of(self.currency_placement, self.negative_placement)
    }

    /// True for `decimal` and its alternate.
    #[inline]
    pub fn is_decimal(&self, ch: char) -> bool {
        ch == self.decimal || Some(ch) == self.alternate_decimal
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub minimum: Decimal,
    pub maximum: Decimal,
    pub override_limits: Option<OverrideLimits>,
    /// Integer digits allowed for non-negative values.
    pub max_integer_digits_positive: usize,
    /// Integer digits allowed for negative values.
    pub max_integer_digits_negative: usize,
}

impl Bounds {
    pub fn integer_budget(&self, negative: bool) -> usize {
        if negative {
            self.max_integer_digits_negative
        } else {
            self.max_integer_digits_positive
        }
    }

    /// Whether the sign can be flipped to negative at all.
    pub fn allows_negative(&self) -> bool {
        self.minimum.is_negative()
    }

    /// Whether every permitted value is non-positive.
    pub fn only_non_positive(&self) -> bool {
        self.allows_negative() && !self.maximum.is_positive()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Precision {
    pub decimal_places: usize,
    pub focus_decimal_places: Option<usize>,
    pub rounding: RoundingMode,
    pub padding: bool,
}

impl Precision {
    /// Places shown while the field has focus.
    pub fn focused_places(&self) -> usize {
        self.focus_decimal_places.unwrap_or(self.decimal_places)
    }

    /// Places kept in the raw value.
    pub fn raw_places(&self) -> usize {
        self.decimal_places.max(self.focused_places())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Behavior {
    pub leading_zero: LeadingZero,
    pub empty_value: EmptyValue,
    pub output_locale: OutputLocale,
    pub unformat_on_submit: bool,
    pub persist: bool,
    pub formula_mode: bool,
    pub cancellable: bool,
    pub select_number_only: bool,
    pub select_on_focus: bool,
    pub step: Decimal,
    pub arrow_step: bool,
    pub invalid_paste: InvalidPaste,
}

/// A validated, immutable formatting configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatPolicy {
    pub symbols: Symbols,
    pub bounds: Bounds,
    pub precision: Precision,
    pub behavior: Behavior,
    options: FormatOptions,
}

impl FormatPolicy {
    pub fn resolve(options: &FormatOptions) -> Result<Self, PolicyError> {
        let symbols = resolve_symbols(options)?;
        let bounds = resolve_bounds(options)?;
        let precision = resolve_precision(options, &bounds)?;
        let behavior = resolve_behavior(options)?;

        let mut policy = FormatPolicy {
            symbols,
            bounds,
            precision,
            behavior,
            options: options.clone(),
        };
        if policy.symbols.alternate_decimal.is_none() && policy.precision.raw_places() > 0 {
            policy.symbols.alternate_decimal = default_alternate_decimal(&policy.symbols);
        }

        log::trace!(
            target: "numfield.policy",
            "resolved policy: places={} focused={} rounding={} min={} max={} layout={:?}",
            policy.precision.decimal_places,
            policy.precision.focused_places(),
            policy.precision.rounding.code(),
            policy.bounds.minimum,
            policy.bounds.maximum,
            policy.symbols.glyph_order()
        );
        Ok(policy)
    }

    /// The options this policy was resolved from.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }
}

fn resolve_symbols(options: &FormatOptions) -> Result<Symbols, PolicyError> {
    let group_separator = options
        .group_separator
        .clone()
        .unwrap_or_else(|| ",".to_string());
    let decimal = options.decimal_character.unwrap_or('.');
    let alternate_decimal = options.alternate_decimal_character;

    for candidate in std::iter::once(decimal).chain(alternate_decimal) {
        if group_separator.contains(candidate) {
            return Err(PolicyError::SeparatorCollision {
                separator: group_separator,
                decimal: candidate,
            });
        }
    }

    let negative_sign = options.negative_sign.unwrap_or('-');
    let positive_sign = options.positive_sign.unwrap_or('+');
    for (field, sign) in [("negative_sign", negative_sign), ("positive_sign", positive_sign)] {
        if sign.is_ascii_digit()
            || sign == decimal
            || Some(sign) == alternate_decimal
            || group_separator.contains(sign)
        {
            return Err(PolicyError::AmbiguousSign { field, value: sign });
        }
    }
    if negative_sign == positive_sign {
        return Err(PolicyError::AmbiguousSign {
            field: "positive_sign",
            value: positive_sign,
        });
    }

    let currency = options.currency_symbol.clone().unwrap_or_default();
    let suffix_text = options.suffix_text.clone().unwrap_or_default();
    for (field, affix) in [("currency_symbol", &currency), ("suffix_text", &suffix_text)] {
        if affix
            .chars()
            .any(|c| c.is_ascii_digit() || c == negative_sign || c == decimal)
        {
            return Err(PolicyError::AmbiguousAffix {
                field,
                value: affix.clone(),
            });
        }
    }

    let currency_placement = options.currency_placement.unwrap_or_default();
    let negative_placement = options
        .negative_placement
        .unwrap_or_else(|| NegativePlacement::default_for(currency_placement));

    let brackets = options
        .bracket_pair
        .as_deref()
        .map(str::parse::<BracketPair>)
        .transpose()?;

    Ok(Symbols {
        group_separator,
        decimal,
        alternate_decimal,
        grouping: options.grouping_style.unwrap_or_default(),
        currency,
        currency_placement,
        negative_placement,
        negative_sign,
        positive_sign,
        show_positive_sign: options.show_positive_sign.unwrap_or(false),
        suffix_text,
        brackets,
    })
}

fn parse_bound(field: &'static str, value: Option<&str>, default: &str) -> Result<Decimal, PolicyError> {
    let value = value.unwrap_or(default);
    Decimal::parse(value).map_err(|_| PolicyError::InvalidBound {
        field,
        value: value.to_string(),
    })
}

fn resolve_bounds(options: &FormatOptions) -> Result<Bounds, PolicyError> {
    let minimum = parse_bound("minimum_value", options.minimum_value.as_deref(), DEFAULT_MINIMUM)?;
    let maximum = parse_bound("maximum_value", options.maximum_value.as_deref(), DEFAULT_MAXIMUM)?;
    if minimum > maximum {
        return Err(PolicyError::MinAboveMax {
            minimum: minimum.to_string(),
            maximum: maximum.to_string(),
        });
    }

    Ok(Bounds {
        max_integer_digits_positive: maximum.integer_digits(),
        max_integer_digits_negative: minimum.integer_digits(),
        minimum,
        maximum,
        override_limits: options.override_limits,
    })
}

fn places(field: &'static str, value: i64) -> Result<usize, PolicyError> {
    usize::try_from(value).map_err(|_| PolicyError::InvalidDecimalPlaces { field, value })
}

fn resolve_precision(options: &FormatOptions, bounds: &Bounds) -> Result<Precision, PolicyError> {
    let decimal_places = match options.decimal_places {
        Some(value) => places("decimal_places", value)?,
        None => bounds
            .minimum
            .fraction_digits()
            .max(bounds.maximum.fraction_digits()),
    };
    let focus_decimal_places = options
        .focus_decimal_places
        .map(|value| places("focus_decimal_places", value))
        .transpose()?;
    if let Some(focus) = focus_decimal_places
        && focus < decimal_places
    {
        return Err(PolicyError::FocusPlacesBelowDecimalPlaces {
            focus,
            decimal: decimal_places,
        });
    }

    let rounding = match options.rounding_mode.as_deref() {
        Some(code) => code.parse()?,
        None => RoundingMode::default(),
    };

    Ok(Precision {
        decimal_places,
        focus_decimal_places,
        rounding,
        padding: options.decimal_padding.unwrap_or(true),
    })
}

fn resolve_behavior(options: &FormatOptions) -> Result<Behavior, PolicyError> {
    let output_locale = match options.output_locale.as_deref() {
        Some(code) => code.parse()?,
        None => OutputLocale::default(),
    };
    let step_text = options.step.as_deref().unwrap_or("1");
    let step = Decimal::parse(step_text)
        .ok()
        .filter(Decimal::is_positive)
        .ok_or_else(|| PolicyError::InvalidBound {
            field: "step",
            value: step_text.to_string(),
        })?;

    Ok(Behavior {
        leading_zero: options.leading_zero.unwrap_or_default(),
        empty_value: options.empty_value.unwrap_or_default(),
        output_locale,
        unformat_on_submit: options.unformat_on_submit.unwrap_or(false),
        persist: options.persist.unwrap_or(false),
        formula_mode: options.formula_mode.unwrap_or(false),
        cancellable: options.cancellable.unwrap_or(true),
        select_number_only: options.select_number_only.unwrap_or(true),
        select_on_focus: options.select_on_focus.unwrap_or(false),
        step,
        arrow_step: options.arrow_step.unwrap_or(true),
        invalid_paste: options.invalid_paste.unwrap_or_default(),
    })
}

fn default_alternate_decimal(symbols: &Symbols) -> Option<char> {
    match symbols.decimal {
        '.' if !symbols.group_separator.contains(',') => Some(','),
        ',' if !symbols.group_separator.contains('.') => Some('.'),
        _ => None,
    }
}
