use crate::error::PolicyError;
use crate::grouping::GroupingStyle;
use crate::modes::{EmptyValue, InvalidPaste, LeadingZero, OverrideLimits};
use crate::placement::{CurrencyPlacement, NegativePlacement};
use serde::Deserialize;

/// User-supplied formatting options. Every field is optional; unset fields
/// take the defaults applied by [`FormatPolicy::resolve`](crate::FormatPolicy::resolve).
///
/// Option values that need validation beyond their type (bounds, rounding
/// codes, bracket pairs, locales) are kept as text here and parsed during
/// resolution so that every failure surfaces as a [`PolicyError`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    pub group_separator: Option<String>,
    pub decimal_character: Option<char>,
    pub alternate_decimal_character: Option<char>,
    pub grouping_style: Option<GroupingStyle>,
    pub currency_symbol: Option<String>,
    pub currency_placement: Option<CurrencyPlacement>,
    pub negative_placement: Option<NegativePlacement>,
    pub negative_sign: Option<char>,
    pub positive_sign: Option<char>,
    pub show_positive_sign: Option<bool>,
    pub suffix_text: Option<String>,
    pub bracket_pair: Option<String>,
    pub minimum_value: Option<String>,
    pub maximum_value: Option<String>,
    pub decimal_places: Option<i64>,
    pub focus_decimal_places: Option<i64>,
    pub rounding_mode: Option<String>,
    pub decimal_padding: Option<bool>,
    pub leading_zero: Option<LeadingZero>,
    pub empty_value: Option<EmptyValue>,
    pub override_limits: Option<OverrideLimits>,
    pub output_locale: Option<String>,
    pub unformat_on_submit: Option<bool>,
    pub persist: Option<bool>,
    pub formula_mode: Option<bool>,
    pub cancellable: Option<bool>,
    pub select_number_only: Option<bool>,
    pub select_on_focus: Option<bool>,
    pub step: Option<String>,
    pub arrow_step: Option<bool>,
    pub invalid_paste: Option<InvalidPaste>,
}

macro_rules! merge_fields {
    ($base:expr, $patch:expr, [$($field:ident),* $(,)?]) => {
        FormatOptions {
            $($field: $patch.$field.clone().or_else(|| $base.$field.clone()),)*
        }
    };
}

impl FormatOptions {
    pub fn from_toml_str(src: &str) -> Result<Self, PolicyError> {
        toml::from_str(src).map_err(|err| PolicyError::Parse(err.to_string()))
    }

    /// Overlay `patch` on `self`: fields set in the patch win.
    pub fn merged(&self, patch: &FormatOptions) -> FormatOptions {
        merge_fields!(
            self,
            patch,
            [
                group_separator,
                decimal_character,
                alternate_decimal_character,
                grouping_style,
                currency_symbol,
                currency_placement,
                negative_placement,
                negative_sign,
                positive_sign,
                show_positive_sign,
                suffix_text,
                bracket_pair,
                minimum_value,
                maximum_value,
                decimal_places,
                focus_decimal_places,
                rounding_mode,
                decimal_padding,
                leading_zero,
                empty_value,
                override_limits,
                output_locale,
                unformat_on_submit,
                persist,
                formula_mode,
                cancellable,
                select_number_only,
                select_on_focus,
                step,
                arrow_step,
                invalid_paste,
            ]
        )
    }

    /// `$1,234.56`
    pub fn dollar() -> Self {
        FormatOptions {
            currency_symbol: Some("$".to_string()),
            ..Default::default()
        }
    }

    /// `1.234,56 €`
    pub fn euro() -> Self {
        FormatOptions {
            group_separator: Some(".".to_string()),
            decimal_character: Some(','),
            currency_symbol: Some("\u{202f}€".to_string()),
            currency_placement: Some(CurrencyPlacement::Suffix),
            ..Default::default()
        }
    }

    /// Whole numbers only.
    pub fn integer() -> Self {
        FormatOptions {
            decimal_places: Some(0),
            minimum_value: Some("-9999999999999".to_string()),
            maximum_value: Some("9999999999999".to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_keys_map_to_fields() {
        let options = FormatOptions::from_toml_str(
            r#"
            group_separator = "."
            decimal_character = ","
            grouping_style = "india-2"
            currency_placement = "suffix"
            negative_placement = "right"
            leading_zero = "keep"
            empty_value = "always"
            override_limits = "floor"
            invalid_paste = "truncate"
            decimal_places = 3
            "#,
        )
        .unwrap();

        assert_eq!(options.group_separator.as_deref(), Some("."));
        assert_eq!(options.decimal_character, Some(','));
        assert_eq!(options.grouping_style, Some(GroupingStyle::India2));
        assert_eq!(options.currency_placement, Some(CurrencyPlacement::Suffix));
        assert_eq!(options.negative_placement, Some(NegativePlacement::Right));
        assert_eq!(options.leading_zero, Some(LeadingZero::Keep));
        assert_eq!(options.empty_value, Some(EmptyValue::Always));
        assert_eq!(options.override_limits, Some(OverrideLimits::Floor));
        assert_eq!(options.invalid_paste, Some(InvalidPaste::Truncate));
        assert_eq!(options.decimal_places, Some(3));
        assert_eq!(options.currency_symbol, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = FormatOptions::from_toml_str("currency = \"$\"").unwrap_err();
        assert!(matches!(err, PolicyError::Parse(_)));
    }

    #[test]
    fn merged_prefers_patch_fields() {
        let base = FormatOptions::dollar();
        let patch = FormatOptions {
            decimal_places: Some(0),
            ..Default::default()
        };
        let merged = base.merged(&patch);
        assert_eq!(merged.currency_symbol.as_deref(), Some("$"));
        assert_eq!(merged.decimal_places, Some(0));

        let cleared = merged.merged(&FormatOptions {
            currency_symbol: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(cleared.currency_symbol.as_deref(), Some(""));
        assert_eq!(cleared.decimal_places, Some(0));
    }
}
