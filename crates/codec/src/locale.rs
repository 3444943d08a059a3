use decimal::Decimal;
use policy::OutputLocale;

/// A raw value as handed to callers that asked for a specific locale.
#[derive(Clone, Debug, PartialEq)]
pub enum Localized {
    Text(String),
    Number(f64),
    /// The field holds no number.
    Empty,
}

/// Render a raw value for `locale`. The value is canonicalized first, so
/// `-0.50` comes out as `-0.5` (or `-0,5`, or `0.5-`).
pub fn localize(raw: &str, locale: OutputLocale) -> Localized {
    let Ok(value) = Decimal::parse(raw) else {
        return Localized::Empty;
    };
    if locale == OutputLocale::Number {
        return Localized::Number(value.to_f64());
    }

    let canonical = value.to_string();
    let (negative, body) = match canonical.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, canonical.as_str()),
    };
    let comma = matches!(
        locale,
        OutputLocale::Comma | OutputLocale::NegativeComma | OutputLocale::CommaNegative
    );
    let body = if comma {
        body.replace('.', ",")
    } else {
        body.to_string()
    };
    let trailing = matches!(locale, OutputLocale::DotNegative | OutputLocale::CommaNegative);

    Localized::Text(match (negative, trailing) {
        (false, _) => body,
        (true, false) => format!("-{body}"),
        (true, true) => format!("{body}-"),
    })
}
