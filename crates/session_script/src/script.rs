use input_core::{HostElement, Key, Modifiers, UnknownKey};
use policy::FormatOptions;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A replayable edit session.
///
/// ```toml
/// initial = "1234.5"
/// steps = ["focus", { key = "End" }, { type = "6" }, "blur"]
///
/// [options]
/// currency_symbol = "$"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub options: FormatOptions,
    #[serde(default)]
    pub host: HostSpec,
    #[serde(default)]
    pub initial: String,
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Expected transcript, one line per step.
    #[serde(default)]
    pub expect: Vec<String>,
}

/// The element a script's field is bound to. Defaults to a plain
/// `<input>`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostSpec {
    pub tag: String,
    #[serde(rename = "type")]
    pub input_type: Option<String>,
    pub content_editable: bool,
}

impl Default for HostSpec {
    fn default() -> Self {
        Self {
            tag: "input".to_string(),
            input_type: None,
            content_editable: false,
        }
    }
}

impl HostSpec {
    pub fn element(&self) -> HostElement {
        HostElement {
            tag: self.tag.clone(),
            input_type: self.input_type.clone(),
            content_editable: self.content_editable,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Focus,
    Blur,
    /// Each character goes through key-down, key-press and key-up.
    Type(String),
    Key(KeyStroke),
    Paste(String),
    /// Select from anchor to caret, as byte offsets.
    Select([usize; 2]),
    Caret(usize),
    Set(String),
    Submit,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Focus => f.write_str("focus"),
            Step::Blur => f.write_str("blur"),
            Step::Type(text) => write!(f, "type \"{}\"", crate::escape_text(text)),
            Step::Key(stroke) => write!(f, "key {stroke}"),
            Step::Paste(text) => write!(f, "paste \"{}\"", crate::escape_text(text)),
            Step::Select([anchor, caret]) => write!(f, "select {anchor}..{caret}"),
            Step::Caret(at) => write!(f, "caret {at}"),
            Step::Set(value) => write!(f, "set \"{}\"", crate::escape_text(value)),
            Step::Submit => f.write_str("submit"),
        }
    }
}

/// A key with modifiers, written `ctrl+a`, `shift+ArrowLeft` or `Backspace`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct KeyStroke {
    pub key: Key,
    pub modifiers: Modifiers,
    name: String,
}

impl FromStr for KeyStroke {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut modifiers = Modifiers::NONE;
        let mut rest = s;
        // A lone "+" is the plus key, and "ctrl++" is ctrl with plus.
        while let Some((prefix, tail)) = rest.split_once('+')
            && !tail.is_empty()
        {
            match prefix.to_ascii_lowercase().as_str() {
                "shift" => modifiers.shift = true,
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" | "option" => modifiers.alt = true,
                "meta" | "cmd" => modifiers.meta = true,
                _ => return Err(UnknownKey(s.to_string())),
            }
            rest = tail;
        }
        Ok(KeyStroke {
            key: rest.parse()?,
            modifiers,
            name: s.to_string(),
        })
    }
}

impl TryFrom<String> for KeyStroke {
    type Error = UnknownKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for KeyStroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug)]
pub enum ScriptError {
    Io(std::io::Error),
    Parse(String),
    Session(input_core::SessionError),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io(err) => write!(f, "failed to read script: {err}"),
            ScriptError::Parse(msg) => write!(f, "invalid script: {msg}"),
            ScriptError::Session(err) => write!(f, "failed to start session: {err}"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Io(err) => Some(err),
            ScriptError::Parse(_) => None,
            ScriptError::Session(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ScriptError {
    fn from(err: std::io::Error) -> Self {
        ScriptError::Io(err)
    }
}

impl From<input_core::SessionError> for ScriptError {
    fn from(err: input_core::SessionError) -> Self {
        ScriptError::Session(err)
    }
}

impl Script {
    pub fn from_toml_str(src: &str) -> Result<Self, ScriptError> {
        toml::from_str(src).map_err(|err| ScriptError::Parse(err.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_script() {
        let script = Script::from_toml_str(
            r#"
name = "demo"
initial = "5"
steps = [
    "focus",
    { type = "12" },
    { key = "ctrl+a" },
    { select = [1, 3] },
    { paste = "7" },
    "blur",
]

[options]
currency_symbol = "$"
"#,
        )
        .unwrap();
        assert_eq!(script.name.as_deref(), Some("demo"));
        assert_eq!(script.options.currency_symbol.as_deref(), Some("$"));
        assert_eq!(script.host.tag, "input");
        assert_eq!(script.steps.len(), 6);
        assert_eq!(script.steps[1], Step::Type("12".to_string()));
        assert_eq!(script.steps[3], Step::Select([1, 3]));
        let Step::Key(stroke) = &script.steps[2] else {
            panic!("expected a key step, got {:?}", script.steps[2]);
        };
        assert_eq!(stroke.key, Key::Char('a'));
        assert_eq!(stroke.modifiers, Modifiers::CTRL);
    }

    #[test]
    fn key_strokes() {
        let stroke: KeyStroke = "shift+ArrowLeft".parse().unwrap();
        assert_eq!(stroke.key, Key::ArrowLeft);
        assert_eq!(stroke.modifiers, Modifiers::SHIFT);
        assert_eq!(stroke.to_string(), "shift+ArrowLeft");

        let plus: KeyStroke = "+".parse().unwrap();
        assert_eq!(plus.key, Key::Char('+'));
        assert_eq!(plus.modifiers, Modifiers::NONE);

        let ctrl_plus: KeyStroke = "ctrl++".parse().unwrap();
        assert_eq!(ctrl_plus.key, Key::Char('+'));
        assert!(ctrl_plus.modifiers.ctrl);

        assert!("hyper+a".parse::<KeyStroke>().is_err());
        assert!("Launch".parse::<KeyStroke>().is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Script::from_toml_str("stepz = []").unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn step_labels() {
        assert_eq!(Step::Type("1\"".to_string()).to_string(), "type \"1\\\"\"");
        assert_eq!(Step::Select([0, 4]).to_string(), "select 0..4");
    }
}
