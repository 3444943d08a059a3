//! Elements a numeric field can be bound to.

/// The facts about a host element needed to decide whether it can carry a
/// numeric field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostElement {
    pub tag: String,
    /// The `type` attribute, for `<input>` elements.
    pub input_type: Option<String>,
    pub content_editable: bool,
}

impl HostElement {
    pub fn input(input_type: Option<&str>) -> Self {
        Self {
            tag: "input".to_string(),
            input_type: input_type.map(str::to_string),
            content_editable: false,
        }
    }

    pub fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            input_type: None,
            content_editable: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// A text-like `<input>`.
    Input,
    /// `<input type=hidden>`: holds a value, never edited.
    Hidden,
    /// Any element with `contenteditable`.
    ContentEditable,
    /// A read-only element whose text content shows the value.
    Static,
}

impl HostKind {
    pub fn is_editable(self) -> bool {
        matches!(self, HostKind::Input | HostKind::ContentEditable)
    }
}

const STATIC_TAGS: &[&str] = &[
    "b", "caption", "cite", "code", "const", "dd", "del", "div", "dfn", "dt", "em", "h1", "h2",
    "h3", "h4", "h5", "h6", "ins", "kdb", "label", "li", "option", "output", "p", "q", "s",
    "sample", "span", "strong", "td", "th", "u",
];

/// Classify a host element, or `None` when it cannot carry a numeric field.
pub fn host_kind(host: &HostElement) -> Option<HostKind> {
    let tag = host.tag.trim();
    if tag.eq_ignore_ascii_case("input") {
        let ty = host
            .input_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        return match ty {
            None => Some(HostKind::Input),
            Some(t) if t.eq_ignore_ascii_case("text") || t.eq_ignore_ascii_case("tel") => {
                Some(HostKind::Input)
            }
            Some(t) if t.eq_ignore_ascii_case("hidden") => Some(HostKind::Hidden),
            Some(_) => None,
        };
    }
    if host.content_editable {
        return Some(HostKind::ContentEditable);
    }
    STATIC_TAGS
        .iter()
        .any(|t| t.eq_ignore_ascii_case(tag))
        .then_some(HostKind::Static)
}
