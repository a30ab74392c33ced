//! Options controlling the encoder's output formatting.

/// Options controlling JSON output formatting.
///
/// The defaults produce exactly what a plain [`serde_json`] encoder
/// produces, so for natively representable values the fallback hook is the
/// only observable difference from baseline behaviour.
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    /// Indentation written once per nesting level. `None` (default)
    /// produces compact single-line output.
    pub indent: Option<String>,
    /// When `true`, object keys are written in lexicographic order instead
    /// of insertion order.
    pub sort_keys: bool,
    /// When `true`, every non-ASCII character is escaped as `\uXXXX`
    /// (astral-plane characters as surrogate pairs). When `false`
    /// (default), strings are written as UTF-8.
    pub ensure_ascii: bool,
    /// Separator written between array items and object members. `None`
    /// derives the conventional `","`.
    pub item_separator: Option<String>,
    /// Separator written between an object key and its value. `None`
    /// derives the conventional separator: `":"` compact, `": "` indented.
    pub key_separator: Option<String>,
}

impl EncodeOptions {
    /// Compact output, insertion-order keys, UTF-8 strings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Two-space indentation, otherwise defaults.
    pub fn pretty() -> Self {
        Self {
            indent: Some("  ".to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn item_sep(&self) -> &str {
        self.item_separator.as_deref().unwrap_or(",")
    }

    pub(crate) fn key_sep(&self) -> &str {
        match &self.key_separator {
            Some(sep) => sep,
            None if self.indent.is_some() => ": ",
            None => ":",
        }
    }
}
