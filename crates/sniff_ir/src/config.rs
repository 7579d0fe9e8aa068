//! Per-run tokenizer settings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Source encoding of raw bytes handed to `tokenize_bytes`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Encoding {
    #[default]
    #[serde(rename = "utf-8", alias = "utf8", alias = "UTF-8")]
    Utf8,
    #[serde(rename = "iso-8859-1", alias = "latin1", alias = "ISO-8859-1")]
    Latin1,
}

impl Encoding {
    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "iso-8859-1",
        }
    }

    /// Resolve a user-supplied encoding name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(Encoding::Utf8),
            "iso-8859-1" | "latin1" | "latin-1" => Some(Encoding::Latin1),
            _ => None,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings for one tokenization run.
///
/// Every field has a default, so a JSON config only needs the keys it
/// overrides.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenizerConfig {
    /// Line ending to normalize to. `None` keeps the file's own endings
    /// and reports the first one found (or `\n`).
    pub eol: Option<String>,
    /// Columns per tab stop; `0` disables tab expansion.
    pub tab_width: u32,
    pub encoding: Encoding,
    /// Reject undecodable bytes instead of replacing them.
    pub strict_encoding: bool,
    /// Recognize `<?` as an open tag.
    pub short_open_tag: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            eol: None,
            tab_width: 4,
            encoding: Encoding::Utf8,
            strict_encoding: false,
            short_open_tag: true,
        }
    }
}

impl TokenizerConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn with_eol(mut self, eol: impl Into<String>) -> Self {
        self.eol = Some(eol.into());
        self
    }

    #[must_use]
    pub fn with_tab_width(mut self, tab_width: u32) -> Self {
        self.tab_width = tab_width;
        self
    }
}

#[cfg(test)]
mod tests;
