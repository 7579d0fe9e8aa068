//! A single token and its structural links.

use serde::Serialize;
use smallvec::SmallVec;

use crate::TokenCode;

/// Enclosing parenthesis groups, `(opener, closer)`, outermost first.
pub type NestedParens = SmallVec<[(usize, usize); 2]>;

/// Enclosing scope conditions, `(condition pointer, condition code)`,
/// outermost first.
pub type Conditions = SmallVec<[(usize, TokenCode); 4]>;

/// One token of the enriched stream.
///
/// Pointers (`*_opener`, `*_closer`, `*_owner`, `*_condition`) are stack
/// pointers into the same [`TokenStore`](crate::TokenStore). A `None` link
/// means the relationship does not exist, which is a normal outcome for
/// incomplete code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Token {
    pub code: TokenCode,
    /// Token text after tab expansion.
    pub content: String,
    /// Original text, present only when tab expansion changed `content`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_content: Option<String>,
    /// 1-based line.
    pub line: u32,
    /// 1-based column, counted after tab expansion.
    pub column: u32,
    /// Length of `content` in characters.
    pub length: u32,
    /// Scope nesting depth; always `conditions.len()`.
    pub level: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parenthesis_opener: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parenthesis_closer: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parenthesis_owner: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bracket_opener: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bracket_closer: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_condition: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_opener: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_closer: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_opener: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_closer: Option<usize>,
    /// Tag sub-tokens of a doc comment; set on its open tag only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comment_tags: Vec<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_opener: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_closer: Option<usize>,

    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub nested_parenthesis: NestedParens,
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub conditions: Conditions,
}

impl Token {
    /// Create an unlinked token. `length` is derived from `content`.
    pub fn new(code: TokenCode, content: impl Into<String>, line: u32, column: u32) -> Self {
        let content = content.into();
        Token {
            code,
            length: char_len(&content),
            content,
            line,
            column,
            ..Token::default()
        }
    }

    /// The `T_*` name of this token's code.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.code.name()
    }

    /// Whitespace or comment.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Text before tab expansion.
    #[inline]
    pub fn original(&self) -> &str {
        self.orig_content.as_deref().unwrap_or(&self.content)
    }

    /// Replace the content, keeping `length` in sync.
    ///
    /// `orig_content` is dropped: the new text is what the file now holds.
    pub fn set_content(&mut self, content: String) {
        self.length = char_len(&content);
        self.content = content;
        self.orig_content = None;
    }

    /// Innermost enclosing parenthesis group.
    pub fn innermost_parens(&self) -> Option<(usize, usize)> {
        self.nested_parenthesis.last().copied()
    }
}

/// Character count of `text`, saturating at `u32::MAX`.
pub fn char_len(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}
