//! The enriched token array.
//!
//! A [`TokenStore`] is built once per tokenization pass and never changes
//! shape afterwards: no token is inserted or removed, so every stack pointer
//! stays valid for the lifetime of the store. Content can change through the
//! changeset protocol (see [`crate::changeset`]); structure only changes by
//! tokenizing again.

use std::ops::Index;

use rustc_hash::FxHashMap;

use crate::{Token, TokenCode};

/// Indexed, structurally immutable token array.
#[derive(Clone, Debug, Default)]
pub struct TokenStore {
    tokens: Vec<Token>,
    /// Line ending the file was tokenized with.
    eol: String,
    /// Open changeset, if any.
    pub(crate) changeset: Option<PendingChangeset>,
}

/// Edits recorded since `begin_changeset`.
#[derive(Clone, Debug, Default)]
pub(crate) struct PendingChangeset {
    pub(crate) name: String,
    pub(crate) edits: FxHashMap<usize, String>,
}

impl TokenStore {
    /// Wrap a finished token vector.
    pub fn new(tokens: Vec<Token>, eol: impl Into<String>) -> Self {
        TokenStore {
            tokens,
            eol: eol.into(),
            changeset: None,
        }
    }

    /// All tokens, indexable by stack pointer.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn num_tokens(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, ptr: usize) -> Option<&Token> {
        self.tokens.get(ptr)
    }

    /// Line ending the file was tokenized with.
    #[inline]
    pub fn eol(&self) -> &str {
        &self.eol
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    /// Reconstruct the file text from token content.
    pub fn contents(&self) -> String {
        self.tokens.iter().map(|t| t.content.as_str()).collect()
    }

    /// Reconstruct the file text as it was before tab expansion.
    pub fn original_contents(&self) -> String {
        self.tokens.iter().map(Token::original).collect()
    }

    /// Concatenate the content of `length` tokens starting at `start`.
    ///
    /// With `original`, tab-expanded tokens contribute their original text.
    /// Ranges running past the end are clipped.
    pub fn tokens_as_string(&self, start: usize, length: usize, original: bool) -> String {
        let end = start.saturating_add(length).min(self.tokens.len());
        let start = start.min(end);
        self.tokens[start..end]
            .iter()
            .map(|t| if original { t.original() } else { &t.content })
            .collect()
    }

    /// Returns `true` if the token at `ptr` sits inside a scope whose
    /// condition has one of `codes`.
    pub fn has_condition(&self, ptr: usize, codes: &[TokenCode]) -> bool {
        self.get(ptr)
            .is_some_and(|t| t.conditions.iter().any(|(_, code)| codes.contains(code)))
    }

    /// Pointer of the enclosing condition with `code`.
    ///
    /// `first` picks the outermost match, otherwise the innermost.
    pub fn get_condition(&self, ptr: usize, code: TokenCode, first: bool) -> Option<usize> {
        let conditions = &self.get(ptr)?.conditions;
        let mut matching = conditions.iter().filter(|(_, c)| *c == code);
        let found = if first {
            matching.next()
        } else {
            matching.next_back()
        };
        found.map(|&(cond, _)| cond)
    }

    /// Condition pointer of the innermost scope enclosing `ptr`.
    ///
    /// Unlike `scope_condition`, this never reports the token's own scope
    /// when `ptr` is an owner, opener or closer.
    pub fn enclosing_scope(&self, ptr: usize) -> Option<usize> {
        self.get(ptr)?.conditions.last().map(|&(cond, _)| cond)
    }
}

impl Index<usize> for TokenStore {
    type Output = Token;

    #[inline]
    fn index(&self, ptr: usize) -> &Token {
        &self.tokens[ptr]
    }
}

impl<'a> IntoIterator for &'a TokenStore {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
