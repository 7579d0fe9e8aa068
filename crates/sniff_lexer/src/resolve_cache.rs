//! Memoized identifier classification.
//!
//! Identifiers repeat heavily within and across files (`function`, `$this`
//! neighbours, class names). The cache remembers the cooked code for each
//! spelling so each distinct word is classified once.
//!
//! The cache is an explicit value owned by a [`Lexer`](crate::Lexer). A
//! caller tokenizing many files can hand the same cache from lexer to lexer
//! (see [`Lexer::into_cache`](crate::Lexer::into_cache)) or clear it between
//! runs; nothing is shared implicitly.

use rustc_hash::FxHashMap;
use sniff_ir::TokenCode;

use crate::keywords;

/// Identifier spelling → cooked code.
#[derive(Clone, Debug, Default)]
pub struct ResolveCache {
    codes: FxHashMap<Box<str>, TokenCode>,
    hits: u64,
    misses: u64,
}

impl ResolveCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Code for an identifier: its keyword code, or `T_STRING`.
    pub fn resolve(&mut self, text: &str) -> TokenCode {
        if let Some(&code) = self.codes.get(text) {
            self.hits += 1;
            return code;
        }
        self.misses += 1;
        let code = keywords::lookup(text).unwrap_or(TokenCode::String);
        self.codes.insert(text.into(), code);
        code
    }

    /// Number of distinct spellings cached.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(hits, misses)` since creation or the last [`clear`](Self::clear).
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    pub fn clear(&mut self) {
        self.codes.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
