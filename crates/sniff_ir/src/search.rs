//! Token lookup helpers used by rules.
//!
//! Every search walks the flat array by stack pointer. Structural links
//! (bracket, parenthesis and scope pointers) let statement-level searches
//! hop over nested groups instead of descending into them.

use crate::{Token, TokenCode, TokenStore};

/// What a [`TokenStore::find_next`] or [`TokenStore::find_previous`] call
/// is looking for.
#[derive(Clone, Copy, Debug)]
pub struct Search<'a> {
    codes: &'a [TokenCode],
    exclude: bool,
    content: Option<&'a str>,
    local: bool,
}

impl<'a> Search<'a> {
    /// Match tokens whose code is one of `codes`.
    pub fn of(codes: &'a [TokenCode]) -> Self {
        Search {
            codes,
            exclude: false,
            content: None,
            local: false,
        }
    }

    /// Match tokens whose code is none of `codes`.
    pub fn not(codes: &'a [TokenCode]) -> Self {
        Search {
            exclude: true,
            ..Search::of(codes)
        }
    }

    /// Additionally require exact content.
    #[must_use]
    pub fn with_content(mut self, content: &'a str) -> Self {
        self.content = Some(content);
        self
    }

    /// Stop at the end of the current statement.
    #[must_use]
    pub fn local(mut self) -> Self {
        self.local = true;
        self
    }

    pub fn matches(&self, token: &Token) -> bool {
        if self.codes.contains(&token.code) == self.exclude {
            return false;
        }
        match self.content {
            Some(content) => token.content == content,
            None => true,
        }
    }
}

// ─── Statement boundaries ───────────────────────────────────────────

/// Tokens that end the statement being walked backwards.
const START_BOUNDARIES: &[TokenCode] = &[
    TokenCode::OpenCurlyBracket,
    TokenCode::OpenSquareBracket,
    TokenCode::OpenShortArray,
    TokenCode::OpenParenthesis,
    TokenCode::Attribute,
    TokenCode::Colon,
    TokenCode::Comma,
    TokenCode::DoubleArrow,
    TokenCode::Semicolon,
    TokenCode::OpenTag,
    TokenCode::OpenTagWithEcho,
    TokenCode::CloseTag,
];

/// Tokens that end the statement being walked forwards.
const END_BOUNDARIES: &[TokenCode] = &[
    TokenCode::CloseCurlyBracket,
    TokenCode::CloseSquareBracket,
    TokenCode::CloseShortArray,
    TokenCode::CloseParenthesis,
    TokenCode::Colon,
    TokenCode::Comma,
    TokenCode::DoubleArrow,
    TokenCode::Semicolon,
    TokenCode::OpenTag,
    TokenCode::CloseTag,
];

/// Scope owners that appear inside expressions; their bodies are part of
/// the surrounding statement.
const EXPRESSION_SCOPES: &[TokenCode] = &[
    TokenCode::Closure,
    TokenCode::AnonClass,
    TokenCode::Fn,
    TokenCode::Match,
];

impl TokenStore {
    /// First token at or after `start` matching `search`, before `end`
    /// (exclusive, defaults to the end of the store).
    pub fn find_next(&self, search: Search<'_>, start: usize, end: Option<usize>) -> Option<usize> {
        let tokens = self.tokens();
        let end = end.map_or(tokens.len(), |e| e.min(tokens.len()));
        for ptr in start..end {
            let token = &tokens[ptr];
            if search.matches(token) {
                return Some(ptr);
            }
            if search.local && token.code == TokenCode::Semicolon {
                break;
            }
        }
        None
    }

    /// Last token at or before `start` matching `search`, not before `end`
    /// (inclusive, defaults to the first token).
    ///
    /// A local search hops from a closer to its opener so that it stays on
    /// the current statement's nesting level.
    pub fn find_previous(
        &self,
        search: Search<'_>,
        start: usize,
        end: Option<usize>,
    ) -> Option<usize> {
        let tokens = self.tokens();
        if tokens.is_empty() {
            return None;
        }
        let end = end.unwrap_or(0);
        let mut ptr = start.min(tokens.len() - 1);
        loop {
            if ptr < end {
                return None;
            }
            let token = &tokens[ptr];
            if search.matches(token) {
                return Some(ptr);
            }
            if search.local {
                if let Some(opener) = opener_of_closer(token, ptr) {
                    ptr = opener;
                } else if token.code == TokenCode::Semicolon {
                    return None;
                }
            }
            ptr = ptr.checked_sub(1)?;
        }
    }

    /// Next token that is not whitespace or a comment.
    pub fn next_non_empty(&self, start: usize) -> Option<usize> {
        self.find_next(Search::not(TokenCode::EMPTY), start, None)
    }

    /// Previous token that is not whitespace or a comment.
    pub fn previous_non_empty(&self, start: usize) -> Option<usize> {
        self.find_previous(Search::not(TokenCode::EMPTY), start, None)
    }

    /// Earliest token on `start`'s line, at or before `start`, matching
    /// `search`.
    pub fn find_first_on_line(&self, search: Search<'_>, start: usize) -> Option<usize> {
        let tokens = self.tokens();
        let line = tokens.get(start)?.line;
        let mut found = None;
        for ptr in (0..=start).rev() {
            let token = &tokens[ptr];
            if token.line < line {
                break;
            }
            if search.matches(token) {
                found = Some(ptr);
            }
        }
        found
    }

    /// First non-empty token of the statement containing `start`.
    ///
    /// Codes in `ignore` are not treated as statement boundaries. Nested
    /// groups are skipped whole; a closed non-expression scope ends the
    /// previous statement.
    pub fn find_start_of_statement(&self, start: usize, ignore: &[TokenCode]) -> usize {
        let tokens = self.tokens();
        let Some(first) = tokens.get(start) else {
            return start;
        };
        let mut last_not_empty = start;
        let mut ptr = start;
        let mut token = first;
        loop {
            if START_BOUNDARIES.contains(&token.code) && !ignore.contains(&token.code) {
                // The start token is its own statement when it is a boundary.
                return last_not_empty;
            }

            if ptr != start && token.scope_closer == Some(ptr) {
                match token.scope_condition {
                    Some(owner) if EXPRESSION_SCOPES.contains(&tokens[owner].code) => {
                        ptr = owner;
                    }
                    _ => return last_not_empty,
                }
            } else if let Some(opener) = opener_of_closer(token, ptr) {
                ptr = opener;
            }

            if !tokens[ptr].is_empty() {
                last_not_empty = ptr;
            }
            let Some(prev) = ptr.checked_sub(1) else {
                return last_not_empty;
            };
            ptr = prev;
            token = &tokens[ptr];
        }
    }

    /// Last token of the statement containing `start`.
    ///
    /// Returns the terminating `;`/`,`/`:`/`=>` itself, or the last
    /// non-empty token when the statement ends at a closing bracket or tag.
    /// Starting on a scope owner returns its scope closer.
    pub fn find_end_of_statement(&self, start: usize, ignore: &[TokenCode]) -> usize {
        let tokens = self.tokens();
        let mut last_not_empty = start;
        let mut ptr = start;
        while let Some(token) = tokens.get(ptr) {
            if END_BOUNDARIES.contains(&token.code) && !ignore.contains(&token.code) {
                return match token.code {
                    TokenCode::Semicolon
                    | TokenCode::Colon
                    | TokenCode::Comma
                    | TokenCode::DoubleArrow => ptr,
                    _ => last_not_empty,
                };
            }

            let is_scope_head =
                token.scope_condition == Some(ptr) || token.scope_opener == Some(ptr);
            if let (true, Some(closer)) = (is_scope_head, token.scope_closer) {
                if ptr == start && token.scope_condition == Some(ptr) {
                    return closer;
                }
                ptr = closer;
            } else if let (Some(closer), true) =
                (token.bracket_closer, token.bracket_opener == Some(ptr))
            {
                ptr = closer;
            } else if let (Some(closer), true) =
                (token.parenthesis_closer, token.parenthesis_opener == Some(ptr))
            {
                ptr = closer;
            }

            if !tokens[ptr].is_empty() {
                last_not_empty = ptr;
            }
            ptr += 1;
        }
        tokens.len().saturating_sub(1)
    }
}

/// Matching opener when `token` (at `ptr`) closes a bracket, parenthesis or
/// scope.
fn opener_of_closer(token: &Token, ptr: usize) -> Option<usize> {
    if token.scope_closer == Some(ptr) {
        if let Some(opener) = token.scope_opener {
            return Some(opener);
        }
    }
    if token.bracket_closer == Some(ptr) {
        if let Some(opener) = token.bracket_opener {
            return Some(opener);
        }
    }
    if token.parenthesis_closer == Some(ptr) {
        return token.parenthesis_opener;
    }
    None
}

#[cfg(test)]
mod tests;
