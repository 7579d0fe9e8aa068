//! Scope map: owner keyword → opener → closer.
//!
//! Owners are resolved last-to-first, so by the time an owner's opener or
//! closer search meets a nested owner, that nested owner's scope is final
//! and the search can step over it whole.
//!
//! Four kinds of scope:
//!
//! - **Brace**: `if (...) { ... }`; the closer is the opener's bracket pair.
//! - **Keyword**: `if (...): ... endif;`; the closer is the first end code
//!   at the opener's own depth. Chained owners (`elseif`, `else`) close the
//!   scope before them and open their own.
//! - **Shared**: `case`/`default`; the closer is the first `break`-like
//!   statement, the next label when statements precede it, or the enclosing
//!   `}`. Stacked labels share a closer.
//! - **Expression**: `fn (...) => expr`; the closer is the token ending the
//!   expression.
//!
//! A scope with no opener or no closer is not a scope: no field is set.

use sniff_ir::{Dialect, ScopeOwner, Token, TokenCode};

use super::{is_closer, previous_non_empty, skip_group};

pub(super) fn map(tokens: &mut [Token], dialect: &Dialect) {
    for owner in (0..tokens.len()).rev() {
        let Some(rule) = owner_at(tokens, dialect, owner) else {
            continue;
        };
        match resolve(tokens, dialect, owner, rule) {
            Some((opener, closer)) => {
                tracing::trace!(owner, opener, closer, code = tokens[owner].code.name(), "scope");
                assign(tokens, owner, opener, closer);
            }
            None => tracing::trace!(owner, code = tokens[owner].code.name(), "no scope"),
        }
    }
}

/// The dialect entry for a scope owner at `i`. A closure's `use (...)` is
/// never one.
fn owner_at<'d>(tokens: &[Token], dialect: &'d Dialect, i: usize) -> Option<&'d ScopeOwner> {
    let code = tokens[i].code;
    let rule = dialect.scope_owner(code)?;
    let closure_use = code == TokenCode::Use
        && previous_non_empty(tokens, i)
            .is_some_and(|prev| tokens[prev].code == TokenCode::CloseParenthesis);
    (!closure_use).then_some(rule)
}

fn resolve(
    tokens: &[Token],
    dialect: &Dialect,
    owner: usize,
    rule: &ScopeOwner,
) -> Option<(usize, usize)> {
    let opener = find_opener(tokens, dialect, owner, rule)?;
    let closer = if tokens[opener].code == TokenCode::OpenCurlyBracket {
        tokens[opener].bracket_closer?
    } else if rule.expression {
        expression_closer(tokens, dialect, opener, rule)?
    } else if rule.shared {
        shared_closer(tokens, dialect, opener, rule)?
    } else {
        keyword_closer(tokens, dialect, opener, rule)?
    };
    Some((opener, closer))
}

/// Set the scope triple on owner, opener and closer. A closer that owns a
/// scope of its own (`elseif` closing `if:`) keeps its own triple.
fn assign(tokens: &mut [Token], owner: usize, opener: usize, closer: usize) {
    let closer_owns_scope = closer != owner && tokens[closer].scope_condition == Some(closer);
    for ptr in [owner, opener, closer] {
        if ptr == closer && closer_owns_scope {
            continue;
        }
        let token = &mut tokens[ptr];
        token.scope_condition = Some(owner);
        token.scope_opener = Some(opener);
        token.scope_closer = Some(closer);
    }
}

// ─── Openers ───────────────────────────────────────────────────

/// Scan forward from the owner for one of its start codes.
///
/// The head between owner and opener may hold names, types and
/// parenthesized clauses. The search gives up at a statement end, at a brace
/// or closer that is not ours, and at a nested owner that has a scope of its
/// own (`else if (...) {`). Strict owners also give up at any nested owner.
fn find_opener(
    tokens: &[Token],
    dialect: &Dialect,
    owner: usize,
    rule: &ScopeOwner,
) -> Option<usize> {
    let mut i = owner + 1;
    while i < tokens.len() {
        let token = &tokens[i];
        if token.is_empty() {
            i += 1;
            continue;
        }
        let code = token.code;
        if rule.start.contains(&code) {
            return Some(i);
        }
        match code {
            TokenCode::Semicolon | TokenCode::CloseTag | TokenCode::OpenCurlyBracket => return None,
            code if is_closer(code) => return None,
            _ => {}
        }
        if owner_at(tokens, dialect, i).is_some() {
            let has_scope = token.scope_condition == Some(i);
            if rule.strict || has_scope {
                return None;
            }
        }
        i = skip_group(tokens, i)?;
    }
    None
}

// ─── Closers ───────────────────────────────────────────────────

/// Where a closer search continues after a nested owner at `i`, if `i`
/// owns a resolved, non-shared scope.
///
/// Chains are followed: `if: ... elseif: ... else: ... endif` and
/// `if {} elseif {} else {}` are stepped over as one unit. An expression
/// scope lands on its closer, which may also end the enclosing expression.
fn jump_scope(tokens: &[Token], dialect: &Dialect, i: usize) -> Option<usize> {
    let rule = owner_at(tokens, dialect, i)?;
    if tokens[i].scope_condition != Some(i) || rule.shared {
        return None;
    }
    let mut owner = i;
    let mut closer = tokens[i].scope_closer?;
    loop {
        // Keyword chain: the closer is the next link's owner.
        if closer != owner && tokens[closer].scope_condition == Some(closer) {
            owner = closer;
            closer = tokens[closer].scope_closer?;
            continue;
        }
        // Brace chain: `} else {`.
        let with = dialect
            .scope_owner(tokens[owner].code)
            .map_or(&[][..], |s| s.with.as_slice());
        let next = (closer + 1..tokens.len()).find(|&j| !tokens[j].is_empty());
        match next {
            Some(next) if with.contains(&tokens[next].code) && tokens[next].scope_condition == Some(next) => {
                owner = next;
                closer = tokens[next].scope_closer?;
            }
            _ => break,
        }
    }
    if rule.expression {
        Some(closer)
    } else {
        Some(closer + 1)
    }
}

/// `if (...): ... endif;` and chained `elseif:` / `else:`.
fn keyword_closer(
    tokens: &[Token],
    dialect: &Dialect,
    opener: usize,
    rule: &ScopeOwner,
) -> Option<usize> {
    let mut i = opener + 1;
    while i < tokens.len() {
        let code = tokens[i].code;
        if code != TokenCode::CloseCurlyBracket && rule.end.contains(&code) {
            return Some(i);
        }
        if is_closer(code) {
            return None;
        }
        if let Some(next) = jump_scope(tokens, dialect, i) {
            i = next;
            continue;
        }
        i = skip_group(tokens, i)?;
    }
    None
}

/// `case`/`default` bodies.
fn shared_closer(
    tokens: &[Token],
    dialect: &Dialect,
    opener: usize,
    rule: &ScopeOwner,
) -> Option<usize> {
    let mut has_statements = false;
    let mut i = opener + 1;
    while i < tokens.len() {
        let token = &tokens[i];
        let code = token.code;
        if token.is_empty() || code == TokenCode::CloseTag || code == TokenCode::OpenTag {
            i += 1;
            continue;
        }
        if rule.with.contains(&code) {
            if has_statements {
                return Some(i);
            }
            // Stacked label: step past it to its own opener.
            i = token.scope_opener.filter(|&o| o > i).map_or(i + 1, |o| o + 1);
            continue;
        }
        if rule.end.contains(&code) {
            return Some(i);
        }
        match code {
            TokenCode::CloseCurlyBracket | TokenCode::Endswitch => return Some(i),
            code if is_closer(code) => return None,
            _ => {}
        }
        has_statements = true;
        if let Some(next) = jump_scope(tokens, dialect, i) {
            i = next;
            continue;
        }
        i = skip_group(tokens, i)?;
    }
    None
}

/// `fn (...) => expr`: the first end code at the arrow's depth.
fn expression_closer(
    tokens: &[Token],
    dialect: &Dialect,
    opener: usize,
    rule: &ScopeOwner,
) -> Option<usize> {
    let mut i = opener + 1;
    while i < tokens.len() {
        let code = tokens[i].code;
        if tokens[i].is_empty() {
            i += 1;
            continue;
        }
        if rule.end.contains(&code) {
            return Some(i);
        }
        if is_closer(code) {
            return None;
        }
        if let Some(next) = jump_scope(tokens, dialect, i) {
            i = next;
            continue;
        }
        i = skip_group(tokens, i)?;
    }
    None
}

#[cfg(test)]
mod tests;
