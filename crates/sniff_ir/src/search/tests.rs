use pretty_assertions::assert_eq;

use crate::{Search, Token, TokenCode, TokenStore};

use crate::TokenCode as C;

/// Build tokens with positions derived from their content.
fn tokens(parts: &[(TokenCode, &str)]) -> Vec<Token> {
    let (mut line, mut column) = (1, 1);
    parts
        .iter()
        .map(|&(code, text)| {
            let token = Token::new(code, text, line, column);
            if text.ends_with('\n') {
                line += 1;
                column = 1;
            } else {
                column += token.length;
            }
            token
        })
        .collect()
}

fn parens(tokens: &mut [Token], open: usize, close: usize, owner: Option<usize>) {
    let ptrs = [Some(open), owner, Some(close)];
    for ptr in ptrs.into_iter().flatten() {
        tokens[ptr].parenthesis_opener = Some(open);
        tokens[ptr].parenthesis_closer = Some(close);
        tokens[ptr].parenthesis_owner = owner;
    }
}

fn scope(tokens: &mut [Token], owner: usize, open: usize, close: usize) {
    for ptr in [owner, open, close] {
        tokens[ptr].scope_condition = Some(owner);
        tokens[ptr].scope_opener = Some(open);
        tokens[ptr].scope_closer = Some(close);
    }
    let code = tokens[owner].code;
    for token in &mut tokens[open + 1..close] {
        token.conditions.push((owner, code));
        token.level = 1;
    }
}

/// ```php
/// <?php $a = foo($b, [1, 2]); if ($c) { bar(); }
/// $d = function () { return 1; };
/// ```
fn store() -> TokenStore {
    let mut tokens = tokens(&[
        (C::OpenTag, "<?php "),
        (C::Variable, "$a"),
        (C::Whitespace, " "),
        (C::Equal, "="),
        (C::Whitespace, " "),
        (C::String, "foo"), // 5
        (C::OpenParenthesis, "("),
        (C::Variable, "$b"),
        (C::Comma, ","),
        (C::Whitespace, " "),
        (C::OpenShortArray, "["), // 10
        (C::LNumber, "1"),
        (C::Comma, ","),
        (C::Whitespace, " "),
        (C::LNumber, "2"),
        (C::CloseShortArray, "]"), // 15
        (C::CloseParenthesis, ")"),
        (C::Semicolon, ";"),
        (C::Whitespace, " "),
        (C::If, "if"),
        (C::Whitespace, " "), // 20
        (C::OpenParenthesis, "("),
        (C::Variable, "$c"),
        (C::CloseParenthesis, ")"),
        (C::Whitespace, " "),
        (C::OpenCurlyBracket, "{"), // 25
        (C::Whitespace, " "),
        (C::String, "bar"),
        (C::OpenParenthesis, "("),
        (C::CloseParenthesis, ")"),
        (C::Semicolon, ";"), // 30
        (C::Whitespace, " "),
        (C::CloseCurlyBracket, "}"),
        (C::Whitespace, "\n"),
        (C::Variable, "$d"),
        (C::Whitespace, " "), // 35
        (C::Equal, "="),
        (C::Whitespace, " "),
        (C::Closure, "function"),
        (C::Whitespace, " "),
        (C::OpenParenthesis, "("), // 40
        (C::CloseParenthesis, ")"),
        (C::Whitespace, " "),
        (C::OpenCurlyBracket, "{"),
        (C::Whitespace, " "),
        (C::Return, "return"), // 45
        (C::Whitespace, " "),
        (C::LNumber, "1"),
        (C::Semicolon, ";"),
        (C::Whitespace, " "),
        (C::CloseCurlyBracket, "}"), // 50
        (C::Semicolon, ";"),
    ]);
    parens(&mut tokens, 6, 16, None);
    for ptr in [10, 15] {
        tokens[ptr].bracket_opener = Some(10);
        tokens[ptr].bracket_closer = Some(15);
    }
    parens(&mut tokens, 21, 23, Some(19));
    parens(&mut tokens, 28, 29, None);
    parens(&mut tokens, 40, 41, Some(38));
    scope(&mut tokens, 19, 25, 32);
    scope(&mut tokens, 38, 43, 50);
    TokenStore::new(tokens, "\n")
}

// ─── Search ─────────────────────────────────────────────────────────

#[test]
fn search_matching() {
    let store = store();
    assert!(Search::of(&[C::Variable]).matches(&store[1]));
    assert!(!Search::of(&[C::Variable]).with_content("$b").matches(&store[1]));
    assert!(Search::not(&[C::Variable]).matches(&store[2]));
    assert!(!Search::not(&[C::Variable]).matches(&store[1]));
    assert!(Search::not(TokenCode::EMPTY).with_content("=").matches(&store[3]));
}

// ─── find_next / find_previous ──────────────────────────────────────

#[test]
fn find_next_by_code_and_content() {
    let store = store();
    assert_eq!(store.find_next(Search::of(&[C::Semicolon]), 0, None), Some(17));
    assert_eq!(store.find_next(Search::of(&[C::Semicolon]), 18, None), Some(30));
    assert_eq!(
        store.find_next(Search::of(&[C::Variable]).with_content("$c"), 0, None),
        Some(22)
    );
    assert_eq!(store.find_next(Search::of(&[C::Trait]), 0, None), None);
}

#[test]
fn find_next_respects_exclusive_end() {
    let store = store();
    assert_eq!(store.find_next(Search::of(&[C::Semicolon]), 0, Some(17)), None);
    assert_eq!(store.find_next(Search::of(&[C::Semicolon]), 0, Some(18)), Some(17));
    assert_eq!(store.find_next(Search::of(&[C::Semicolon]), 50, Some(500)), Some(51));
    assert_eq!(store.find_next(Search::of(&[C::Semicolon]), 900, None), None);
}

#[test]
fn find_next_local_stops_at_semicolon() {
    let store = store();
    assert_eq!(store.find_next(Search::of(&[C::If]).local(), 1, None), None);
    assert_eq!(store.find_next(Search::of(&[C::If]), 1, None), Some(19));
    assert_eq!(
        store.find_next(Search::of(&[C::Semicolon]).local(), 1, None),
        Some(17)
    );
}

#[test]
fn find_previous_with_bounds() {
    let store = store();
    assert_eq!(store.find_previous(Search::of(&[C::OpenTag]), 17, None), Some(0));
    assert_eq!(store.find_previous(Search::of(&[C::OpenTag]), 17, Some(1)), None);
    assert_eq!(store.find_previous(Search::of(&[C::LNumber]), 16, None), Some(14));
    assert_eq!(store.find_previous(Search::of(&[C::Semicolon]), 999, None), Some(51));
}

#[test]
fn find_previous_local_skips_groups() {
    let store = store();
    assert_eq!(
        store.find_previous(Search::of(&[C::String]).local(), 16, None),
        Some(5)
    );
    assert_eq!(store.find_previous(Search::of(&[C::LNumber]).local(), 16, None), None);
    assert_eq!(store.find_previous(Search::of(&[C::String]).local(), 17, None), None);
    // The closure body is hopped over as one unit.
    assert_eq!(store.find_previous(Search::of(&[C::Return]).local(), 50, None), None);
}

#[test]
fn non_empty_neighbours() {
    let store = store();
    assert_eq!(store.next_non_empty(2), Some(3));
    assert_eq!(store.previous_non_empty(33), Some(32));
    assert_eq!(store.previous_non_empty(0), Some(0));
    assert_eq!(store.next_non_empty(52), None);
}

#[test]
fn find_first_on_line_stays_on_line() {
    let store = store();
    assert_eq!(store.find_first_on_line(Search::of(&[C::Variable]), 22), Some(1));
    assert_eq!(store.find_first_on_line(Search::of(&[C::Variable]), 47), Some(34));
    assert_eq!(store.find_first_on_line(Search::of(&[C::If]), 47), None);
    assert_eq!(
        store.find_first_on_line(Search::not(TokenCode::EMPTY), 51),
        Some(34)
    );
    assert_eq!(store.find_first_on_line(Search::of(&[C::If]), 200), None);
}

// ─── Statements ─────────────────────────────────────────────────────

#[test]
fn start_of_statement() {
    let store = store();
    assert_eq!(store.find_start_of_statement(16, &[]), 1);
    assert_eq!(store.find_start_of_statement(14, &[]), 14);
    assert_eq!(store.find_start_of_statement(27, &[]), 27);
    assert_eq!(store.find_start_of_statement(47, &[]), 45);
    assert_eq!(store.find_start_of_statement(30, &[]), 30);
}

#[test]
fn start_of_statement_hops_expression_scopes() {
    let store = store();
    // Walking back from the closure's closer crosses the closure but stops
    // at the end of the preceding `if` block.
    assert_eq!(store.find_start_of_statement(50, &[]), 34);
}

#[test]
fn start_of_statement_ignore_list() {
    let store = store();
    assert_eq!(store.find_start_of_statement(14, &[C::Comma]), 11);
}

#[test]
fn end_of_statement() {
    let store = store();
    assert_eq!(store.find_end_of_statement(1, &[]), 17);
    assert_eq!(store.find_end_of_statement(11, &[]), 12);
    assert_eq!(store.find_end_of_statement(14, &[]), 14);
    assert_eq!(store.find_end_of_statement(34, &[]), 51);
}

#[test]
fn end_of_statement_from_scope_owner() {
    let store = store();
    assert_eq!(store.find_end_of_statement(19, &[]), 32);
}

#[test]
fn end_of_statement_ignore_list_and_eof() {
    let store = store();
    assert_eq!(store.find_end_of_statement(11, &[C::Comma]), 14);
    let open_only = TokenStore::new(tokens(&[(C::OpenTag, "<?php "), (C::Variable, "$a")]), "\n");
    assert_eq!(open_only.find_end_of_statement(1, &[]), 1);
}
