use pretty_assertions::assert_eq;
use sniff_ir::TokenCode;

use crate::enrich::tests::{enriched, ptr};

fn code_of(source: &str, content: &str) -> Option<TokenCode> {
    let tokens = enriched(source);
    tokens.iter().find(|t| t.content == content).map(|t| t.code)
}

#[test]
fn casts_merge_with_inner_blanks() {
    assert_eq!(code_of("<?php (int) $a;", "(int)"), Some(TokenCode::IntCast));
    assert_eq!(code_of("<?php ( string )$a;", "( string )"), Some(TokenCode::StringCast));
    assert_eq!(code_of("<?php (BOOLEAN)$a;", "(BOOLEAN)"), Some(TokenCode::BoolCast));
    assert_eq!(code_of("<?php (real)$a;", "(real)"), Some(TokenCode::DoubleCast));
}

#[test]
fn parenthesized_names_are_not_casts() {
    let tokens = enriched("<?php (foo);");
    assert_eq!(tokens[ptr(&tokens, "(")].code, TokenCode::OpenParenthesis);
    assert_eq!(tokens[ptr(&tokens, "foo")].code, TokenCode::String);
}

#[test]
fn cast_keeps_tab_original() {
    let tokens = enriched("<?php (\tint)$a;");
    let cast = tokens.iter().find(|t| t.code == TokenCode::IntCast);
    assert_eq!(cast.and_then(|t| t.orig_content.as_deref()), Some("(\tint)"));
}

#[test]
fn nullsafe_and_coalesce_equal() {
    assert_eq!(
        code_of("<?php $a?->b;", "?->"),
        Some(TokenCode::NullsafeObjectOperator)
    );
    assert_eq!(code_of("<?php $a ??= 1;", "??="), Some(TokenCode::CoalesceEqual));
    assert_eq!(code_of("<?php $a ?? 1;", "??"), Some(TokenCode::Coalesce));
}

#[test]
fn two_part_merges_consume_both_parts() {
    let tokens = enriched("<?php $a?->b ??= 1;");
    let nullsafe = ptr(&tokens, "?->");
    assert_eq!(tokens[nullsafe + 1].content, "b");
    let coalesce = ptr(&tokens, "??=");
    assert_eq!(tokens[coalesce - 1].content, " ");
    assert_eq!(tokens[coalesce + 2].content, "1");
    assert!(!tokens.iter().any(|t| t.code == TokenCode::Equal || t.code == TokenCode::ObjectOperator));
    let text: String = tokens.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(text, "<?php $a?->b ??= 1;");
}

#[test]
fn yield_from_spans_blanks() {
    assert_eq!(code_of("<?php yield from a();", "yield from"), Some(TokenCode::YieldFrom));
    assert_eq!(code_of("<?php yield  FROM a();", "yield  FROM"), Some(TokenCode::YieldFrom));
    assert_eq!(code_of("<?php yield $from;", "yield"), Some(TokenCode::Yield));
}

#[test]
fn merged_tokens_take_the_first_position() {
    let tokens = enriched("<?php\n  $x = (int) $a;");
    let cast = &tokens[ptr(&tokens, "(int)")];
    assert_eq!((cast.line, cast.column, cast.length), (2, 8, 5));
}

#[test]
fn doc_comment_spliced_at_output_position() {
    let tokens = enriched("<?php (int)$a; /** @var int */");
    let open = tokens
        .iter()
        .position(|t| t.code == TokenCode::DocCommentOpenTag)
        .unwrap_or(usize::MAX);
    let close = tokens
        .iter()
        .position(|t| t.code == TokenCode::DocCommentCloseTag)
        .unwrap_or(usize::MAX);
    assert_eq!(close, tokens.len() - 1);
    for token in &tokens[open..=close] {
        assert_eq!(token.comment_opener, Some(open));
        assert_eq!(token.comment_closer, Some(close));
    }
    assert_eq!(tokens[open].comment_tags, vec![ptr(&tokens, "@var")]);
}
