use super::*;

// === RawTag discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(RawTag::Ident as u8, 0);
    assert_eq!(RawTag::Backtick as u8, 6);

    assert_eq!(RawTag::InlineHtml as u8, 16);
    assert_eq!(RawTag::Shebang as u8, 27);

    assert_eq!(RawTag::Plus as u8, 32);
    assert_eq!(RawTag::Arrow as u8, 79);

    assert_eq!(RawTag::LeftParen as u8, 80);
    assert_eq!(RawTag::HashBracket as u8, 91);

    assert_eq!(RawTag::Whitespace as u8, 112);
    assert_eq!(RawTag::DocComment as u8, 115);

    assert_eq!(RawTag::UnterminatedString as u8, 240);
    assert_eq!(RawTag::Eof as u8, 255);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<RawTag>(), 1);
}

// === Lexeme ===

#[test]
fn fixed_lexeme_compound_operators() {
    assert_eq!(RawTag::Spaceship.lexeme(), Some("<=>"));
    assert_eq!(RawTag::BangEqualEqual.lexeme(), Some("!=="));
    assert_eq!(RawTag::StarStarEqual.lexeme(), Some("**="));
    assert_eq!(RawTag::QuestionQuestion.lexeme(), Some("??"));
    assert_eq!(RawTag::Ellipsis.lexeme(), Some("..."));
    assert_eq!(RawTag::HashBracket.lexeme(), Some("#["));
}

#[test]
fn variable_text_has_no_lexeme() {
    for tag in [
        RawTag::Ident,
        RawTag::Variable,
        RawTag::Int,
        RawTag::DoubleQuoted,
        RawTag::InlineHtml,
        RawTag::OpenTag,
        RawTag::Whitespace,
        RawTag::DocComment,
        RawTag::HeredocBody,
    ] {
        assert_eq!(tag.lexeme(), None, "{tag:?} should not have a fixed lexeme");
    }
}

// === Classification ===

#[test]
fn trivia_classification() {
    assert!(RawTag::Whitespace.is_trivia());
    assert!(RawTag::LineComment.is_trivia());
    assert!(RawTag::DocComment.is_trivia());
    assert!(!RawTag::Ident.is_trivia());
    assert!(!RawTag::InlineHtml.is_trivia());
}

#[test]
fn degraded_classification() {
    assert!(RawTag::UnterminatedString.is_degraded());
    assert!(RawTag::Unknown.is_degraded());
    assert!(RawTag::InteriorNull.is_degraded());
    assert!(!RawTag::Eof.is_degraded());
    assert!(!RawTag::SingleQuoted.is_degraded());
}
