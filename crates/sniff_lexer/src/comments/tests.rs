use pretty_assertions::assert_eq;

use super::*;

fn run(text: &str) -> Vec<Token> {
    structure(text, Placer::new(4), 10)
}

fn summary(tokens: &[Token]) -> Vec<(TokenCode, &str)> {
    tokens.iter().map(|t| (t.code, t.content.as_str())).collect()
}

#[test]
fn detects_doc_comments() {
    assert!(is_doc_comment("/** x */"));
    assert!(is_doc_comment("/**\n */"));
    assert!(!is_doc_comment("/**/"));
    assert!(!is_doc_comment("/*** x */"));
    assert!(!is_doc_comment("/* x */"));
}

#[test]
fn multi_line_with_tags() {
    let tokens = run("/**\n * Summary.\n * @param int $a\n */");
    assert_eq!(
        summary(&tokens),
        vec![
            (TokenCode::DocCommentOpenTag, "/**"),
            (TokenCode::DocCommentWhitespace, "\n"),
            (TokenCode::DocCommentWhitespace, " "),
            (TokenCode::DocCommentStar, "*"),
            (TokenCode::DocCommentWhitespace, " "),
            (TokenCode::DocCommentString, "Summary."),
            (TokenCode::DocCommentWhitespace, "\n"),
            (TokenCode::DocCommentWhitespace, " "),
            (TokenCode::DocCommentStar, "*"),
            (TokenCode::DocCommentWhitespace, " "),
            (TokenCode::DocCommentTag, "@param"),
            (TokenCode::DocCommentWhitespace, " "),
            (TokenCode::DocCommentString, "int $a"),
            (TokenCode::DocCommentWhitespace, "\n"),
            (TokenCode::DocCommentWhitespace, " "),
            (TokenCode::DocCommentCloseTag, "*/"),
        ]
    );
}

#[test]
fn links_and_tags() {
    let tokens = run("/**\n * @return void\n * @throws E\n */");
    let closer = 10 + tokens.len() - 1;
    for token in &tokens {
        assert_eq!(token.comment_opener, Some(10));
        assert_eq!(token.comment_closer, Some(closer));
    }
    let tags: Vec<&str> = tokens[0]
        .comment_tags
        .iter()
        .map(|&ptr| tokens[ptr - 10].content.as_str())
        .collect();
    assert_eq!(tags, vec!["@return", "@throws"]);
    assert!(tokens[1..].iter().all(|t| t.comment_tags.is_empty()));
}

#[test]
fn single_line() {
    let tokens = run("/** @var int */");
    assert_eq!(
        summary(&tokens),
        vec![
            (TokenCode::DocCommentOpenTag, "/**"),
            (TokenCode::DocCommentWhitespace, " "),
            (TokenCode::DocCommentTag, "@var"),
            (TokenCode::DocCommentWhitespace, " "),
            (TokenCode::DocCommentString, "int"),
            (TokenCode::DocCommentWhitespace, " "),
            (TokenCode::DocCommentCloseTag, "*/"),
        ]
    );
}

#[test]
fn directives_are_text() {
    let tokens = run("/** @phpcs:disable Foo */");
    assert!(tokens.iter().all(|t| t.code != TokenCode::DocCommentTag));
    assert!(tokens[0].comment_tags.is_empty());
}

#[test]
fn unterminated_has_no_closer() {
    let tokens = run("/**\n * open");
    assert!(tokens.iter().all(|t| t.comment_closer.is_none()));
    assert!(tokens.iter().all(|t| t.code != TokenCode::DocCommentCloseTag));
}

#[test]
fn blank_lines_round_trip() {
    let text = "/**\r\n *\r\n\r\n *\tx  \r\n   */";
    let tokens = run(text);
    let joined: String = tokens.iter().map(Token::original).collect();
    assert_eq!(joined, text);
}

#[test]
fn positions_follow_lines() {
    let tokens = structure("/**\n  * a\n */", Placer::at(3, 5, 4), 0);
    let star = tokens.iter().find(|t| t.code == TokenCode::DocCommentStar);
    assert_eq!(star.map(|t| (t.line, t.column)), Some((4, 3)));
    let close = tokens.last();
    assert_eq!(close.map(|t| (t.line, t.column)), Some((5, 2)));
}
