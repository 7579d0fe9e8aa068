use super::*;

#[test]
fn names_round_trip() {
    for &code in TokenCode::ALL {
        assert_eq!(TokenCode::from_name(code.name()), Some(code), "{code:?}");
    }
}

#[test]
fn names_are_unique() {
    let mut names: Vec<&str> = TokenCode::ALL.iter().map(|c| c.name()).collect();
    names.sort_unstable();
    let before = names.len();
    names.dedup();
    assert_eq!(before, names.len());
}

#[test]
fn unknown_name_is_rejected() {
    assert_eq!(TokenCode::from_name("T_NOT_A_TOKEN"), None);
    assert_eq!(TokenCode::from_name("t_string"), None);
}

#[test]
fn display_uses_name() {
    assert_eq!(TokenCode::OpenCurlyBracket.to_string(), "T_OPEN_CURLY_BRACKET");
    assert_eq!(TokenCode::SelfKw.name(), "T_SELF");
}

#[test]
fn empty_tokens() {
    assert!(TokenCode::Whitespace.is_empty());
    assert!(TokenCode::Comment.is_empty());
    assert!(TokenCode::DocCommentTag.is_empty());
    assert!(!TokenCode::String.is_empty());
    assert!(!TokenCode::InlineHtml.is_empty());
}

#[test]
fn classification_sets() {
    assert!(TokenCode::BoolCast.is_cast());
    assert!(!TokenCode::OpenParenthesis.is_cast());
    assert!(TokenCode::ClassC.is_magic_constant());
    assert!(TokenCode::CoalesceEqual.is_assignment());
    assert!(!TokenCode::IsEqual.is_assignment());
    assert!(TokenCode::Heredoc.is_text_string());
}

#[test]
fn serde_uses_names() {
    let json = serde_json::to_string(&vec![TokenCode::If, TokenCode::FnArrow]).unwrap_or_default();
    assert_eq!(json, r#"["T_IF","T_FN_ARROW"]"#);
    let back: Result<Vec<TokenCode>, _> = serde_json::from_str(&json);
    assert_eq!(back.ok(), Some(vec![TokenCode::If, TokenCode::FnArrow]));
}

#[test]
fn serde_rejects_unknown_names() {
    let err = serde_json::from_str::<TokenCode>(r#""T_BOGUS""#);
    assert!(err.is_err_and(|e| e.to_string().contains("T_BOGUS")));
}

#[test]
fn empty_list_matches_predicate() {
    let from_predicate: Vec<TokenCode> = TokenCode::ALL
        .iter()
        .copied()
        .filter(|c| c.is_empty())
        .collect();
    assert_eq!(TokenCode::EMPTY, from_predicate.as_slice());
}
