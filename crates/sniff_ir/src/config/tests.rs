use pretty_assertions::assert_eq;

use super::*;

#[test]
fn defaults() {
    let config = TokenizerConfig::default();
    assert_eq!(config.eol, None);
    assert_eq!(config.tab_width, 4);
    assert_eq!(config.encoding, Encoding::Utf8);
    assert!(!config.strict_encoding);
    assert!(config.short_open_tag);
}

#[test]
fn partial_json_keeps_defaults() {
    let config = TokenizerConfig::from_json(r#"{ "tab_width": 2 }"#).unwrap_or_default();
    assert_eq!(config, TokenizerConfig::default().with_tab_width(2));
}

#[test]
fn full_json() {
    let json = r#"{
        "eol": "\r\n",
        "tab_width": 0,
        "encoding": "iso-8859-1",
        "strict_encoding": true,
        "short_open_tag": false
    }"#;
    let config = TokenizerConfig::from_json(json).unwrap_or_default();
    assert_eq!(config.eol.as_deref(), Some("\r\n"));
    assert_eq!(config.tab_width, 0);
    assert_eq!(config.encoding, Encoding::Latin1);
    assert!(config.strict_encoding);
    assert!(!config.short_open_tag);
}

#[test]
fn encoding_aliases() {
    for name in ["\"utf-8\"", "\"utf8\"", "\"UTF-8\""] {
        assert_eq!(serde_json::from_str::<Encoding>(name).ok(), Some(Encoding::Utf8));
    }
    for name in ["\"iso-8859-1\"", "\"latin1\""] {
        assert_eq!(serde_json::from_str::<Encoding>(name).ok(), Some(Encoding::Latin1));
    }
    assert!(serde_json::from_str::<Encoding>("\"utf-16\"").is_err());
    assert_eq!(Encoding::Latin1.to_string(), "iso-8859-1");
}

#[test]
fn unknown_key_is_rejected() {
    assert!(TokenizerConfig::from_json(r#"{ "tabwidth": 2 }"#).is_err());
}

#[test]
fn builders() {
    let config = TokenizerConfig::default().with_eol("\n").with_tab_width(8);
    assert_eq!(config.eol.as_deref(), Some("\n"));
    assert_eq!(config.tab_width, 8);
}

#[test]
fn encoding_from_name() {
    assert_eq!(Encoding::from_name("UTF-8"), Some(Encoding::Utf8));
    assert_eq!(Encoding::from_name("Latin1"), Some(Encoding::Latin1));
    assert_eq!(Encoding::from_name("utf-16"), None);
}
