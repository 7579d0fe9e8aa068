use pretty_assertions::assert_eq;
use sniff_ir::Encoding;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn files_and_flags() {
    let options = Options::parse(&args(&["a.php", "--json", "b.php", "--tab-width=2"]))
        .unwrap_or_default();
    assert_eq!(options.files, vec![PathBuf::from("a.php"), PathBuf::from("b.php")]);
    assert_eq!(options.format, OutputFormat::Json);
    assert_eq!(options.tab_width, Some(2));
}

#[test]
fn usage_errors() {
    assert!(matches!(Options::parse(&args(&[])), Err(CliError::Usage(_))));
    assert!(matches!(
        Options::parse(&args(&["a.php", "--bogus"])),
        Err(CliError::Usage(_))
    ));
    assert!(matches!(
        Options::parse(&args(&["a.php", "--tab-width=wide"])),
        Err(CliError::Usage(_))
    ));
}

#[test]
fn flags_override_defaults() {
    let options = Options::parse(&args(&["a.php", "--encoding=latin1", "--tab-width=0"]))
        .unwrap_or_default();
    let config = options.tokenizer_config().unwrap_or_default();
    assert_eq!(config.encoding, Encoding::Latin1);
    assert_eq!(config.tab_width, 0);
}

#[test]
fn unknown_encoding_is_reported() {
    let options = Options::parse(&args(&["a.php", "--encoding=ebcdic"])).unwrap_or_default();
    assert!(options.tokenizer_config().is_err());
}

#[test]
fn bundled_dialect_by_default() {
    let options = Options::parse(&args(&["a.php"])).unwrap_or_default();
    let dialect = options.dialect().map(|d| d.name).unwrap_or_default();
    assert_eq!(dialect, "php");
}

#[test]
fn missing_config_file() {
    let options = Options::parse(&args(&["a.php", "--config=/nonexistent/sniff.json"]))
        .unwrap_or_default();
    assert!(matches!(
        options.tokenizer_config(),
        Err(CliError::Read { .. })
    ));
}
