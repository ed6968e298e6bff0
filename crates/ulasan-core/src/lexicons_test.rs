use std::io::Write as _;
use std::path::Path;

use super::*;

fn lexicons(positive: &[&str], negative: &[&str], suggestion: &[&str]) -> LexiconsFile {
    let own = |xs: &[&str]| xs.iter().map(|s| (*s).to_string()).collect();
    LexiconsFile {
        positive: own(positive),
        negative: own(negative),
        suggestion: own(suggestion),
    }
}

#[test]
fn validate_accepts_words_and_phrases() {
    let file = lexicons(&["enak", "enak"], &["tidak enak", "mahal"], &["lebih baik"]);
    assert!(validate_lexicons(&file).is_ok());
}

#[test]
fn validate_rejects_empty_list() {
    let file = lexicons(&["enak"], &[], &["saran"]);
    let err = validate_lexicons(&file).unwrap_err();
    assert!(err.to_string().contains("negative lexicon"), "got: {err}");
}

#[test]
fn validate_rejects_blank_entry() {
    let file = lexicons(&["enak", "  "], &["mahal"], &["saran"]);
    let err = validate_lexicons(&file).unwrap_err();
    assert!(err.to_string().contains("blank entry"), "got: {err}");
}

#[test]
fn validate_rejects_uppercase_entry() {
    let file = lexicons(&["Enak"], &["mahal"], &["saran"]);
    let err = validate_lexicons(&file).unwrap_err();
    assert!(err.to_string().contains("'Enak'"), "got: {err}");
}

#[test]
fn validate_rejects_digits_and_punctuation() {
    for bad in ["top10", "ok!", "worth-it"] {
        let file = lexicons(&[bad], &["mahal"], &["saran"]);
        assert!(
            validate_lexicons(&file).is_err(),
            "expected '{bad}' to be rejected"
        );
    }
}

#[test]
fn validate_rejects_double_space_in_phrase() {
    let file = lexicons(&["enak"], &["tidak  enak"], &["saran"]);
    assert!(validate_lexicons(&file).is_err());
}

#[test]
fn parse_rejects_missing_list() {
    let err = parse_lexicons("positive: [enak]\nnegative: [mahal]\n").unwrap_err();
    assert!(matches!(err, ConfigError::LexiconFileParse(_)), "got: {err:?}");
}

#[test]
fn builtin_lexicons_parse() {
    let file = LexiconsFile::builtin().expect("built-in lexicons must be valid");
    assert!(file.positive.iter().any(|w| w == "enak"));
    assert!(file.negative.iter().any(|w| w == "mahal"));
    assert!(file.negative.iter().any(|w| w == "tidak enak"));
    assert!(file.suggestion.iter().any(|w| w == "saran"));
}

#[test]
fn load_lexicons_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("lexicons.yaml");
    assert!(
        path.exists(),
        "lexicons.yaml missing at {path:?}, required for this test"
    );
    let file = load_lexicons(&path).expect("config/lexicons.yaml should load");
    assert_eq!(file, LexiconsFile::builtin().unwrap());
}

#[test]
fn load_lexicons_from_custom_file() {
    let mut tmp = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        tmp,
        "positive:\n  - sip\nnegative:\n  - ampas\nsuggestion:\n  - usul"
    )
    .expect("write lexicons");

    let file = load_lexicons(tmp.path()).unwrap();
    assert_eq!(file.positive, vec!["sip".to_string()]);
    assert_eq!(file.negative, vec!["ampas".to_string()]);
    assert_eq!(file.suggestion, vec!["usul".to_string()]);
}

#[test]
fn load_lexicons_reports_missing_file() {
    let err = load_lexicons(Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(
        matches!(
            err,
            ConfigError::LexiconFileIo { ref path, .. } if path.contains("not/here.yaml")
        ),
        "got: {err:?}"
    );
}
