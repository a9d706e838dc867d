// tests/unit_config.rs
use std::fs;
use sceneaudit_core::config::{Config, RuleConfig, Vocabulary, CONFIG_FILE, IGNORE_FILE};
use sceneaudit_core::error::SceneAuditError;
use sceneaudit_core::types::Severity;

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    fs::write(
        d.path().join(CONFIG_FILE),
        "[rules]\nrow_band = 20.0\ndisabled = [\"1.4.4\"]\nfail_on = \"high\"\n\n[vocabulary]\nvague_terms = [\"go\"]\n",
    )
    .unwrap();
    let c = Config::load(d.path()).unwrap();
    assert!((c.rules.row_band - 20.0).abs() < f64::EPSILON);
    assert!(c.rules.is_disabled("1.4.4"));
    assert_eq!(c.rules.fail_on, Some(Severity::High));
    assert_eq!(c.vocabulary.vague_terms, ["go"]);
    // unspecified keys keep their defaults
    assert_eq!(c.vocabulary.min_label_length, 3);
    assert!((c.rules.contrast_normal - 4.5).abs() < f64::EPSILON);
}

#[test]
fn test_defaults() {
    let r = RuleConfig::default();
    assert!((r.row_band - 50.0).abs() < f64::EPSILON);
    assert!((r.contrast_normal - 4.5).abs() < f64::EPSILON);
    assert!((r.contrast_large - 3.0).abs() < f64::EPSILON);
    assert!(r.disabled.is_empty());
    assert_eq!(r.fail_on, None);

    let v = Vocabulary::default();
    assert!(v.is_vague("OK"));
    assert!(!v.is_vague("Save Document"));
    assert_eq!(v.bucket_for("BackButton"), Some("back"));
}

#[test]
fn test_missing_files_keep_defaults() {
    let d = tempfile::tempdir().unwrap();
    let c = Config::load(d.path()).unwrap();
    assert!(c.exclude_patterns.is_empty());
    assert!(c.vocabulary.is_vague("ok"));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join(CONFIG_FILE), "[rules\nrow_band = ").unwrap();
    let err = Config::load(d.path()).unwrap_err();
    assert!(matches!(err, SceneAuditError::Config { .. }));
}

#[test]
fn test_ignore_file() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join(IGNORE_FILE), "# comment\n\nSandbox/\n[unclosed\n").unwrap();
    let c = Config::load(d.path()).unwrap();
    assert_eq!(c.exclude_patterns.len(), 1);
    assert!(c.is_excluded("Assets/Sandbox/Test.unity"));
    assert!(!c.is_excluded("Assets/Scenes/Menu.unity"));
}

#[test]
fn test_save_default_never_overwrites() {
    let d = tempfile::tempdir().unwrap();
    let path = sceneaudit_core::config::io::save_default(d.path()).unwrap();
    assert!(path.exists());

    let reloaded = Config::load(d.path()).unwrap();
    assert!((reloaded.rules.row_band - 50.0).abs() < f64::EPSILON);

    assert!(sceneaudit_core::config::io::save_default(d.path()).is_err());
}
