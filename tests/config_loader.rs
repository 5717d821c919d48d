use std::fs;

use kitab::config::{Config, ConfigError};
use kitab::i18n::Language;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn full_config_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        [api]
        endpoint_url = "https://books.example/api/books"
        connect_timeout_seconds = 10

        [ui]
        default_language = "urdu"
        tick_rate_ms = 100
        "#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.endpoint_url, "https://books.example/api/books");
    assert_eq!(config.api.connect_timeout_seconds, 10);
    assert_eq!(config.ui.default_language, Language::Urdu);
    assert_eq!(config.ui.tick_rate_ms, 100);
}

#[test]
fn empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.api.endpoint_url,
        "https://dev.iqrakitab.net/api/books"
    );
    assert_eq!(config.ui.default_language, Language::English);
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[api\nendpoint_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_language_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        [ui]
        default_language = "french"
        "#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn non_http_endpoint_is_a_validation_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        [api]
        endpoint_url = "file:///books.json"
        "#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
