use std::fs;

use tempfile::TempDir;
use todoview::config::{Config, ConfigError};

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("failed to write test config");
    path
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config.api.base_url, "https://jsonplaceholder.typicode.com");
    assert_eq!(config.api.connect_timeout_seconds, 5);
}

#[test]
fn file_overrides_base_url() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "http://localhost:3000"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:3000");
    // Unspecified fields keep their defaults.
    assert_eq!(config.api.connect_timeout_seconds, 5);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[api\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn non_http_base_url_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "ftp://example.com"
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_timeout_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
connect_timeout_seconds = 0
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
