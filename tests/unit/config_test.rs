//! Tests for configuration loading

use std::path::PathBuf;
use std::time::Duration;

use keymatch::config::{Config, DEFAULT_SERVER_URL};
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.server.url, DEFAULT_SERVER_URL);
    assert_eq!(config.server.timeout(), Duration::from_secs(60));
    assert_eq!(config.output.dir, PathBuf::from("."));
    assert!(config.defaults.app_name.is_none());
}

#[test]
fn test_empty_file_is_default() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn test_full_file() {
    let config = Config::parse(
        r#"
[server]
url = "http://localhost:8080"
timeout_secs = 5

[output]
dir = "results"

[defaults]
app_name = "MyApp"
"#,
    )
    .unwrap();

    assert_eq!(config.server.url, "http://localhost:8080");
    assert_eq!(config.server.timeout(), Duration::from_secs(5));
    assert_eq!(config.output.dir, PathBuf::from("results"));
    assert_eq!(config.defaults.app_name.as_deref(), Some("MyApp"));
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = Config::parse("[server]\ntimeout_secs = 10\n").unwrap();
    assert_eq!(config.server.url, DEFAULT_SERVER_URL);
    assert_eq!(config.server.timeout_secs, 10);
}

#[test]
fn test_invalid_file_is_error() {
    assert!(Config::parse("[server\nurl = ").is_err());
    assert!(Config::parse("[server]\ntimeout_secs = \"soon\"\n").is_err());
}

#[test]
fn test_save_then_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.defaults.app_name = Some("MyApp".to_string());

    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_explicit_missing_file_is_error() {
    let temp = TempDir::new().unwrap();
    let err = Config::load_from(&temp.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}
