//! Tests for configuration module.

use std::io::Write;

use super::*;

#[test_log::test]
fn default_level_is_warn() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "warn");
}

#[test_log::test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(settings.logging.level, "warn");
}

#[test_log::test]
fn level_is_read_from_toml_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

    let settings = Settings::load_from(file.path()).unwrap();

    assert_eq!(settings.logging.level, "debug");
}

#[test]
fn malformed_file_is_a_config_error() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[logging\nlevel = ").unwrap();

    let err = Settings::load_from(file.path()).unwrap_err();

    assert!(matches!(err, crate::error::CoreError::ConfigError(_)));
}
