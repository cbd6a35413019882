//! Configuration loading from the process environment

use pretty_assertions::assert_eq;
use rubricy::shared::config::CONFIG_PATH_ENV;
use rubricy::shared::{AppConfig, ConfigError};
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

const VARS: [&str; 5] = [CONFIG_PATH_ENV, "DATA_DIR", "STATIC_DIR", "SERVER_HOST", "SERVER_PORT"];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_defaults_without_environment() {
    clear_env();
    let config = AppConfig::load().unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
#[serial]
fn test_load_file_then_environment() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rubricy.toml");
    std::fs::write(&path, "data_dir = \"/srv/docs\"\nport = 8080\n").unwrap();

    std::env::set_var(CONFIG_PATH_ENV, &path);
    std::env::set_var("SERVER_PORT", "9090");
    let config = AppConfig::load();
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/srv/docs"));
    assert_eq!(config.port, 9090);
}

#[test]
#[serial]
fn test_load_rejects_bad_port() {
    clear_env();
    std::env::set_var("SERVER_PORT", "seventy");
    let result = AppConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::InvalidPort(_))));
}
