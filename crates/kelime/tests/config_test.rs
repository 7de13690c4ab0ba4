//! Tests for configuration resolution.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use kelime::{CONFIG_FILE_NAME, KelimeConfig};

#[test]
fn test_defaults_without_config_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = KelimeConfig::resolve(None, dir.path()).expect("Resolve failed");
    assert_eq!(config, KelimeConfig::default());
    assert_eq!(config.dictionary(), &PathBuf::from("turkish_words.json"));
}

#[test]
fn test_local_config_file_is_picked_up() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "dictionary = \"vocabularylist\"\nlog_filter = \"kelime=debug\"\n",
    )
    .expect("Write failed");

    let config = KelimeConfig::resolve(None, dir.path()).expect("Resolve failed");
    assert_eq!(config.dictionary(), &PathBuf::from("vocabularylist"));
    assert_eq!(config.log_filter(), "kelime=debug");
}

#[test]
fn test_explicit_path_wins_over_local_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join(CONFIG_FILE_NAME), "dictionary = \"local.json\"\n")
        .expect("Write failed");
    let explicit = dir.path().join("other.toml");
    fs::write(&explicit, "dictionary = \"other.json\"\n").expect("Write failed");

    let config = KelimeConfig::resolve(Some(&explicit), dir.path()).expect("Resolve failed");
    assert_eq!(config.dictionary(), &PathBuf::from("other.json"));
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("missing.toml");
    let error = KelimeConfig::resolve(Some(&missing), dir.path()).unwrap_err();
    assert!(error.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "dictionary = [1, 2").expect("Write failed");
    let error = KelimeConfig::from_file(&path).unwrap_err();
    assert!(error.message.contains("Failed to parse config"));
}

#[test]
fn test_overrides_apply_in_order() {
    let config = KelimeConfig::default()
        .with_env_dictionary(Some("/from/env.json".to_string()))
        .with_dictionary(PathBuf::from("/from/flag.json"));
    assert_eq!(config.dictionary(), &PathBuf::from("/from/flag.json"));

    let config = KelimeConfig::default().with_env_dictionary(None);
    assert_eq!(config, KelimeConfig::default());
}
