//! Tests for loading the configuration file from disk.

use ipwatch::{WatchConfig, WatchError};
use std::fs;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = WatchConfig::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, WatchConfig::default());
}

#[test]
fn file_values_are_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "include_ipv6 = true\ninclude_loopback = false\ntitle = \"Car 3\"\n",
    )
    .unwrap();

    let config = WatchConfig::load_from(&path).unwrap();
    assert_eq!(config.title, "Car 3");
    assert!(config.options().include_ipv6);
    assert!(!config.options().include_loopback);
    assert_eq!(config.refresh_interval_ms, 1000);
}

#[test]
fn invalid_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "refresh_interval_ms = -5\n").unwrap();

    assert!(matches!(
        WatchConfig::load_from(&path),
        Err(WatchError::Config(_))
    ));
}

#[test]
fn directory_in_place_of_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        WatchConfig::load_from(dir.path()),
        Err(WatchError::Io(_))
    ));
}
