//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use deskwin_common::{ConfigError, WindowKey};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::paths::resolve_config_path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_deskwin_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[windows]
identities = ["finder", "terminal"]
floor = 0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(
        config.windows.identities,
        vec![WindowKey::from("finder"), WindowKey::from("terminal")]
    );
    assert_eq!(config.windows.floor, 0);
    assert_eq!(config.windows.resolved_seed(), 1);
    // Defaults preserved
    assert_eq!(config.events.capacity, 64);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let config = load_from_str("[events]\ncapacity = 0\n").unwrap();
    assert_eq!(config.events.capacity, 0);
}

#[test]
fn empty_string_gives_defaults() {
    let config = load_from_str("").unwrap();
    assert_eq!(config.windows.floor, 1000);
    assert_eq!(config.dock.apps.len(), 6);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deskwin").join("config.toml");

    assert!(create_default_config(&path).unwrap());
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.windows.identities.len(), 8);
    assert_eq!(config.windows.floor, 1000);
    assert_eq!(config.dock.apps.len(), 6);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn config_path_defaults_to_platform_dir() {
    let path = resolve_config_path(None, Some(PathBuf::from("/home/ada/.config"))).unwrap();
    assert_eq!(path, PathBuf::from("/home/ada/.config/deskwin/config.toml"));
}

#[test]
fn config_path_env_override_wins() {
    let path = resolve_config_path(
        Some(OsString::from("/srv/desk.toml")),
        Some(PathBuf::from("/home/ada/.config")),
    )
    .unwrap();
    assert_eq!(path, PathBuf::from("/srv/desk.toml"));

    // An empty override is ignored
    let path = resolve_config_path(Some(OsString::new()), Some(PathBuf::from("/etc"))).unwrap();
    assert_eq!(path, PathBuf::from("/etc/deskwin/config.toml"));
}

#[test]
fn config_path_without_platform_dir_names_the_override() {
    let err = resolve_config_path(None, None).unwrap_err();
    assert!(err.to_string().contains(CONFIG_PATH_ENV));
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[windows]\nfloor = 7\n").unwrap();

    assert!(!create_default_config(&path).unwrap());
    assert_eq!(load_from_path(&path).unwrap().windows.floor, 7);
}
