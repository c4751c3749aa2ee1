//! Core TOML config loading: read from a string, a path, or the platform default.

use crate::schema::DeskwinConfig;
use crate::validation;
use deskwin_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse config from TOML text, using serde defaults for any missing fields.
pub fn load_from_str(content: &str) -> Result<DeskwinConfig, ConfigError> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from a specific TOML file path.
///
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is. Callers that must not
/// run with an invalid config call [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<DeskwinConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = load_from_str(&content)?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/deskwin/config.toml`
/// On Linux: `~/.config/deskwin/config.toml`
/// `DESKWIN_CONFIG` overrides both.
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<DeskwinConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(DeskwinConfig::default())
        }
        Err(e) => Err(e),
    }
}
