//! Where the desktop config lives, and seeding it on first run.

use deskwin_common::ConfigError;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

/// Environment variable that points the desktop at a different config file.
pub const CONFIG_PATH_ENV: &str = "DESKWIN_CONFIG";

/// `$DESKWIN_CONFIG` when set, else `<platform config dir>/deskwin/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(std::env::var_os(CONFIG_PATH_ENV), dirs::config_dir())
}

pub(super) fn resolve_config_path(
    env_override: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        debug!("config path taken from {CONFIG_PATH_ENV}");
        return Ok(PathBuf::from(path));
    }
    config_dir
        .map(|dir| dir.join("deskwin").join("config.toml"))
        .ok_or_else(|| {
            ConfigError::ParseError(format!(
                "no platform config directory, set {CONFIG_PATH_ENV} instead"
            ))
        })
}

/// Seed `path` with the stock desktop config.
///
/// An existing file is left alone. Returns whether a file was written.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    let write_error = |e: std::io::Error| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut file = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(write_error(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_error)?;

    info!("created default config at {}", path.display());
    Ok(true)
}
