//! Deskwin configuration system.
//!
//! Provides TOML-based configuration for the window identity set, the
//! stacking floor and seed, the dock, the snapshot channel and logging.
//! All sections use sensible defaults so partial configs work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use deskwin_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{
    DeskwinConfig, DockAppConfig, DockConfig, EventsConfig, LogLevel, LoggingConfig,
    WindowsConfig, CONFIG_SCHEMA_VERSION,
};
pub use toml_loader::{load_default, load_from_path, load_from_str};

use deskwin_common::ConfigError;

/// Convenience function to load and validate config from the platform default path.
pub fn load_config() -> Result<DeskwinConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load a config from an explicit path and validate it.
pub fn load_config_from(path: &std::path::Path) -> Result<DeskwinConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &DeskwinConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
