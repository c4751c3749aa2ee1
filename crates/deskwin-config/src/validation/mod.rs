//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod dock;
mod helpers;
mod misc;
mod windows;


use crate::schema::DeskwinConfig;
use deskwin_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DeskwinConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    windows::validate_windows(&mut errors, config);
    dock::validate_dock(&mut errors, config);
    misc::validate_events(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
