//! Configuration schema types for Deskwin.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod dock;
mod system;
mod windows;

pub use dock::*;
pub use system::*;
pub use windows::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Deskwin.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct DeskwinConfig {
    pub windows: WindowsConfig,
    pub dock: DockConfig,
    pub events: EventsConfig,
    pub logging: LoggingConfig,
}
