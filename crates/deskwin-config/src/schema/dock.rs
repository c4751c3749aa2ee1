//! Dock configuration: the launchable apps shown in the dock.

use serde::{Deserialize, Serialize};

// =============================================================================
// TYPES
// =============================================================================

/// Dock contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    pub apps: Vec<DockAppConfig>,
}

/// A single dock entry.
///
/// `id` names the window the entry toggles. Entries with `can_open = false`
/// are shown disabled and need not correspond to a window.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DockAppConfig {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub can_open: bool,
}

impl DockAppConfig {
    fn new(id: &str, name: &str, icon: &str, can_open: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            can_open,
        }
    }
}

// =============================================================================
// DEFAULTS
// =============================================================================

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            apps: vec![
                DockAppConfig::new("finder", "Portfolio", "finder.png", true),
                DockAppConfig::new("safari", "Articles", "safari.png", true),
                DockAppConfig::new("photos", "Gallery", "photos.png", true),
                DockAppConfig::new("contact", "Contact", "contact.png", true),
                DockAppConfig::new("terminal", "Skills", "terminal.png", true),
                DockAppConfig::new("trash", "Archive", "trash.png", false),
            ],
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
