//! Dock launcher: click-to-toggle on top of the window manager.
//!
//! A click on an openable app closes its window when open and opens it
//! otherwise. A click never focuses: an open window buried under others
//! is closed, not raised.

use deskwin_common::{WindowError, ZIndex};
use tracing::debug;

use crate::manager::WindowManager;

/// One launchable entry in the dock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockApp {
    /// Window identity this entry toggles.
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Disabled entries are shown but ignore clicks.
    pub can_open: bool,
}

impl DockApp {
    pub fn new(id: impl Into<String>, name: impl Into<String>, can_open: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: String::new(),
            can_open,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// Result of a dock click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Opened(ZIndex),
    Closed,
    /// The app cannot open; the manager was not called.
    Disabled,
}

#[derive(Debug, Clone, Default)]
pub struct Dock {
    apps: Vec<DockApp>,
}

impl Dock {
    pub fn new(apps: Vec<DockApp>) -> Self {
        Self { apps }
    }

    pub fn apps(&self) -> &[DockApp] {
        &self.apps
    }

    pub fn app(&self, id: &str) -> Option<&DockApp> {
        self.apps.iter().find(|a| a.id == id)
    }

    /// Handle a click on the dock icon `id`.
    pub fn toggle<D>(
        &self,
        id: &str,
        windows: &mut WindowManager<D>,
    ) -> Result<ToggleOutcome, WindowError> {
        let app = self
            .app(id)
            .ok_or_else(|| WindowError::UnknownApp(id.to_owned()))?;

        if !app.can_open {
            debug!(app = id, "dock click ignored, app is disabled");
            return Ok(ToggleOutcome::Disabled);
        }

        if windows.is_open(&app.id)? {
            windows.close(&app.id)?;
            Ok(ToggleOutcome::Closed)
        } else {
            windows.open(&app.id, None).map(ToggleOutcome::Opened)
        }
    }

    /// Handle the close control in a window's title bar.
    pub fn close_button<D>(
        &self,
        key: &str,
        windows: &mut WindowManager<D>,
    ) -> Result<bool, WindowError> {
        windows.close(key)
    }
}
