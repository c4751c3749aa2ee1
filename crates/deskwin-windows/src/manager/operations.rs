//! Open and close on the WindowManager.

use std::sync::Arc;

use deskwin_common::{Event, WindowError, WindowKey, ZIndex};
use tracing::debug;

use super::WindowManager;

impl<D> WindowManager<D> {
    /// Open a window, or bring an already-open one to the front.
    ///
    /// The window receives a fresh z-index above every value issued so
    /// far. `data` replaces the payload when given; `None` keeps whatever
    /// the window already holds.
    pub fn open(&mut self, key: &str, data: Option<D>) -> Result<ZIndex, WindowError> {
        let slot = self.slot(key)?;
        let z_index = self.issue_z_index()?;

        let (key, record) = &mut self.table[slot];
        let reopened = record.is_open;
        record.is_open = true;
        record.z_index = z_index;
        if let Some(data) = data {
            record.data = Some(Arc::new(data));
        }
        let key: WindowKey = key.clone();

        debug!(%key, z_index, reopened, "window opened");
        self.commit(Event::WindowOpened { key, z_index });
        Ok(z_index)
    }

    /// Close a window: drop it to the floor and clear its payload.
    ///
    /// Returns `false` when the window was already closed, in which case
    /// nothing changes and no snapshot is published. The stacking counter
    /// is never rewound.
    pub fn close(&mut self, key: &str) -> Result<bool, WindowError> {
        let slot = self.slot(key)?;
        let floor = self.floor;

        let (key, record) = &mut self.table[slot];
        if !record.is_open {
            debug!(%key, "close ignored, window already closed");
            return Ok(false);
        }
        record.is_open = false;
        record.z_index = floor;
        record.data = None;
        let key = key.clone();

        debug!(%key, "window closed");
        self.commit(Event::WindowClosed(key));
        Ok(true)
    }
}
