//! Bring-to-front handling for WindowManager.

use deskwin_common::{Event, WindowError, ZIndex};
use tracing::{debug, warn};

use super::WindowManager;

impl<D> WindowManager<D> {
    /// Raise an open window above all others without touching its payload.
    ///
    /// Focusing a closed window is rejected with [`WindowError::NotOpen`];
    /// the table and the counter are left as they were.
    pub fn focus(&mut self, key: &str) -> Result<ZIndex, WindowError> {
        let slot = self.slot(key)?;
        if !self.table[slot].1.is_open {
            warn!(key, "focus rejected, window is closed");
            return Err(WindowError::NotOpen(self.table[slot].0.clone()));
        }

        let z_index = self.issue_z_index()?;
        let (key, record) = &mut self.table[slot];
        record.z_index = z_index;
        let key = key.clone();

        debug!(%key, z_index, "window focused");
        self.commit(Event::WindowFocused { key, z_index });
        Ok(z_index)
    }

    /// Whether `key` is the open window rendered on top.
    pub fn is_topmost(&self, key: &str) -> Result<bool, WindowError> {
        self.slot(key)?;
        Ok(self.topmost().is_some_and(|top| top.as_str() == key))
    }
}
