//! Immutable views of the window table handed to observers.

use std::sync::Arc;

use deskwin_common::{Event, WindowKey, ZIndex};
use tokio::sync::broadcast;

use crate::record::{self, WindowRecord};

/// Receiving end of a manager subscription.
pub type SnapshotReceiver<D> = broadcast::Receiver<Arc<WindowSnapshot<D>>>;

/// A fully settled copy of the window table, taken after an operation
/// completed. Payloads are shared with the live table, not copied.
pub struct WindowSnapshot<D> {
    pub(crate) revision: u64,
    pub(crate) cause: Event,
    pub(crate) floor: ZIndex,
    pub(crate) next_z_index: Option<ZIndex>,
    pub(crate) records: Vec<(WindowKey, WindowRecord<D>)>,
}

impl<D> WindowSnapshot<D> {
    /// Number of state changes applied before this snapshot was taken.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The transition that produced this snapshot.
    pub fn cause(&self) -> &Event {
        &self.cause
    }

    pub fn floor(&self) -> ZIndex {
        self.floor
    }

    pub fn next_z_index(&self) -> Option<ZIndex> {
        self.next_z_index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&WindowRecord<D>> {
        self.records
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, r)| r)
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.get(key).is_some_and(WindowRecord::is_open)
    }

    /// Keys in configuration order.
    pub fn keys(&self) -> impl Iterator<Item = &WindowKey> {
        self.records.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WindowKey, &WindowRecord<D>)> {
        self.records.iter().map(|(k, r)| (k, r))
    }

    /// Open windows from bottom to top.
    pub fn stacking_order(&self) -> Vec<&WindowKey> {
        record::stacking_order(self.records.iter())
    }

    /// The open window rendered above all others.
    pub fn topmost(&self) -> Option<&WindowKey> {
        self.stacking_order().last().copied()
    }
}

impl<D: std::fmt::Debug> std::fmt::Debug for WindowSnapshot<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowSnapshot")
            .field("revision", &self.revision)
            .field("cause", &self.cause)
            .field("records", &self.records)
            .finish()
    }
}
