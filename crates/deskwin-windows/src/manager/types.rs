//! Core types and constructors for WindowManager.

use std::collections::HashMap;
use std::sync::Arc;

use deskwin_common::{Event, EventBus, WindowError, WindowKey, ZIndex};
use tracing::{debug, warn};

use crate::record::{self, WindowRecord};
use crate::snapshot::{SnapshotReceiver, WindowSnapshot};

/// Snapshots buffered per subscriber unless configured otherwise.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Owns the window table and the stacking counter.
///
/// The key set is fixed at construction. `D` is an opaque per-window
/// payload; the manager stores and clears it but never looks inside.
pub struct WindowManager<D> {
    /// Records in configuration order.
    pub(super) table: Vec<(WindowKey, WindowRecord<D>)>,
    /// Key to position in `table`.
    pub(super) index: HashMap<WindowKey, usize>,
    /// z-index of every closed window.
    pub(super) floor: ZIndex,
    /// Next stacking value to hand out. Only ever increases; `None` once
    /// `ZIndex::MAX` has been issued.
    pub(super) next_z: Option<ZIndex>,
    /// Count of applied state changes.
    pub(super) revision: u64,
    /// Transition behind the current revision.
    pub(super) last_event: Event,
    pub(super) bus: EventBus<Arc<WindowSnapshot<D>>>,
}

impl<D> WindowManager<D> {
    /// Create a manager with every identity closed at `floor`.
    ///
    /// Fails on an empty or duplicated identity set, or when `seed` does
    /// not exceed `floor`.
    pub fn new(
        identities: impl IntoIterator<Item = WindowKey>,
        floor: ZIndex,
        seed: ZIndex,
    ) -> Result<Self, WindowError> {
        if seed <= floor {
            return Err(WindowError::InvalidConfig(format!(
                "seed {seed} must be greater than floor {floor}"
            )));
        }

        let mut table = Vec::new();
        let mut index = HashMap::new();
        for key in identities {
            if index.insert(key.clone(), table.len()).is_some() {
                return Err(WindowError::InvalidConfig(format!(
                    "duplicate window identity: {key}"
                )));
            }
            table.push((key, WindowRecord::closed(floor)));
        }
        if table.is_empty() {
            return Err(WindowError::InvalidConfig(
                "at least one window identity is required".into(),
            ));
        }

        debug!(windows = table.len(), floor, seed, "window manager created");

        Ok(Self {
            table,
            index,
            floor,
            next_z: Some(seed),
            revision: 0,
            last_event: Event::Initialized,
            bus: EventBus::new(DEFAULT_EVENT_CAPACITY),
        })
    }

    /// Replace the snapshot channel with one buffering `capacity` snapshots.
    ///
    /// Existing subscribers are dropped, so call this before handing out
    /// receivers.
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.bus = EventBus::new(capacity);
        self
    }

    // -- Accessors --

    pub fn floor(&self) -> ZIndex {
        self.floor
    }

    /// The value the next `open` or `focus` will assign, or `None` when
    /// the counter is exhausted.
    pub fn next_z_index(&self) -> Option<ZIndex> {
        self.next_z
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Keys in configuration order.
    pub fn keys(&self) -> impl Iterator<Item = &WindowKey> {
        self.table.iter().map(|(k, _)| k)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn record(&self, key: &str) -> Result<&WindowRecord<D>, WindowError> {
        let slot = self.slot(key)?;
        Ok(&self.table[slot].1)
    }

    pub fn is_open(&self, key: &str) -> Result<bool, WindowError> {
        self.record(key).map(WindowRecord::is_open)
    }

    pub fn z_index(&self, key: &str) -> Result<ZIndex, WindowError> {
        self.record(key).map(WindowRecord::z_index)
    }

    pub fn data(&self, key: &str) -> Result<Option<&D>, WindowError> {
        self.record(key).map(WindowRecord::data)
    }

    /// Open windows from bottom to top.
    pub fn stacking_order(&self) -> Vec<&WindowKey> {
        record::stacking_order(self.table.iter())
    }

    pub fn topmost(&self) -> Option<&WindowKey> {
        self.stacking_order().last().copied()
    }

    // -- Observation --

    /// Receive a snapshot after every subsequent state change.
    pub fn subscribe(&self) -> SnapshotReceiver<D> {
        self.bus.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.bus.subscriber_count()
    }

    /// Copy of the current table. Payloads are shared, not cloned.
    pub fn snapshot(&self) -> Arc<WindowSnapshot<D>> {
        Arc::new(WindowSnapshot {
            revision: self.revision,
            cause: self.last_event.clone(),
            floor: self.floor,
            next_z_index: self.next_z,
            records: self.table.clone(),
        })
    }

    // -- Internals --

    /// Resolve a key to its table position, rejecting unknown identities.
    pub(super) fn slot(&self, key: &str) -> Result<usize, WindowError> {
        self.index.get(key).copied().ok_or_else(|| {
            warn!(key, "rejected unknown window identity");
            WindowError::InvalidIdentity(WindowKey::from(key))
        })
    }

    /// Hand out the next stacking value.
    pub(super) fn issue_z_index(&mut self) -> Result<ZIndex, WindowError> {
        let z = self.next_z.ok_or(WindowError::StackExhausted)?;
        self.next_z = z.checked_add(1);
        if self.next_z.is_none() {
            warn!(z_index = z, "stacking counter exhausted");
        }
        Ok(z)
    }

    /// Record a completed change and push the resulting snapshot.
    pub(super) fn commit(&mut self, event: Event) {
        self.revision += 1;
        self.last_event = event;
        if self.bus.subscriber_count() > 0 {
            let reached = self.bus.publish(self.snapshot());
            debug!(revision = self.revision, reached, "published window snapshot");
        }
    }
}

impl<D: std::fmt::Debug> std::fmt::Debug for WindowManager<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowManager")
            .field("table", &self.table)
            .field("floor", &self.floor)
            .field("next_z", &self.next_z)
            .field("revision", &self.revision)
            .field("bus", &self.bus)
            .finish()
    }
}
