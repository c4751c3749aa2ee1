//! Window manager core for the deskwin desktop.
//!
//! A fixed set of window identities, each with an open flag, a stacking
//! value and an optional payload. [`WindowManager`] is the only writer;
//! observers read immutable [`WindowSnapshot`]s published after every
//! change.

pub mod commands;
pub mod dock;
pub mod manager;
pub mod record;
pub mod snapshot;

pub use commands::{CommandOutcome, WindowCommand};
pub use dock::{Dock, DockApp, ToggleOutcome};
pub use manager::WindowManager;
pub use record::WindowRecord;
pub use snapshot::{SnapshotReceiver, WindowSnapshot};
