pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, DeskwinError, WindowError};
pub use events::{Event, EventBus};
pub use types::{WindowKey, ZIndex};

pub type Result<T> = std::result::Result<T, DeskwinError>;
