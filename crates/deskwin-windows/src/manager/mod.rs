//! The WindowManager owns the window table, the stacking counter and the
//! snapshot channel.

mod focus;
mod operations;
mod types;

pub use types::*;
