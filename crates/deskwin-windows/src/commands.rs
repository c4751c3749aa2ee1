use deskwin_common::{WindowError, WindowKey, ZIndex};

use crate::manager::WindowManager;

/// A single manager operation, for callers that queue or replay input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowCommand<D> {
    Open(WindowKey, Option<D>),
    Close(WindowKey),
    Focus(WindowKey),
}

/// What an executed command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Opened(ZIndex),
    /// `false` when the window was already closed.
    Closed(bool),
    Focused(ZIndex),
}

impl<D> WindowManager<D> {
    /// Dispatch a command to the matching operation.
    pub fn execute(&mut self, command: WindowCommand<D>) -> Result<CommandOutcome, WindowError> {
        match command {
            WindowCommand::Open(key, data) => self.open(key.as_str(), data).map(CommandOutcome::Opened),
            WindowCommand::Close(key) => self.close(key.as_str()).map(CommandOutcome::Closed),
            WindowCommand::Focus(key) => self.focus(key.as_str()).map(CommandOutcome::Focused),
        }
    }
}
