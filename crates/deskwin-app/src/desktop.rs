//! Composition root: owns the window manager and the dock, and renders
//! every published snapshot.

use std::io::{BufRead, Write};
use std::sync::Arc;

use deskwin_common::DeskwinError;
use deskwin_config::DeskwinConfig;
use deskwin_windows::{
    Dock, DockApp, SnapshotReceiver, ToggleOutcome, WindowManager, WindowSnapshot,
};
use tokio::sync::broadcast::error::TryRecvError;
use tracing::{debug, info, warn};

use crate::render::render;
use crate::script::{parse_line, DesktopCommand};

/// Window payload: what the window is showing, e.g. a file path.
pub type Payload = String;

/// Whether the input loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Desktop {
    windows: WindowManager<Payload>,
    dock: Dock,
    /// The renderer's subscription.
    view: SnapshotReceiver<Payload>,
}

impl Desktop {
    /// Build the manager and dock from a validated config.
    pub fn from_config(config: &DeskwinConfig) -> Result<Self, DeskwinError> {
        let windows = WindowManager::new(
            config.windows.identities.iter().cloned(),
            config.windows.floor,
            config.windows.resolved_seed(),
        )?
        .with_event_capacity(config.events.capacity);

        let dock = Dock::new(
            config
                .dock
                .apps
                .iter()
                .map(|app| DockApp::new(&app.id, &app.name, app.can_open).with_icon(&app.icon))
                .collect(),
        );

        let view = windows.subscribe();
        info!(
            windows = windows.len(),
            dock_apps = dock.apps().len(),
            "desktop ready"
        );
        Ok(Self {
            windows,
            dock,
            view,
        })
    }

    pub fn windows(&self) -> &WindowManager<Payload> {
        &self.windows
    }

    /// Apply one command to the desktop.
    pub fn handle(&mut self, command: DesktopCommand) -> Result<Flow, DeskwinError> {
        match command {
            DesktopCommand::Open { key, data } => {
                self.windows.open(&key, data)?;
            }
            DesktopCommand::Close(key) => {
                if !self.dock.close_button(&key, &mut self.windows)? {
                    debug!(%key, "window was already closed");
                }
            }
            DesktopCommand::Focus(key) => {
                self.windows.focus(&key)?;
            }
            DesktopCommand::Click(app) => {
                if self.dock.toggle(&app, &mut self.windows)? == ToggleOutcome::Disabled {
                    info!(%app, "dock app is disabled");
                }
            }
            DesktopCommand::Show => {}
            DesktopCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Newest snapshot the renderer has not seen yet, if any.
    pub fn next_view(&mut self) -> Option<Arc<WindowSnapshot<Payload>>> {
        let mut latest = None;
        loop {
            match self.view.try_recv() {
                Ok(snapshot) => latest = Some(snapshot),
                Err(TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "renderer lagged behind, skipping snapshots");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        latest
    }

    /// Read commands until EOF or `quit`, rendering after each change.
    ///
    /// Bad lines and rejected operations are reported to `errors` and the
    /// loop carries on.
    pub fn run(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        errors: &mut impl Write,
    ) -> Result<(), DeskwinError> {
        write!(out, "{}", render(&self.windows.snapshot()))?;

        for line in input.lines() {
            let line = line?;
            let command = match parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(errors, "error: {e}")?;
                    continue;
                }
            };
            let show = command == DesktopCommand::Show;

            match self.handle(command) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    warn!("command failed: {e}");
                    writeln!(errors, "error: {e}")?;
                }
            }

            if let Some(snapshot) = self.next_view() {
                write!(out, "{}", render(&snapshot))?;
            } else if show {
                write!(out, "{}", render(&self.windows.snapshot()))?;
            }
        }
        Ok(())
    }
}
