use tokio::sync::broadcast;

use crate::types::{WindowKey, ZIndex};

/// Lifecycle transitions of a window, attached to every published snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Cause of every snapshot taken before the first change.
    Initialized,
    WindowOpened { key: WindowKey, z_index: ZIndex },
    WindowClosed(WindowKey),
    WindowFocused { key: WindowKey, z_index: ZIndex },
}

impl Event {
    /// The window this event is about, if any.
    pub fn key(&self) -> Option<&WindowKey> {
        match self {
            Self::WindowOpened { key, .. } | Self::WindowFocused { key, .. } => Some(key),
            Self::WindowClosed(key) => Some(key),
            Self::Initialized => None,
        }
    }
}

/// Fan-out channel. Every subscriber receives every message published after
/// it subscribed; a subscriber that falls more than `capacity` messages
/// behind skips the oldest ones.
pub struct EventBus<T = Event> {
    sender: broadcast::Sender<T>,
}

impl<T: Clone> EventBus<T> {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers the message reached.
    pub fn publish(&self, message: T) -> usize {
        self.sender.send(message).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T> std::fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}
