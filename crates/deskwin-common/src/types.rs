use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stacking value of a window. Higher values render above lower ones.
pub type ZIndex = u64;

/// Identity of a window slot, one of the configured, build-time-known set
/// (e.g. `finder`, `terminal`). Compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowKey(String);

impl WindowKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for WindowKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl Borrow<str> for WindowKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}
