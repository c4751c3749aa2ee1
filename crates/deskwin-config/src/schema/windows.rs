//! Window identity set and stacking configuration.

use deskwin_common::{WindowKey, ZIndex};
use serde::{Deserialize, Serialize};

/// z-index assigned to every closed window.
pub const DEFAULT_FLOOR: ZIndex = 1000;

// =============================================================================
// TYPES
// =============================================================================

/// The fixed set of window identities and the stacking parameters.
///
/// The identity set is read once at startup; the window table never
/// gains or loses keys afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowsConfig {
    /// Every window slot, in dock/iteration order.
    pub identities: Vec<WindowKey>,
    /// z-index of closed windows.
    pub floor: ZIndex,
    /// First z-index handed out. Must be strictly greater than `floor`;
    /// defaults to `floor + 1`.
    pub seed: Option<ZIndex>,
}

impl WindowsConfig {
    pub fn resolved_seed(&self) -> ZIndex {
        self.seed.unwrap_or_else(|| self.floor.saturating_add(1))
    }
}

// =============================================================================
// DEFAULTS
// =============================================================================

impl Default for WindowsConfig {
    fn default() -> Self {
        Self {
            identities: [
                "finder", "contact", "resume", "safari", "photos", "terminal", "txtfile",
                "imgfile",
            ]
            .into_iter()
            .map(WindowKey::from)
            .collect(),
            floor: DEFAULT_FLOOR,
            seed: None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_is_one_above_floor() {
        let config = WindowsConfig::default();
        assert_eq!(config.floor, 1000);
        assert_eq!(config.resolved_seed(), 1001);
    }

    #[test]
    fn explicit_seed_wins() {
        let config = WindowsConfig {
            seed: Some(5000),
            ..Default::default()
        };
        assert_eq!(config.resolved_seed(), 5000);
    }

    #[test]
    fn default_identities_include_terminal() {
        let config = WindowsConfig::default();
        assert_eq!(config.identities.len(), 8);
        assert!(config.identities.contains(&WindowKey::from("terminal")));
    }

    #[test]
    fn partial_toml_keeps_default_identities() {
        let config: WindowsConfig = toml::from_str("floor = 0").unwrap();
        assert_eq!(config.floor, 0);
        assert_eq!(config.resolved_seed(), 1);
        assert_eq!(config.identities.len(), 8);
    }
}
