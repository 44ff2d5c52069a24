use serde::{Deserialize, Serialize};

use crate::ui::view::ViewMode;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub library: LibraryConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Screen shown at startup (default: home).
    #[serde(default)]
    pub start_view: ViewMode,
    /// Event poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Personal library settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Seed the library with the built-in sample decks (default: true).
    #[serde(default = "default_include_samples")]
    pub include_samples: bool,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_include_samples() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_view: ViewMode::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            include_samples: default_include_samples(),
        }
    }
}
