use serde::{Deserialize, Serialize};

/// The four top-level screens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Home,
    Create,
    Library,
    Community,
}

impl ViewMode {
    /// Navigation order, as shown in the header.
    pub const ALL: [ViewMode; 4] = [
        ViewMode::Home,
        ViewMode::Create,
        ViewMode::Library,
        ViewMode::Community,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Home => "Home",
            ViewMode::Create => "Create",
            ViewMode::Library => "Library",
            ViewMode::Community => "Community",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ViewMode::Home => 0,
            ViewMode::Create => 1,
            ViewMode::Library => 2,
            ViewMode::Community => 3,
        }
    }

    /// Mode for a 1-based position in the header, if any.
    pub fn from_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
