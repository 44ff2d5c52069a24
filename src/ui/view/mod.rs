//! Top-level view switch.

mod intent;
mod mode;
mod reducer;
mod state;

pub use intent::NavigationIntent;
pub use mode::ViewMode;
pub use reducer::NavigationReducer;
pub use state::ViewState;
