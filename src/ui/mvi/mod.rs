//! Model-View-Intent primitives shared by every screen.
//!
//! ```text
//! key ──→ Intent ──→ Reducer ──→ State ──→ render
//!  ↑                                         │
//!  └─────────────────────────────────────────┘
//! ```
//!
//! Screens own their state; the app only routes intents to the active one.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
