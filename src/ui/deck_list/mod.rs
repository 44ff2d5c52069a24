//! Searchable deck list shared by the library and community screens.

mod intent;
mod reducer;
mod render;
mod state;

pub use intent::DeckListIntent;
pub use reducer::DeckListReducer;
pub use render::{format_thousands, render_community, render_library};
pub use state::DeckListState;
