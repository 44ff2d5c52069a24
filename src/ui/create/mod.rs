//! Manual deck builder standing in for the AI upload flow.

mod intent;
mod reducer;
mod render;
mod state;

pub use intent::CreateIntent;
pub use reducer::CreateReducer;
pub use render::render_create;
pub use state::{CreateField, CreateFormState};
