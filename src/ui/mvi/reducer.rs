use super::intent::Intent;
use super::state::UiState;

/// Turns a state and an intent into the next state.
///
/// Reducers are the only place screen state changes, and they never touch
/// the library, the log, or the terminal.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
