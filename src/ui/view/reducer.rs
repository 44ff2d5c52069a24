use crate::ui::mvi::Reducer;
use crate::ui::view::intent::NavigationIntent;
use crate::ui::view::state::ViewState;

pub struct NavigationReducer;

impl Reducer for NavigationReducer {
    type State = ViewState;
    type Intent = NavigationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let current = state.mode();
        let target = match intent {
            NavigationIntent::Navigate(mode) => mode,
            NavigationIntent::Next => current.next(),
            NavigationIntent::Previous => current.previous(),
        };

        if target == current {
            // Re-selecting the active screen keeps its state.
            state
        } else {
            ViewState::enter(target)
        }
    }
}
