use crate::ui::deck_list::intent::DeckListIntent;
use crate::ui::deck_list::state::DeckListState;
use crate::ui::mvi::Reducer;

pub struct DeckListReducer;

impl Reducer for DeckListReducer {
    type State = DeckListState;
    type Intent = DeckListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DeckListIntent::Insert(ch) => {
                let mut query = state.query;
                query.push(ch);
                DeckListState { query, selected: 0 }
            }
            DeckListIntent::Backspace => {
                let mut query = state.query;
                if query.pop().is_none() {
                    return DeckListState {
                        query,
                        selected: state.selected,
                    };
                }
                DeckListState { query, selected: 0 }
            }
            DeckListIntent::Clear => DeckListState::default(),
            DeckListIntent::SelectNext { visible } => {
                let selected = match state.selected_in(visible) {
                    Some(current) if current + 1 < visible => current + 1,
                    _ => 0,
                };
                DeckListState { selected, ..state }
            }
            DeckListIntent::SelectPrevious { visible } => {
                let selected = match state.selected_in(visible) {
                    Some(0) => visible - 1,
                    Some(current) => current - 1,
                    None => 0,
                };
                DeckListState { selected, ..state }
            }
        }
    }
}
