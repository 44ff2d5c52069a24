use crate::deck::Flashcard;
use crate::ui::create::intent::CreateIntent;
use crate::ui::create::state::{CreateField, CreateFormState};
use crate::ui::mvi::Reducer;

pub struct CreateReducer;

impl Reducer for CreateReducer {
    type State = CreateFormState;
    type Intent = CreateIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CreateIntent::Insert(ch) => {
                state.focused_text_mut().push(ch);
                state
            }
            CreateIntent::Backspace => {
                state.focused_text_mut().pop();
                state
            }
            CreateIntent::FocusNext => CreateFormState {
                focus: state.focus.next(),
                ..state
            },
            CreateIntent::FocusPrevious => CreateFormState {
                focus: state.focus.previous(),
                ..state
            },
            CreateIntent::CycleDifficulty => CreateFormState {
                difficulty: state.difficulty.cycle(),
                ..state
            },
            CreateIntent::AddCard { id } => {
                if !state.can_add_card() {
                    return state;
                }
                let card = Flashcard {
                    id,
                    front: state.front.trim().to_string(),
                    back: state.back.trim().to_string(),
                    difficulty: state.difficulty,
                };
                state.cards.push(card);
                state.front.clear();
                state.back.clear();
                state.focus = CreateField::Front;
                state
            }
            CreateIntent::RemoveLastCard => {
                state.cards.pop();
                state
            }
        }
    }
}
