use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateIntent {
    /// Type into the focused field.
    Insert(char),
    /// Delete the last character of the focused field.
    Backspace,
    FocusNext,
    FocusPrevious,
    CycleDifficulty,
    /// Turn the pending front/back into a card with the given id.
    ///
    /// Ignored while either side is blank.
    AddCard { id: String },
    RemoveLastCard,
}

impl Intent for CreateIntent {}
