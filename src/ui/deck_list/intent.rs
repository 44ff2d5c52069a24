use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckListIntent {
    /// Append a character to the search box.
    Insert(char),
    /// Delete the last character of the search box.
    Backspace,
    /// Empty the search box.
    Clear,
    /// Move the selection down within `visible` filtered entries.
    SelectNext { visible: usize },
    /// Move the selection up within `visible` filtered entries.
    SelectPrevious { visible: usize },
}

impl Intent for DeckListIntent {}
