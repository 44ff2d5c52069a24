use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeckListState {
    /// Contents of the search box.
    pub query: String,
    /// Index into the filtered list, not the full one.
    pub selected: usize,
}

impl UiState for DeckListState {}

impl DeckListState {
    /// Selection clamped to a list of `visible` entries.
    pub fn selected_in(&self, visible: usize) -> Option<usize> {
        if visible == 0 {
            None
        } else {
            Some(self.selected.min(visible - 1))
        }
    }
}
