use crate::ui::create::CreateFormState;
use crate::ui::deck_list::DeckListState;
use crate::ui::mvi::UiState;
use crate::ui::view::mode::ViewMode;

/// The active screen together with the state only that screen owns.
///
/// Leaving a screen drops its variant, so search boxes and half-filled forms
/// start over when the user comes back.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Home,
    Create(CreateFormState),
    Library(DeckListState),
    Community(DeckListState),
}

impl UiState for ViewState {}

impl ViewState {
    /// Fresh state for `mode`.
    pub fn enter(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Home => ViewState::Home,
            ViewMode::Create => ViewState::Create(CreateFormState::default()),
            ViewMode::Library => ViewState::Library(DeckListState::default()),
            ViewMode::Community => ViewState::Community(DeckListState::default()),
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self {
            ViewState::Home => ViewMode::Home,
            ViewState::Create(_) => ViewMode::Create,
            ViewState::Library(_) => ViewMode::Library,
            ViewState::Community(_) => ViewMode::Community,
        }
    }

    /// Search state of the active list screen.
    pub fn deck_list(&self) -> Option<&DeckListState> {
        match self {
            ViewState::Library(list) | ViewState::Community(list) => Some(list),
            ViewState::Home | ViewState::Create(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_round_trips_mode() {
        for mode in ViewMode::ALL {
            assert_eq!(ViewState::enter(mode).mode(), mode);
        }
    }

    #[test]
    fn default_is_home() {
        assert_eq!(ViewState::default(), ViewState::Home);
    }

    #[test]
    fn deck_list_only_on_list_screens() {
        assert!(ViewState::enter(ViewMode::Library).deck_list().is_some());
        assert!(ViewState::enter(ViewMode::Community).deck_list().is_some());
        assert!(ViewState::enter(ViewMode::Home).deck_list().is_none());
        assert!(ViewState::enter(ViewMode::Create).deck_list().is_none());
    }
}
