use chrono::{Local, NaiveDate};

use crate::config::Config;
use crate::deck::{
    community_samples, filter_decks, personal_samples, CommunityDeck, DeckLibrary, Flashcard,
    FlashcardDeck, LibraryError,
};
use crate::ui::create::{CreateIntent, CreateReducer};
use crate::ui::deck_list::{DeckListIntent, DeckListReducer};
use crate::ui::mvi::Reducer;
use crate::ui::view::{NavigationIntent, NavigationReducer, ViewMode, ViewState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($target:expr, $reducer:ty, $intent:expr) => {{
        let target = $target;
        *target = <$reducer>::reduce(std::mem::take(&mut *target), $intent);
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line feedback shown in the footer after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

pub struct App {
    should_quit: bool,
    /// Active screen and its local state (MVI pattern).
    view: ViewState,
    library: DeckLibrary,
    community: Vec<CommunityDeck>,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, LibraryError> {
        let library = if config.library.include_samples {
            DeckLibrary::from_decks(personal_samples())?
        } else {
            DeckLibrary::new()
        };
        Ok(Self::with_decks(
            config.ui.start_view,
            library,
            community_samples(),
        ))
    }

    pub fn with_decks(start: ViewMode, library: DeckLibrary, community: Vec<CommunityDeck>) -> Self {
        Self {
            should_quit: false,
            view: ViewState::enter(start),
            library,
            community,
            status: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn mode(&self) -> ViewMode {
        self.view.mode()
    }

    pub fn library(&self) -> &DeckLibrary {
        &self.library
    }

    pub fn community(&self) -> &[CommunityDeck] {
        &self.community
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn navigate(&mut self, mode: ViewMode) {
        self.dispatch_navigation(NavigationIntent::Navigate(mode));
    }

    pub fn dispatch_navigation(&mut self, intent: NavigationIntent) {
        let from = self.view.mode();
        dispatch_mvi!(&mut self.view, NavigationReducer, intent);
        let to = self.view.mode();
        if from != to {
            tracing::debug!(from = from.label(), to = to.label(), "View changed");
            self.status = None;
        }
    }

    /// Route a search/selection intent to the active list screen.
    ///
    /// No-op on screens without a deck list.
    pub fn dispatch_deck_list(&mut self, intent: DeckListIntent) {
        match &mut self.view {
            ViewState::Library(list) | ViewState::Community(list) => {
                dispatch_mvi!(list, DeckListReducer, intent);
            }
            ViewState::Home | ViewState::Create(_) => {}
        }
    }

    /// Route a form intent to the create screen. No-op elsewhere.
    pub fn dispatch_create(&mut self, intent: CreateIntent) {
        if let ViewState::Create(form) = &mut self.view {
            dispatch_mvi!(form, CreateReducer, intent);
        }
    }

    /// Personal decks matching the active search box.
    pub fn visible_library(&self) -> Vec<&FlashcardDeck> {
        let query = self.query();
        filter_decks(query, self.library.decks())
    }

    /// Community decks matching the active search box.
    pub fn visible_community(&self) -> Vec<&CommunityDeck> {
        let query = self.query();
        filter_decks(query, &self.community)
    }

    /// Number of entries in the active list screen.
    pub fn visible_count(&self) -> usize {
        match self.view {
            ViewState::Library(_) => self.visible_library().len(),
            ViewState::Community(_) => self.visible_community().len(),
            ViewState::Home | ViewState::Create(_) => 0,
        }
    }

    /// Start studying a personal deck.
    ///
    /// Study mode itself is not built yet; this records the date and logs.
    pub fn start_study(&mut self, deck_id: &str) {
        self.start_study_on(deck_id, Local::now().date_naive());
    }

    pub fn start_study_on(&mut self, deck_id: &str, date: NaiveDate) {
        match self.library.mark_studied(deck_id, date) {
            Ok(()) => {
                let name = self
                    .library
                    .get(deck_id)
                    .map(|deck| deck.name.clone())
                    .unwrap_or_default();
                tracing::info!(deck_id, name = %name, "Starting study session");
                self.status = Some(StatusMessage::info(format!(
                    "Study mode for '{}' is coming soon",
                    name
                )));
            }
            Err(err) => {
                tracing::warn!(deck_id, error = %err, "Cannot start study session");
                self.status = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    /// Import a community deck into the personal library and show it.
    pub fn import_deck(&mut self, deck_id: &str) {
        let Some(deck) = self.community.iter().find(|deck| deck.id == deck_id) else {
            let err = LibraryError::DeckNotFound {
                id: deck_id.to_string(),
            };
            tracing::warn!(deck_id, error = %err, "Import failed");
            self.status = Some(StatusMessage::error(err.to_string()));
            return;
        };

        match self.library.import(deck) {
            Ok(new_id) => {
                tracing::info!(deck_id, new_id = %new_id, title = %deck.title, "Imported deck");
                let title = deck.title.clone();
                self.navigate(ViewMode::Library);
                self.status = Some(StatusMessage::info(format!("Imported '{}'", title)));
            }
            Err(err) => {
                tracing::warn!(deck_id, error = %err, "Import rejected");
                self.status = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    /// Save a freshly built deck and show it in the library.
    pub fn save_flashcards(&mut self, cards: Vec<Flashcard>, deck_name: &str) {
        let card_count = cards.len();
        match self.library.save_created(deck_name, cards) {
            Ok(id) => {
                tracing::info!(deck_id = %id, deck_name, card_count, "Saved flashcards");
                self.navigate(ViewMode::Library);
                self.status = Some(StatusMessage::info(format!(
                    "Saved '{}' with {} cards",
                    deck_name.trim(),
                    card_count
                )));
            }
            Err(err) => {
                tracing::warn!(deck_name, error = %err, "Save rejected");
                self.status = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    /// Enter on the library screen.
    pub fn study_selected(&mut self) {
        if let Some(id) = self.selected_library_id() {
            self.start_study(&id);
        }
    }

    /// Enter on the community screen.
    pub fn import_selected(&mut self) {
        if let Some(id) = self.selected_community_id() {
            self.import_deck(&id);
        }
    }

    /// Ctrl+S on the create screen.
    pub fn save_form(&mut self) {
        let ViewState::Create(form) = &self.view else {
            return;
        };
        let cards = form.cards.clone();
        let name = form.deck_name.clone();
        self.save_flashcards(cards, &name);
    }

    pub fn selected_library_id(&self) -> Option<String> {
        let ViewState::Library(list) = &self.view else {
            return None;
        };
        let visible = self.visible_library();
        list.selected_in(visible.len())
            .map(|idx| visible[idx].id.clone())
    }

    pub fn selected_community_id(&self) -> Option<String> {
        let ViewState::Community(list) = &self.view else {
            return None;
        };
        let visible = self.visible_community();
        list.selected_in(visible.len())
            .map(|idx| visible[idx].id.clone())
    }

    fn query(&self) -> &str {
        self.view
            .deck_list()
            .map(|list| list.query.as_str())
            .unwrap_or("")
    }
}
