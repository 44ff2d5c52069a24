//! In-memory personal library for the current session.
//!
//! Saved and imported decks live here until the process exits; nothing is
//! written to disk.

use chrono::NaiveDate;
use thiserror::Error;

use crate::deck::model::{CommunityDeck, Flashcard, FlashcardDeck};

/// Errors raised by library mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("A deck with id '{id}' already exists")]
    DuplicateId { id: String },

    #[error("Deck '{id}' not found")]
    DeckNotFound { id: String },

    #[error("Deck name must not be empty")]
    EmptyName,

    #[error("Deck '{name}' has no cards")]
    NoCards { name: String },

    #[error("'{title}' is already in your library")]
    AlreadyImported { title: String },
}

/// Ordered collection of personal decks with unique ids.
#[derive(Debug, Clone, Default)]
pub struct DeckLibrary {
    decks: Vec<FlashcardDeck>,
    /// Cards of decks created in this session, keyed by deck id.
    cards: Vec<(String, Vec<Flashcard>)>,
    next_id: u64,
}

impl DeckLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from existing decks, rejecting duplicate ids.
    pub fn from_decks(decks: Vec<FlashcardDeck>) -> Result<Self, LibraryError> {
        let mut library = Self::new();
        for deck in decks {
            library.insert(deck)?;
        }
        Ok(library)
    }

    pub fn decks(&self) -> &[FlashcardDeck] {
        &self.decks
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&FlashcardDeck> {
        self.decks.iter().find(|deck| deck.id == id)
    }

    /// Cards of a deck created in this session. Sample and imported decks
    /// carry only metadata.
    pub fn cards(&self, id: &str) -> Option<&[Flashcard]> {
        self.cards
            .iter()
            .find(|(deck_id, _)| deck_id == id)
            .map(|(_, cards)| cards.as_slice())
    }

    pub fn insert(&mut self, deck: FlashcardDeck) -> Result<(), LibraryError> {
        if self.get(&deck.id).is_some() {
            return Err(LibraryError::DuplicateId { id: deck.id });
        }
        if let Ok(numeric) = deck.id.parse::<u64>() {
            self.next_id = self.next_id.max(numeric);
        }
        self.decks.push(deck);
        Ok(())
    }

    /// Store a deck built in the create screen and return its id.
    pub fn save_created(
        &mut self,
        name: &str,
        cards: Vec<Flashcard>,
    ) -> Result<String, LibraryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LibraryError::EmptyName);
        }
        if cards.is_empty() {
            return Err(LibraryError::NoCards {
                name: name.to_string(),
            });
        }

        let id = self.allocate_id();
        let card_count = u32::try_from(cards.len()).unwrap_or(u32::MAX);
        self.insert(FlashcardDeck {
            id: id.clone(),
            name: name.to_string(),
            description: format!("{} cards created by you", card_count),
            card_count,
            last_studied: None,
        })?;
        self.cards.push((id.clone(), cards));
        Ok(id)
    }

    /// Copy a community deck into the library and return the new id.
    pub fn import(&mut self, deck: &CommunityDeck) -> Result<String, LibraryError> {
        let id = imported_id(&deck.id);
        if self.get(&id).is_some() {
            return Err(LibraryError::AlreadyImported {
                title: deck.title.clone(),
            });
        }
        self.insert(FlashcardDeck {
            id: id.clone(),
            name: deck.title.clone(),
            description: deck.description.clone(),
            card_count: deck.card_count,
            last_studied: None,
        })?;
        Ok(id)
    }

    pub fn mark_studied(&mut self, id: &str, date: NaiveDate) -> Result<(), LibraryError> {
        let deck = self
            .decks
            .iter_mut()
            .find(|deck| deck.id == id)
            .ok_or_else(|| LibraryError::DeckNotFound { id: id.to_string() })?;
        deck.last_studied = Some(date);
        Ok(())
    }

    fn allocate_id(&mut self) -> String {
        loop {
            self.next_id += 1;
            let candidate = self.next_id.to_string();
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

fn imported_id(community_id: &str) -> String {
    format!("community-{}", community_id)
}
