//! Flashcard decks: data model, sample data, search, and the session library.

mod filter;
mod library;
mod model;
mod samples;
mod subject;

pub use filter::{filter_decks, Searchable};
pub use library::{DeckLibrary, LibraryError};
pub use model::{CommunityDeck, Difficulty, Flashcard, FlashcardDeck, Rating, RatingError};
pub use samples::{community_samples, personal_samples};
pub use subject::Subject;
