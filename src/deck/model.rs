use chrono::NaiveDate;
use thiserror::Error;

use crate::deck::subject::Subject;

/// How hard a card is to recall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Next difficulty in `Easy -> Medium -> Hard -> Easy` order.
    pub fn cycle(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// A single question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub id: String,
    pub front: String,
    pub back: String,
    pub difficulty: Difficulty,
}

impl Flashcard {
    /// Create a card with a freshly generated id.
    pub fn new(front: impl Into<String>, back: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            front: front.into(),
            back: back.into(),
            difficulty,
        }
    }
}

/// A deck in the user's personal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardDeck {
    pub id: String,
    pub name: String,
    pub description: String,
    pub card_count: u32,
    pub last_studied: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    #[error("Rating {value} is outside the range 0..=5")]
    OutOfRange { value: f32 },
}

/// Community rating in stars, always within `0.0..=5.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rating(f32);

impl Rating {
    pub const MAX: f32 = 5.0;

    pub fn new(value: f32) -> Result<Self, RatingError> {
        if value.is_finite() && (0.0..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange { value })
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// A deck published by another user.
#[derive(Debug, Clone, PartialEq)]
pub struct CommunityDeck {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub card_count: u32,
    pub downloads: u32,
    pub rating: Rating,
    pub subject: Subject,
}
