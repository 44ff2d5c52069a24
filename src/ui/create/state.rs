use crate::deck::{Difficulty, Flashcard};
use crate::ui::mvi::UiState;

/// Text input that currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateField {
    #[default]
    DeckName,
    Front,
    Back,
}

impl CreateField {
    pub fn next(self) -> Self {
        match self {
            CreateField::DeckName => CreateField::Front,
            CreateField::Front => CreateField::Back,
            CreateField::Back => CreateField::DeckName,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            CreateField::DeckName => CreateField::Back,
            CreateField::Front => CreateField::DeckName,
            CreateField::Back => CreateField::Front,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateFormState {
    pub deck_name: String,
    pub front: String,
    pub back: String,
    pub difficulty: Difficulty,
    pub cards: Vec<Flashcard>,
    pub focus: CreateField,
}

impl UiState for CreateFormState {}

impl CreateFormState {
    /// Both sides of the pending card have text.
    pub fn can_add_card(&self) -> bool {
        !self.front.trim().is_empty() && !self.back.trim().is_empty()
    }

    pub fn focused_text_mut(&mut self) -> &mut String {
        match self.focus {
            CreateField::DeckName => &mut self.deck_name,
            CreateField::Front => &mut self.front,
            CreateField::Back => &mut self.back,
        }
    }
}
