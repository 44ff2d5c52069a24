//! Case-insensitive substring search over decks.

use crate::deck::model::{CommunityDeck, FlashcardDeck};

/// A record that can be matched against a free-text query.
pub trait Searchable {
    /// Text fields considered when matching, in no particular order.
    fn searchable_fields(&self) -> Vec<&str>;

    /// True when any field, lower-cased, contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.searchable_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Searchable for FlashcardDeck {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl Searchable for CommunityDeck {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.subject.label(),
        ]
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn searchable_fields(&self) -> Vec<&str> {
        (**self).searchable_fields()
    }
}

/// Keep the records whose searchable fields contain `query`, ignoring case.
///
/// Order is preserved and an empty query keeps everything.
pub fn filter_decks<'a, T, I>(query: &str, decks: I) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let needle = query.to_lowercase();
    decks
        .into_iter()
        .filter(|deck| deck.matches_lowercase(&needle))
        .collect()
}
