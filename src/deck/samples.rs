//! Built-in decks shown before the user creates or imports anything.

use chrono::NaiveDate;

use crate::deck::model::{CommunityDeck, FlashcardDeck, Rating};
use crate::deck::subject::Subject;

pub fn personal_samples() -> Vec<FlashcardDeck> {
    vec![
        FlashcardDeck {
            id: "1".to_string(),
            name: "Biology - Cell Structure".to_string(),
            description: "Key concepts about cell organelles".to_string(),
            card_count: 25,
            last_studied: NaiveDate::from_ymd_opt(2024, 10, 29),
        },
        FlashcardDeck {
            id: "2".to_string(),
            name: "Spanish Vocabulary".to_string(),
            description: "Common words and phrases".to_string(),
            card_count: 50,
            last_studied: NaiveDate::from_ymd_opt(2024, 10, 27),
        },
    ]
}

pub fn community_samples() -> Vec<CommunityDeck> {
    let entries = [
        (
            "1",
            "Organic Chemistry Reactions",
            "Essential organic chemistry reactions for students",
            "Dr. Sarah Chen",
            127,
            2840,
            4.8,
            "Chemistry",
        ),
        (
            "2",
            "World History: WWI & WWII",
            "Key dates and events from both World Wars",
            "Prof. Michael Torres",
            89,
            1920,
            4.6,
            "History",
        ),
        (
            "3",
            "Python Programming Basics",
            "Essential Python concepts for beginners",
            "Alex Johnson",
            156,
            4120,
            4.9,
            "Computer Science",
        ),
    ];

    entries
        .into_iter()
        .filter_map(
            |(id, title, description, author, card_count, downloads, rating, subject)| {
                // Sample ratings are literals within range; skip rather than panic.
                let rating = Rating::new(rating).ok()?;
                Some(CommunityDeck {
                    id: id.to_string(),
                    title: title.to_string(),
                    description: description.to_string(),
                    author: author.to_string(),
                    card_count,
                    downloads,
                    rating,
                    subject: Subject::parse(subject),
                })
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_ids_are_unique() {
        let personal: HashSet<_> = personal_samples().into_iter().map(|d| d.id).collect();
        assert_eq!(personal.len(), 2);
        let community: HashSet<_> = community_samples().into_iter().map(|d| d.id).collect();
        assert_eq!(community.len(), 3);
    }

    #[test]
    fn sample_subjects_are_known() {
        let subjects: Vec<_> = community_samples().into_iter().map(|d| d.subject).collect();
        assert_eq!(
            subjects,
            vec![Subject::Chemistry, Subject::History, Subject::ComputerScience]
        );
    }

    #[test]
    fn sample_dates_are_set() {
        let decks = personal_samples();
        assert_eq!(decks[0].last_studied, NaiveDate::from_ymd_opt(2024, 10, 29));
        assert_eq!(decks[1].last_studied, NaiveDate::from_ymd_opt(2024, 10, 27));
    }
}
