use study_companion::deck::{community_samples, filter_decks, personal_samples, FlashcardDeck};

fn deck(id: &str, name: &str, description: &str) -> FlashcardDeck {
    FlashcardDeck {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        card_count: 0,
        last_studied: None,
    }
}

fn ids<'a>(decks: impl IntoIterator<Item = &'a FlashcardDeck>) -> Vec<&'a str> {
    decks.into_iter().map(|d| d.id.as_str()).collect()
}

fn mixed_decks() -> Vec<FlashcardDeck> {
    vec![
        deck("a", "Chemistry Basics", "Atoms and bonds"),
        deck("b", "Spanish Vocabulary", "Common words"),
        deck("c", "Organic CHEMISTRY", "Reactions"),
        deck("d", "History", "Dates about chemical warfare"),
        deck("e", "", ""),
    ]
}

const QUERIES: [&str; 8] = ["", "chem", "CHEM", "s", "xyz", " ", "istry", "ä"];

#[test]
fn empty_query_returns_everything_in_order() {
    let decks = mixed_decks();
    assert_eq!(ids(filter_decks("", &decks)), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn result_is_order_preserving_subsequence() {
    let decks = mixed_decks();
    for query in QUERIES {
        let result = filter_decks(query, &decks);
        let positions = result
            .iter()
            .map(|r| decks.iter().position(|d| d.id == r.id).unwrap());
        let mut last = None;
        for pos in positions {
            if let Some(prev) = last {
                assert!(pos > prev, "order broken for query {:?}", query);
            }
            last = Some(pos);
        }
    }
}

#[test]
fn every_result_matches_a_searchable_field() {
    let decks = mixed_decks();
    for query in QUERIES {
        let needle = query.to_lowercase();
        for deck in filter_decks(query, &decks) {
            assert!(
                deck.name.to_lowercase().contains(&needle)
                    || deck.description.to_lowercase().contains(&needle),
                "{:?} does not match {:?}",
                deck.name,
                query
            );
        }
    }
}

#[test]
fn excluded_records_do_not_match() {
    let decks = mixed_decks();
    for query in QUERIES {
        let kept = ids(filter_decks(query, &decks));
        let needle = query.to_lowercase();
        for deck in decks.iter().filter(|d| !kept.contains(&d.id.as_str())) {
            assert!(!deck.name.to_lowercase().contains(&needle));
            assert!(!deck.description.to_lowercase().contains(&needle));
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let decks = mixed_decks();
    for query in QUERIES {
        let once = filter_decks(query, &decks);
        let twice = filter_decks(query, once.iter().copied());
        assert_eq!(once, twice, "not idempotent for {:?}", query);
    }
}

#[test]
fn filtering_ignores_case() {
    let decks = mixed_decks();
    assert_eq!(filter_decks("CHEM", &decks), filter_decks("chem", &decks));
    assert_eq!(ids(filter_decks("chem", &decks)), vec!["a", "c", "d"]);

    let community = community_samples();
    assert_eq!(
        filter_decks("CHEM", &community),
        filter_decks("chem", &community)
    );
}

#[test]
fn library_scenario_bio_and_xyz() {
    let decks = personal_samples();
    let bio = filter_decks("bio", &decks);
    assert_eq!(bio.len(), 1);
    assert_eq!(bio[0].name, "Biology - Cell Structure");
    assert!(filter_decks("xyz", &decks).is_empty());
}

#[test]
fn community_scenario_history() {
    let decks = community_samples();
    let result = filter_decks("history", &decks);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "World History: WWI & WWII");
}

#[test]
fn whitespace_is_not_trimmed() {
    let decks = personal_samples();
    // "Spanish Vocabulary" and "Biology - Cell Structure" contain spaces.
    assert_eq!(filter_decks(" ", &decks).len(), 2);
    assert!(filter_decks(" bio", &decks).is_empty());
}
