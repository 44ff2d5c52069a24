mod common;

use chrono::NaiveDate;
use common::{ctrl, key, press, type_text};
use crossterm::event::KeyCode;
use study_companion::config::Config;
use study_companion::deck::{Difficulty, Flashcard};
use study_companion::ui::app::{App, StatusKind};
use study_companion::ui::input::handle_key;
use study_companion::ui::view::{ViewMode, ViewState};

fn app() -> App {
    App::new(&Config::default()).expect("sample library")
}

fn query(app: &App) -> Option<String> {
    app.view().deck_list().map(|list| list.query.clone())
}

#[test]
fn starts_on_home_by_default() {
    assert_eq!(app().mode(), ViewMode::Home);
}

#[test]
fn start_view_comes_from_config() {
    let mut config = Config::default();
    config.ui.start_view = ViewMode::Community;
    let app = App::new(&config).unwrap();
    assert_eq!(app.mode(), ViewMode::Community);
}

#[test]
fn library_round_trip_resets_search() {
    let mut app = app();
    handle_key(&mut app, key(KeyCode::F(3)));
    type_text(&mut app, "bio");
    assert_eq!(query(&app).as_deref(), Some("bio"));
    assert_eq!(app.visible_library().len(), 1);

    handle_key(&mut app, key(KeyCode::F(2)));
    assert_eq!(app.mode(), ViewMode::Create);
    handle_key(&mut app, key(KeyCode::F(3)));
    assert_eq!(query(&app).as_deref(), Some(""));
    assert_eq!(app.visible_library().len(), 2);
}

#[test]
fn search_filters_live() {
    let mut app = app();
    app.navigate(ViewMode::Library);
    type_text(&mut app, "xyz");
    assert!(app.visible_library().is_empty());
    for _ in 0..3 {
        handle_key(&mut app, key(KeyCode::Backspace));
    }
    assert_eq!(app.visible_library().len(), 2);
}

#[test]
fn community_search_matches_subject() {
    let mut app = app();
    app.navigate(ViewMode::Community);
    type_text(&mut app, "HISTORY");
    let titles: Vec<_> = app
        .visible_community()
        .iter()
        .map(|d| d.title.clone())
        .collect();
    assert_eq!(titles, vec!["World History: WWI & WWII".to_string()]);
}

#[test]
fn typed_letters_do_not_navigate_on_list_screens() {
    let mut app = app();
    app.navigate(ViewMode::Library);
    type_text(&mut app, "cmq");
    assert_eq!(app.mode(), ViewMode::Library);
    assert!(!app.should_quit());
    assert_eq!(query(&app).as_deref(), Some("cmq"));
}

#[test]
fn home_shortcuts_navigate() {
    let mut app = app();
    handle_key(&mut app, press('m'));
    assert_eq!(app.mode(), ViewMode::Community);
    app.navigate(ViewMode::Home);
    handle_key(&mut app, press('3'));
    assert_eq!(app.mode(), ViewMode::Library);
    app.navigate(ViewMode::Home);
    handle_key(&mut app, press('q'));
    assert!(app.should_quit());
}

#[test]
fn tab_cycles_views() {
    let mut app = app();
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.mode(), ViewMode::Create);
    handle_key(&mut app, key(KeyCode::BackTab));
    handle_key(&mut app, key(KeyCode::BackTab));
    assert_eq!(app.mode(), ViewMode::Community);
}

#[test]
fn esc_clears_query_before_leaving() {
    let mut app = app();
    app.navigate(ViewMode::Library);
    type_text(&mut app, "bio");
    handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(app.mode(), ViewMode::Library);
    assert_eq!(query(&app).as_deref(), Some(""));
    handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(app.mode(), ViewMode::Home);
}

#[test]
fn ctrl_q_quits_anywhere() {
    for mode in ViewMode::ALL {
        let mut app = app();
        app.navigate(mode);
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit(), "Ctrl+Q ignored on {:?}", mode);
    }
}

#[test]
fn ctrl_n_in_library_opens_create() {
    let mut app = app();
    app.navigate(ViewMode::Library);
    handle_key(&mut app, ctrl('n'));
    assert_eq!(app.mode(), ViewMode::Create);
}

#[test]
fn import_adds_deck_and_switches_to_library() {
    let mut app = app();
    app.navigate(ViewMode::Community);
    type_text(&mut app, "python");
    handle_key(&mut app, key(KeyCode::Enter));

    assert_eq!(app.mode(), ViewMode::Library);
    assert_eq!(query(&app).as_deref(), Some(""));
    let deck = app.library().get("community-3").expect("imported deck");
    assert_eq!(deck.name, "Python Programming Basics");
    assert_eq!(deck.card_count, 156);
    assert_eq!(app.status().map(|s| s.kind), Some(StatusKind::Info));
}

#[test]
fn duplicate_import_is_rejected_in_place() {
    let mut app = app();
    app.import_deck("1");
    app.navigate(ViewMode::Community);
    app.import_deck("1");
    assert_eq!(app.mode(), ViewMode::Community);
    assert_eq!(app.library().len(), 3);
    assert_eq!(app.status().map(|s| s.kind), Some(StatusKind::Error));
}

#[test]
fn import_unknown_deck_reports_error() {
    let mut app = app();
    app.navigate(ViewMode::Community);
    app.import_deck("99");
    assert_eq!(app.mode(), ViewMode::Community);
    assert_eq!(app.library().len(), 2);
    assert_eq!(app.status().map(|s| s.kind), Some(StatusKind::Error));
}

#[test]
fn study_marks_selected_deck() {
    let mut app = app();
    app.navigate(ViewMode::Library);
    handle_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.selected_library_id().as_deref(), Some("2"));

    let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
    app.start_study_on("2", date);
    assert_eq!(app.library().get("2").unwrap().last_studied, Some(date));
    assert_eq!(app.mode(), ViewMode::Library);
}

#[test]
fn selection_follows_filtered_list() {
    let mut app = app();
    app.navigate(ViewMode::Library);
    type_text(&mut app, "spanish");
    assert_eq!(app.selected_library_id().as_deref(), Some("2"));
}

#[test]
fn save_flashcards_appends_deck() {
    let mut app = app();
    app.navigate(ViewMode::Create);
    let cards = vec![
        Flashcard::new("mitochondria", "powerhouse", Difficulty::Easy),
        Flashcard::new("ribosome", "protein synthesis", Difficulty::Medium),
    ];
    app.save_flashcards(cards, "Organelles");

    assert_eq!(app.mode(), ViewMode::Library);
    let deck = app.library().decks().last().unwrap();
    assert_eq!(deck.name, "Organelles");
    assert_eq!(deck.card_count, 2);
    assert_eq!(app.library().cards(&deck.id).map(|c| c.len()), Some(2));
}

#[test]
fn create_form_end_to_end() {
    let mut app = app();
    app.navigate(ViewMode::Create);
    type_text(&mut app, "Capitals");
    handle_key(&mut app, key(KeyCode::Enter));
    type_text(&mut app, "France");
    handle_key(&mut app, key(KeyCode::Enter));
    type_text(&mut app, "Paris");
    handle_key(&mut app, key(KeyCode::Enter));

    match app.view() {
        ViewState::Create(form) => {
            assert_eq!(form.cards.len(), 1);
            assert_eq!(form.cards[0].front, "France");
            assert_eq!(form.cards[0].back, "Paris");
        }
        other => panic!("expected create view, got {:?}", other),
    }

    handle_key(&mut app, ctrl('s'));
    assert_eq!(app.mode(), ViewMode::Library);
    assert!(app
        .library()
        .decks()
        .iter()
        .any(|deck| deck.name == "Capitals" && deck.card_count == 1));
}

#[test]
fn save_without_cards_stays_on_create() {
    let mut app = app();
    app.navigate(ViewMode::Create);
    type_text(&mut app, "Empty");
    handle_key(&mut app, ctrl('s'));
    assert_eq!(app.mode(), ViewMode::Create);
    assert_eq!(app.status().map(|s| s.kind), Some(StatusKind::Error));
    assert_eq!(app.library().len(), 2);
}

#[test]
fn navigation_clears_status() {
    let mut app = app();
    app.import_deck("99");
    assert!(app.status().is_some());
    app.navigate(ViewMode::Library);
    assert!(app.status().is_none());
}

#[test]
fn empty_library_without_samples() {
    let mut config = Config::default();
    config.library.include_samples = false;
    let mut app = App::new(&config).unwrap();
    app.navigate(ViewMode::Library);
    assert!(app.library().is_empty());
    assert_eq!(app.selected_library_id(), None);
    handle_key(&mut app, key(KeyCode::Enter));
    assert!(app.status().is_none());
}
