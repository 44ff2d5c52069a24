use study_companion::ui::deck_list::DeckListState;
use study_companion::ui::mvi::Reducer;
use study_companion::ui::view::{NavigationIntent, NavigationReducer, ViewMode, ViewState};

fn library_with_query(query: &str) -> ViewState {
    ViewState::Library(DeckListState {
        query: query.to_string(),
        selected: 1,
    })
}

#[test]
fn initial_state_is_home() {
    assert_eq!(ViewState::default().mode(), ViewMode::Home);
}

#[test]
fn every_mode_reaches_every_other_mode() {
    for from in ViewMode::ALL {
        for to in ViewMode::ALL {
            let state =
                NavigationReducer::reduce(ViewState::enter(from), NavigationIntent::Navigate(to));
            assert_eq!(state.mode(), to);
        }
    }
}

#[test]
fn leaving_library_discards_search() {
    let state = library_with_query("bio");
    let state = NavigationReducer::reduce(state, NavigationIntent::Navigate(ViewMode::Create));
    let state = NavigationReducer::reduce(state, NavigationIntent::Navigate(ViewMode::Library));
    assert_eq!(state, ViewState::Library(DeckListState::default()));
}

#[test]
fn reselecting_active_view_keeps_state() {
    let state = library_with_query("bio");
    let state = NavigationReducer::reduce(state, NavigationIntent::Navigate(ViewMode::Library));
    assert_eq!(state, library_with_query("bio"));
}

#[test]
fn next_walks_header_order() {
    let mut state = ViewState::Home;
    let mut seen = Vec::new();
    for _ in 0..4 {
        state = NavigationReducer::reduce(state, NavigationIntent::Next);
        seen.push(state.mode());
    }
    assert_eq!(
        seen,
        vec![
            ViewMode::Create,
            ViewMode::Library,
            ViewMode::Community,
            ViewMode::Home
        ]
    );
}

#[test]
fn previous_from_home_wraps_to_community() {
    let state = NavigationReducer::reduce(ViewState::Home, NavigationIntent::Previous);
    assert_eq!(state, ViewState::Community(DeckListState::default()));
}

#[test]
fn library_and_community_do_not_share_search() {
    let state = library_with_query("chem");
    let state = NavigationReducer::reduce(state, NavigationIntent::Navigate(ViewMode::Community));
    assert_eq!(state.deck_list().map(|l| l.query.as_str()), Some(""));
}
