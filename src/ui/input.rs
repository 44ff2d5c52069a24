use crate::ui::app::App;
use crate::ui::create::CreateIntent;
use crate::ui::deck_list::DeckListIntent;
use crate::ui::view::{NavigationIntent, ViewMode, ViewState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Navigation keys work on every screen.
    match key.code {
        KeyCode::F(n) => {
            if let Some(mode) = ViewMode::from_position(usize::from(n)) {
                app.navigate(mode);
            }
            return;
        }
        KeyCode::Tab => {
            app.dispatch_navigation(NavigationIntent::Next);
            return;
        }
        KeyCode::BackTab => {
            app.dispatch_navigation(NavigationIntent::Previous);
            return;
        }
        _ => {}
    }

    match app.mode() {
        ViewMode::Home => handle_home_key(app, key),
        ViewMode::Create => handle_create_key(app, key),
        ViewMode::Library => handle_list_key(app, key, ListScreen::Library),
        ViewMode::Community => handle_list_key(app, key, ListScreen::Community),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    let KeyCode::Char(ch) = key.code else {
        if key.code == KeyCode::Esc {
            app.request_quit();
        }
        return;
    };
    match ch {
        'q' => app.request_quit(),
        'h' => app.navigate(ViewMode::Home),
        'c' => app.navigate(ViewMode::Create),
        'l' => app.navigate(ViewMode::Library),
        'm' => app.navigate(ViewMode::Community),
        digit => {
            let mode = digit
                .to_digit(10)
                .and_then(|n| ViewMode::from_position(n as usize));
            if let Some(mode) = mode {
                app.navigate(mode);
            }
        }
    }
}

fn handle_create_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.save_form();
        return;
    }
    if is_ctrl_char(key, 'd') {
        app.dispatch_create(CreateIntent::CycleDifficulty);
        return;
    }
    if is_ctrl_char(key, 'z') {
        app.dispatch_create(CreateIntent::RemoveLastCard);
        return;
    }

    match key.code {
        KeyCode::Esc => app.navigate(ViewMode::Home),
        KeyCode::Up => app.dispatch_create(CreateIntent::FocusPrevious),
        KeyCode::Down => app.dispatch_create(CreateIntent::FocusNext),
        KeyCode::Backspace => app.dispatch_create(CreateIntent::Backspace),
        KeyCode::Enter => {
            let ready = matches!(app.view(), ViewState::Create(form) if form.can_add_card());
            if ready {
                let id = uuid::Uuid::new_v4().to_string();
                app.dispatch_create(CreateIntent::AddCard { id });
            } else {
                app.dispatch_create(CreateIntent::FocusNext);
            }
        }
        KeyCode::Char(ch) if is_plain(key) => app.dispatch_create(CreateIntent::Insert(ch)),
        _ => {}
    }
}

#[derive(Clone, Copy)]
enum ListScreen {
    Library,
    Community,
}

fn handle_list_key(app: &mut App, key: KeyEvent, screen: ListScreen) {
    if is_ctrl_char(key, 'u') {
        app.dispatch_deck_list(DeckListIntent::Clear);
        return;
    }
    if matches!(screen, ListScreen::Library) && is_ctrl_char(key, 'n') {
        app.navigate(ViewMode::Create);
        return;
    }

    let visible = app.visible_count();
    match key.code {
        KeyCode::Esc => {
            let has_query = app
                .view()
                .deck_list()
                .is_some_and(|list| !list.query.is_empty());
            if has_query {
                app.dispatch_deck_list(DeckListIntent::Clear);
            } else {
                app.navigate(ViewMode::Home);
            }
        }
        KeyCode::Up => app.dispatch_deck_list(DeckListIntent::SelectPrevious { visible }),
        KeyCode::Down => app.dispatch_deck_list(DeckListIntent::SelectNext { visible }),
        KeyCode::Backspace => app.dispatch_deck_list(DeckListIntent::Backspace),
        KeyCode::Enter => match screen {
            ListScreen::Library => app.study_selected(),
            ListScreen::Community => app.import_selected(),
        },
        KeyCode::Char(ch) if is_plain(key) => app.dispatch_deck_list(DeckListIntent::Insert(ch)),
        _ => {}
    }
}

/// No modifiers other than Shift.
fn is_plain(key: KeyEvent) -> bool {
    !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
