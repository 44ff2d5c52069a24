use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::deck::Difficulty;
use crate::ui::create::state::{CreateField, CreateFormState};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};

pub fn render_create(frame: &mut Frame, area: Rect, state: &CreateFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let title = vec![
        Line::from(Span::styled(
            " Create Flashcards",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Document upload and AI generation are coming soon. Add cards by hand for now.",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    frame.render_widget(Paragraph::new(title), chunks[0]);

    render_field(frame, chunks[1], "Deck name", &state.deck_name, state.focus == CreateField::DeckName);
    render_field(frame, chunks[2], "Front", &state.front, state.focus == CreateField::Front);
    render_field(frame, chunks[3], "Back", &state.back, state.focus == CreateField::Back);

    let difficulty = Line::from(vec![
        Span::styled(" Difficulty: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            state.difficulty.label(),
            Style::default()
                .fg(difficulty_color(state.difficulty))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (Ctrl+D to change)", Style::default().fg(MUTED_TEXT)),
    ]);
    frame.render_widget(Paragraph::new(difficulty), chunks[4]);

    let mut lines = vec![Line::from(Span::styled(
        format!(" Cards ({})", state.cards.len()),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))];
    if state.cards.is_empty() {
        lines.push(Line::from(Span::styled(
            " No cards yet. Fill in front and back, then press Enter.",
            Style::default().fg(MUTED_TEXT),
        )));
    }
    for (idx, card) in state.cards.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:>2}. ", idx + 1), Style::default().fg(MUTED_TEXT)),
            Span::styled(card.front.clone(), Style::default().fg(HEADER_TEXT)),
            Span::styled(" → ", Style::default().fg(MUTED_TEXT)),
            Span::styled(card.back.clone(), Style::default().fg(HEADER_TEXT)),
            Span::styled(
                format!("  [{}]", card.difficulty.label()),
                Style::default().fg(difficulty_color(card.difficulty)),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), chunks[5]);
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
    }
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn difficulty_color(difficulty: Difficulty) -> ratatui::style::Color {
    match difficulty {
        Difficulty::Easy => STATUS_OK,
        Difficulty::Medium => HEADER_TEXT,
        Difficulty::Hard => STATUS_ERROR,
    }
}
