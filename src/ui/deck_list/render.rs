use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::deck::{filter_decks, CommunityDeck, DeckLibrary, FlashcardDeck};
use crate::ui::deck_list::state::DeckListState;
use crate::ui::layout::list_regions;
use crate::ui::theme::{
    subject_color, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, RATING_STAR,
};

const LIBRARY_ENTRY_HEIGHT: u16 = 4;
const COMMUNITY_ENTRY_HEIGHT: u16 = 5;

pub fn render_library(frame: &mut Frame, area: Rect, state: &DeckListState, library: &DeckLibrary) {
    let (title, search, list) = list_regions(area);
    render_title(
        frame,
        title,
        "My Flashcard Library",
        "Manage and study your collections  ·  Ctrl+N: Create New Deck",
    );
    render_search_box(frame, search, &state.query, "Search decks...");

    if library.is_empty() {
        render_empty(
            frame,
            list,
            "No flashcard decks yet",
            "Create your first deck to get started (Ctrl+N)",
        );
        return;
    }

    let decks = filter_decks(&state.query, library.decks());
    if decks.is_empty() {
        render_empty(frame, list, "No decks found", "Try adjusting your search terms");
        return;
    }

    let selected = state.selected_in(decks.len());
    let entries: Vec<Vec<Line>> = decks.iter().map(|deck| library_entry(deck)).collect();
    render_entries(frame, list, entries, selected, LIBRARY_ENTRY_HEIGHT);
}

pub fn render_community(
    frame: &mut Frame,
    area: Rect,
    state: &DeckListState,
    decks: &[CommunityDeck],
) {
    let (title, search, list) = list_regions(area);
    render_title(
        frame,
        title,
        "Community Library",
        "Discover flashcards from other students  ·  Enter: Import Deck",
    );
    render_search_box(frame, search, &state.query, "Search community decks...");

    let decks = filter_decks(&state.query, decks);
    if decks.is_empty() {
        render_empty(frame, list, "No decks found", "Try different search terms");
        return;
    }

    let selected = state.selected_in(decks.len());
    let entries: Vec<Vec<Line>> = decks.iter().map(|deck| community_entry(deck)).collect();
    render_entries(frame, list, entries, selected, COMMUNITY_ENTRY_HEIGHT);
}

/// `2840` -> `"2,840"`.
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn render_title(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", subtitle),
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_search_box(frame: &mut Frame, area: Rect, query: &str, placeholder: &str) {
    let content = if query.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(query.to_string(), Style::default().fg(HEADER_TEXT))
    };
    let line = Line::from(vec![Span::raw(" "), content]);
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_empty(frame: &mut Frame, area: Rect, headline: &str, hint: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hint.to_string(), Style::default().fg(MUTED_TEXT))),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
        area,
    );
}

fn render_entries(
    frame: &mut Frame,
    area: Rect,
    entries: Vec<Vec<Line<'static>>>,
    selected: Option<usize>,
    entry_height: u16,
) {
    let per_page = usize::from((area.height / entry_height).max(1));
    let offset = selected
        .map(|idx| idx.saturating_sub(per_page - 1))
        .unwrap_or(0);

    let mut lines = Vec::new();
    for (idx, entry) in entries.into_iter().enumerate().skip(offset) {
        let highlight = Some(idx) == selected;
        for (row, line) in entry.into_iter().enumerate() {
            let line = if row == 0 {
                let marker = if highlight { "▶ " } else { "  " };
                let mut spans = vec![Span::styled(marker, Style::default().fg(ACCENT))];
                spans.extend(line.spans);
                Line::from(spans)
            } else {
                line
            };
            lines.push(if highlight {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            });
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn library_entry(deck: &FlashcardDeck) -> Vec<Line<'static>> {
    let last_studied = deck
        .last_studied
        .map(|date| date.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| "Never".to_string());
    vec![
        Line::from(Span::styled(
            deck.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("    {}", deck.description),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(vec![
            Span::styled("    Cards: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(deck.card_count.to_string(), Style::default().fg(HEADER_TEXT)),
            Span::styled("   Last Studied: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(last_studied, Style::default().fg(HEADER_TEXT)),
        ]),
    ]
}

fn community_entry(deck: &CommunityDeck) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            deck.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("    {}", deck.description),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(vec![
            Span::styled(
                format!("    by {}  ", deck.author),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(
                format!(" {} ", deck.subject.label()),
                Style::default()
                    .fg(Color::White)
                    .bg(subject_color(&deck.subject)),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("    {} cards", deck.card_count),
                Style::default().fg(HEADER_TEXT),
            ),
            Span::styled(
                format!("   {} downloads   ", format_thousands(deck.downloads)),
                Style::default().fg(HEADER_TEXT),
            ),
            Span::styled("★ ", Style::default().fg(RATING_STAR)),
            Span::styled(deck.rating.to_string(), Style::default().fg(HEADER_TEXT)),
        ]),
    ]
}
