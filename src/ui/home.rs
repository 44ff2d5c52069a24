use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT};

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "c",
        "AI-Assisted Creation",
        "Upload course materials and let AI generate customized flashcards automatically.",
    ),
    (
        "l",
        "Personal Library",
        "Organize flashcard sets, track progress, and study with spaced repetition.",
    ),
    (
        "m",
        "Community Library",
        "Discover and share flashcard decks with students worldwide.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "1. Upload Materials",
        "Upload lecture notes, PDFs, or study materials in various formats.",
    ),
    (
        "2. AI Processing",
        "AI analyzes content and automatically generates targeted flashcards.",
    ),
    (
        "3. Study & Share",
        "Review flashcards, track progress, and share with the community.",
    ),
];

pub fn render_home(frame: &mut Frame, area: Rect) {
    let heading = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let title = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(MUTED_TEXT);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("AI Study Companion", heading)),
        Line::from(Span::styled(
            "Smart flashcard generation from course materials",
            muted,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Transform your lecture notes, PDFs, and course materials into personalized flashcards.",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
    ];

    for (key, name, blurb) in FEATURES {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", key), Style::default().fg(ACCENT)),
            Span::styled(name, title),
        ]));
        lines.push(Line::from(Span::styled(blurb, muted)));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("How It Works", heading)));
    for (step, blurb) in STEPS {
        lines.push(Line::from(vec![
            Span::styled(step, title),
            Span::styled(format!("  {}", blurb), muted),
        ]));
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, centered_rect(90, 100, area));
}
