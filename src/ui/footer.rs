use crate::ui::app::{StatusKind, StatusMessage};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::view::ViewMode;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    mode: ViewMode,
    status: Option<&'a StatusMessage>,
}

impl<'a> Footer<'a> {
    pub fn new(mode: ViewMode, status: Option<&'a StatusMessage>) -> Self {
        Self { mode, status }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = hints_for(self.mode);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        if let Some(status) = self.status {
            let color = match status.kind {
                StatusKind::Info => STATUS_OK,
                StatusKind::Error => STATUS_ERROR,
            };
            block = block.title(Span::styled(
                format!(" {} ", status.text),
                Style::default().fg(color),
            ));
        }

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(block)
    }
}

pub fn hints_for(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Home => " 1-4/h/c/l/m: Go │ F1-F4/Tab: Switch │ q: Quit",
        ViewMode::Create => {
            " ↑/↓: Field │ Enter: Add card │ Ctrl+D: Difficulty │ Ctrl+Z: Undo card │ Ctrl+S: Save │ Ctrl+Q: Quit"
        }
        ViewMode::Library => {
            " Type: Search │ ↑/↓: Select │ Enter: Study │ Ctrl+N: New deck │ Tab: Switch │ Ctrl+Q: Quit"
        }
        ViewMode::Community => {
            " Type: Search │ ↑/↓: Select │ Enter: Import │ Ctrl+U: Clear │ Tab: Switch │ Ctrl+Q: Quit"
        }
    }
}
