use ratatui::style::Color;

use crate::deck::Subject;

pub const ACCENT: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const RATING_STAR: Color = Color::Rgb(0xea, 0xb3, 0x08);

/// Badge color for a community deck subject.
pub fn subject_color(subject: &Subject) -> Color {
    match subject {
        Subject::Chemistry => Color::Rgb(0x7e, 0x22, 0xce),
        Subject::History => Color::Rgb(0xb4, 0x53, 0x09),
        Subject::ComputerScience => Color::Rgb(0x1d, 0x4e, 0xd8),
        Subject::Other(_) => Color::Rgb(0x37, 0x41, 0x51),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_subjects_have_distinct_colors() {
        let colors = [
            subject_color(&Subject::Chemistry),
            subject_color(&Subject::History),
            subject_color(&Subject::ComputerScience),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn other_subjects_share_fallback() {
        assert_eq!(
            subject_color(&Subject::Other("Art".into())),
            subject_color(&Subject::Other("Music".into()))
        );
    }
}
