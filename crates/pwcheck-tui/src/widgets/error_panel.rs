//! Inline error panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::wrap::wrap_text;
use crate::theme::ThemeStyles;

/// Bordered panel holding a user-facing error message
pub struct ErrorPanel<'a> {
    message: &'a str,
    styles: &'a ThemeStyles,
}

impl<'a> ErrorPanel<'a> {
    pub fn new(message: &'a str, styles: &'a ThemeStyles) -> Self {
        Self { message, styles }
    }

    /// Rows needed to show the whole message at `width` columns
    pub fn height(message: &str, width: u16) -> u16 {
        let rows = wrap_text(message, width.saturating_sub(4)).len();
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
    }
}

impl Widget for ErrorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.styles.error));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 2 || inner.height == 0 {
            return;
        }

        let text_area = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };
        let lines: Vec<Line> = wrap_text(self.message, text_area.width)
            .into_iter()
            .map(Line::from)
            .collect();
        Paragraph::new(lines)
            .style(Style::default().fg(self.styles.error))
            .render(text_area, buf);
    }
}
