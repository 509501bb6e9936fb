//! Key hint footer

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::ThemeStyles;

const HINTS: &[(&str, &str)] = &[
    ("Enter", "check"),
    ("F2", "show/hide"),
    ("F3", "theme"),
    ("^U", "clear"),
    ("Esc", "quit"),
];

/// One-line footer listing the key bindings
pub struct KeyHints<'a> {
    styles: &'a ThemeStyles,
}

impl<'a> KeyHints<'a> {
    pub fn new(styles: &'a ThemeStyles) -> Self {
        Self { styles }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let key_style = self.styles.accent_bold();
        let label_style = Style::default().fg(self.styles.text);

        let mut spans = Vec::with_capacity(HINTS.len() * 4);
        for (i, (key, label)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", label_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(" ", label_style));
            spans.push(Span::styled(*label, label_style));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(Rect { height: 1, ..area }, buf);
    }
}
