//! Password field widget

use pwcheck_app::state::PasswordInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::{IconSet, ThemeStyles};

pub const PLACEHOLDER: &str = "Enter your password";
pub const MASK_CHAR: char = '\u{2022}'; // •

/// Bordered input showing the password masked or in plaintext
pub struct PasswordField<'a> {
    password: &'a PasswordInput,
    visible: bool,
    styles: &'a ThemeStyles,
    icons: IconSet,
}

impl<'a> PasswordField<'a> {
    pub fn new(
        password: &'a PasswordInput,
        visible: bool,
        styles: &'a ThemeStyles,
        icons: IconSet,
    ) -> Self {
        Self {
            password,
            visible,
            styles,
            icons,
        }
    }

    /// Text as it should appear, before width truncation
    fn display_text(&self) -> String {
        if self.visible {
            self.password.as_str().to_string()
        } else {
            MASK_CHAR.to_string().repeat(self.password.char_count())
        }
    }
}

impl Widget for PasswordField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.styles.input_block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let row = Rect { height: 1, ..inner };
        let icon = self.icons.visibility(self.visible);
        // " " + text + cursor ... icon + " "
        let text_width = row.width.saturating_sub(4);

        let mut spans = vec![Span::raw(" ")];
        if self.password.is_empty() {
            spans.push(Span::styled(
                tail_fitting(PLACEHOLDER, text_width),
                Style::default()
                    .fg(self.styles.input.placeholder)
                    .add_modifier(Modifier::ITALIC),
            ));
        } else {
            let text = self.display_text();
            spans.push(Span::styled(
                tail_fitting(&text, text_width.saturating_sub(1)),
                Style::default().fg(self.styles.input.fg),
            ));
            spans.push(Span::styled("_", Style::default().fg(self.styles.input.fg)));
        }
        Paragraph::new(Line::from(spans)).render(row, buf);

        if row.width >= 3 {
            let icon_area = Rect {
                x: row.x + row.width - 2,
                width: 1,
                ..row
            };
            Paragraph::new(Span::styled(icon, self.styles.text_style())).render(icon_area, buf);
        }
    }
}

/// Longest suffix of `text` that fits in `width` columns
fn tail_fitting(text: &str, width: u16) -> String {
    let width = width as usize;
    let mut used = 0usize;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    text[start..].to_string()
}
