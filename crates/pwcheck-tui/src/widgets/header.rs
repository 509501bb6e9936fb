//! Title row with the theme toggle indicator

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{IconSet, ThemeStyles};

pub const TITLE: &str = "Password Strength Checker";

/// Card title: shield icon, app name, and the sun/moon theme indicator
pub struct Header<'a> {
    styles: &'a ThemeStyles,
    icons: IconSet,
}

impl<'a> Header<'a> {
    pub fn new(styles: &'a ThemeStyles, icons: IconSet) -> Self {
        Self { styles, icons }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(self.icons.shield(), self.styles.title()),
            Span::raw(" "),
            Span::styled(TITLE, self.styles.title()),
        ]);

        let toggle = Line::from(vec![Span::styled(
            format!(" {} ", self.icons.theme_toggle(self.styles.kind)),
            Style::default()
                .fg(self.styles.button.fg)
                .bg(self.styles.button.bg),
        )]);

        let row = Rect { height: 1, ..area };
        let toggle_width = toggle.width() as u16;
        let title_width = title.width() as u16;

        // Indicator stays on the right; drop it first when space runs out.
        if title_width + 1 + toggle_width <= row.width {
            Paragraph::new(title).render(row, buf);
            let toggle_area = Rect {
                x: row.x + row.width - toggle_width,
                width: toggle_width,
                ..row
            };
            Paragraph::new(toggle).render(toggle_area, buf);
        } else {
            Paragraph::new(title).render(row, buf);
        }
    }
}
