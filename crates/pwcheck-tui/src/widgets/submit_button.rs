//! "Check Password" button

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::theme::{IconSet, ThemeStyles};

pub const LABEL: &str = "Check Password";
pub const BUSY_LABEL: &str = "Checking...";

/// Braille spinner, one frame per tick
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[(tick % SPINNER.len() as u64) as usize]
}

/// Submit control; shows a spinner instead of the label while checking
pub struct SubmitButton<'a> {
    styles: &'a ThemeStyles,
    icons: IconSet,
    loading: bool,
    tick: u64,
}

impl<'a> SubmitButton<'a> {
    pub fn new(styles: &'a ThemeStyles, icons: IconSet) -> Self {
        Self {
            styles,
            icons,
            loading: false,
            tick: 0,
        }
    }

    pub fn loading(mut self, loading: bool, tick: u64) -> Self {
        self.loading = loading;
        self.tick = tick;
        self
    }
}

impl Widget for SubmitButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let bg = if self.loading {
            self.styles.button.busy_bg
        } else {
            self.styles.button.bg
        };
        let style = Style::default().fg(self.styles.button.fg).bg(bg);
        Block::default().style(style).render(area, buf);

        let line = if self.loading {
            Line::from(vec![
                Span::styled(spinner_frame(self.tick), style),
                Span::styled(" ", style),
                Span::styled(BUSY_LABEL, style),
            ])
        } else {
            Line::from(vec![
                Span::styled(self.icons.shield(), style),
                Span::styled(" ", style),
                Span::styled(LABEL, style.add_modifier(Modifier::BOLD)),
            ])
        };

        let middle = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(middle, buf);
    }
}
