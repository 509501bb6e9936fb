//! Strength result panel

use pwcheck_core::StrengthResult;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::wrap::wrap_text;
use crate::theme::{IconSet, ThemeStyles};

pub const SUGGESTION_HEADING: &str = "Suggestion";

/// Ticks during which a freshly arrived result is drawn dimmed
const REVEAL_TICKS: u64 = 3;

/// Rows above the suggestion box: icon, label, spacer
const SUMMARY_ROWS: u16 = 3;

/// Tier icon, tier label with emoji, and the server's suggestion
pub struct ResultPanel<'a> {
    result: &'a StrengthResult,
    styles: &'a ThemeStyles,
    icons: IconSet,
    ticks_since_shown: Option<u64>,
}

impl<'a> ResultPanel<'a> {
    pub fn new(result: &'a StrengthResult, styles: &'a ThemeStyles, icons: IconSet) -> Self {
        Self {
            result,
            styles,
            icons,
            ticks_since_shown: None,
        }
    }

    /// Ticks since this result replaced the previous one
    pub fn revealed(mut self, ticks_since_shown: Option<u64>) -> Self {
        self.ticks_since_shown = ticks_since_shown;
        self
    }

    /// Rows needed to show `result` at `width` columns
    pub fn height(result: &StrengthResult, width: u16) -> u16 {
        let text_rows = wrap_text(&result.suggestion, suggestion_width(width)).len();
        // Box border (2) plus the heading row
        (SUMMARY_ROWS + 3).saturating_add(u16::try_from(text_rows).unwrap_or(u16::MAX))
    }

    fn revealing(&self) -> bool {
        matches!(self.ticks_since_shown, Some(t) if t < REVEAL_TICKS)
    }
}

/// Text width inside the suggestion box (border plus one column padding per side)
fn suggestion_width(width: u16) -> u16 {
    width.saturating_sub(4)
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let score = self.result.score;
        let mut tier_style = self.styles.strength_bold(score);
        if self.revealing() {
            tier_style = tier_style.add_modifier(Modifier::DIM);
        }

        let summary = vec![
            Line::from(Span::styled(self.icons.strength(score), tier_style)),
            Line::from(vec![
                Span::styled(self.styles.strength_style(score).label, tier_style),
                Span::raw(" "),
                Span::raw(score.emoji()),
            ]),
        ];
        let summary_area = Rect {
            height: area.height.min(2),
            ..area
        };
        Paragraph::new(summary)
            .alignment(Alignment::Center)
            .render(summary_area, buf);

        if area.height <= SUMMARY_ROWS {
            return;
        }

        let box_area = Rect {
            y: area.y + SUMMARY_ROWS,
            height: area.height - SUMMARY_ROWS,
            ..area
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.styles.card.border))
            .style(Style::default().bg(self.styles.input.bg));
        let inner = block.inner(box_area);
        block.render(box_area, buf);

        if inner.width < 2 || inner.height == 0 {
            return;
        }

        let text_area = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };
        let mut lines = vec![Line::from(vec![
            Span::styled(self.icons.sparkles(), self.styles.accent_bold()),
            Span::raw(" "),
            Span::styled(SUGGESTION_HEADING, self.styles.accent_bold()),
        ])];
        lines.extend(
            wrap_text(&self.result.suggestion, text_area.width)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, self.styles.text_style()))),
        );
        Paragraph::new(lines).render(text_area, buf);
    }
}
