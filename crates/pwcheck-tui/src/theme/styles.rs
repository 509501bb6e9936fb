//! Per-theme style table.
//!
//! `ThemeStyles::for_theme` is a pure lookup into a static table with one
//! record per theme. Widgets take the whole record, so switching themes swaps
//! every color at once.

use pwcheck_core::{StrengthScore, ThemeKind};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

/// Color and label for one strength tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthStyle {
    pub color: Color,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardColors {
    pub bg: Color,
    pub border: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub placeholder: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColors {
    pub bg: Color,
    pub fg: Color,
    /// Background while a check is in flight
    pub busy_bg: Color,
}

/// Complete style record for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyles {
    pub kind: ThemeKind,
    /// Page background under the card (overridden by the pointer tint)
    pub background: Color,
    pub card: CardColors,
    /// Primary text color (title, suggestion text)
    pub text: Color,
    /// Secondary highlight (suggestion heading, key hints)
    pub accent: Color,
    pub input: InputColors,
    pub button: ButtonColors,
    /// Error panel color
    pub error: Color,
    /// Indexed by `StrengthScore::index()`
    pub strength: [StrengthStyle; 3],
}

const CYBERPUNK: ThemeStyles = ThemeStyles {
    kind: ThemeKind::Cyberpunk,
    background: palette::BLACK,
    card: CardColors {
        bg: palette::GRAY_900,
        border: palette::PINK_800,
    },
    text: palette::PINK_500,
    accent: palette::YELLOW_400,
    input: InputColors {
        bg: palette::GRAY_800,
        fg: palette::PINK_500,
        border: palette::PINK_500,
        placeholder: palette::GRAY_500,
    },
    button: ButtonColors {
        bg: palette::PINK_600,
        fg: palette::WHITE,
        busy_bg: palette::PINK_800,
    },
    error: palette::RED_500,
    strength: [
        StrengthStyle {
            color: palette::RED_500,
            label: "Weak",
        },
        StrengthStyle {
            color: palette::YELLOW_500,
            label: "Medium",
        },
        StrengthStyle {
            color: palette::EMERALD_500,
            label: "Strong",
        },
    ],
};

const PASTEL: ThemeStyles = ThemeStyles {
    kind: ThemeKind::Pastel,
    background: palette::PURPLE_100,
    card: CardColors {
        bg: palette::SOFT_WHITE,
        border: palette::PURPLE_200,
    },
    text: palette::PURPLE_600,
    accent: palette::BLUE_500,
    input: InputColors {
        bg: palette::WHITE,
        fg: palette::PURPLE_700,
        border: palette::PURPLE_400,
        placeholder: palette::GRAY_400,
    },
    button: ButtonColors {
        bg: palette::PURPLE_400,
        fg: palette::WHITE,
        busy_bg: palette::PURPLE_600,
    },
    error: palette::RED_500,
    strength: [
        StrengthStyle {
            color: palette::RED_500,
            label: "Weak",
        },
        StrengthStyle {
            color: palette::YELLOW_600,
            label: "Medium",
        },
        StrengthStyle {
            color: palette::EMERALD_600,
            label: "Strong",
        },
    ],
};

impl ThemeStyles {
    /// Style record for `theme`
    pub fn for_theme(theme: ThemeKind) -> &'static ThemeStyles {
        match theme {
            ThemeKind::Cyberpunk => &CYBERPUNK,
            ThemeKind::Pastel => &PASTEL,
        }
    }

    pub fn strength_style(&self, score: StrengthScore) -> StrengthStyle {
        self.strength[score.index()]
    }

    // --- Style builders ---

    pub fn card_block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.card.border))
            .style(Style::default().bg(self.card.bg))
    }

    pub fn input_block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.input.border))
            .style(Style::default().bg(self.input.bg))
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn accent_bold(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.input.placeholder)
    }

    pub fn strength_bold(&self, score: StrengthScore) -> Style {
        Style::default()
            .fg(self.strength_style(score).color)
            .add_modifier(Modifier::BOLD)
    }
}
