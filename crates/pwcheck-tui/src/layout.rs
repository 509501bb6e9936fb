//! Screen layout definitions for the TUI
//!
//! The screen is a centered card over the full-screen background, with a
//! one-line key hint footer at the bottom. The card grows to fit the error
//! and result panels that are currently shown.

use ratatui::layout::{Constraint, Layout, Rect};

/// Widest the card gets, in columns
pub const CARD_MAX_WIDTH: u16 = 60;

/// Title row plus a spacer
const HEADER_HEIGHT: u16 = 2;
const INPUT_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;
const GAP: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Bordered card holding every control
    pub card: Rect,

    /// Key hint footer
    pub hints: Rect,
}

/// Areas inside the card
#[derive(Debug, Clone, Copy)]
pub struct CardSections {
    pub header: Rect,
    pub input: Rect,
    pub button: Rect,
    pub error: Option<Rect>,
    pub result: Option<Rect>,
}

/// Width of the card for a screen `width` columns wide
pub fn card_width(width: u16) -> u16 {
    width.saturating_sub(4).clamp(width.min(20), CARD_MAX_WIDTH)
}

/// Width available to the card's content (inside borders and padding)
pub fn content_width(card_width: u16) -> u16 {
    card_width.saturating_sub(4)
}

/// Rows the card content needs; 0 means the panel is absent
pub fn content_height(error_height: u16, result_height: u16) -> u16 {
    let mut height = HEADER_HEIGHT + INPUT_HEIGHT + GAP + BUTTON_HEIGHT;
    if error_height > 0 {
        height = height.saturating_add(GAP).saturating_add(error_height);
    }
    if result_height > 0 {
        height = height.saturating_add(GAP).saturating_add(result_height);
    }
    height
}

/// Place the card and footer on the screen
pub fn create(area: Rect, content_height: u16) -> ScreenAreas {
    let [body, hints] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let width = card_width(area.width).min(body.width);
    // Borders (2) plus one row of padding top and bottom.
    let height = content_height.saturating_add(4).min(body.height);

    let card = Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y + (body.height - height) / 2,
        width,
        height,
    };

    ScreenAreas { card, hints }
}

/// Split the card interior into sections
///
/// `inner` is the area inside the card's border. Sections that do not fit are
/// clipped from the bottom.
pub fn card_sections(inner: Rect, error_height: u16, result_height: u16) -> CardSections {
    let padded = Rect {
        x: inner.x + 1,
        y: inner.y + 1,
        width: inner.width.saturating_sub(2),
        height: inner.height.saturating_sub(2),
    };

    let mut constraints = vec![
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(GAP),
        Constraint::Length(BUTTON_HEIGHT),
    ];
    if error_height > 0 {
        constraints.push(Constraint::Length(GAP));
        constraints.push(Constraint::Length(error_height));
    }
    if result_height > 0 {
        constraints.push(Constraint::Length(GAP));
        constraints.push(Constraint::Length(result_height));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::vertical(constraints).split(padded);

    let mut next = 4;
    let error = if error_height > 0 {
        next += 2;
        Some(chunks[next - 1])
    } else {
        None
    };
    let result = if result_height > 0 {
        next += 2;
        Some(chunks[next - 1])
    } else {
        None
    };

    CardSections {
        header: chunks[0],
        input: chunks[1],
        button: chunks[3],
        error,
        result,
    }
}
