//! Main render/view function (View in TEA pattern)


use pwcheck_app::state::AppState;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{IconSet, ThemeStyles};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: the same state always draws the same frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let styles = ThemeStyles::for_theme(state.theme);
    let icons = IconSet::new(state.settings.ui.icons);

    // Pointer tint replaces the theme background once the pointer has moved.
    let base = state
        .pointer_color
        .map(|c| Color::Rgb(c.r, c.g, c.b))
        .unwrap_or(styles.background);

    if state.settings.background.enabled {
        let config = state.effect_config();
        frame.render_widget(
            widgets::DitherBackground::new(&config, base)
                .pointer(state.pointer)
                .tick(state.tick),
            area,
        );
    } else {
        frame.render_widget(Block::default().style(Style::default().bg(base)), area);
    }

    let card_width = layout::card_width(area.width).min(area.width);
    let content_width = layout::content_width(card_width);

    let error = state.request.error_message();
    let result = state.request.displayed_result();
    let error_height = error
        .map(|m| widgets::ErrorPanel::height(m, content_width))
        .unwrap_or(0);
    let result_height = result
        .map(|r| widgets::ResultPanel::height(r, content_width))
        .unwrap_or(0);

    let areas = layout::create(area, layout::content_height(error_height, result_height));

    let card = styles.card_block();
    let inner = card.inner(areas.card);
    frame.render_widget(card, areas.card);

    let sections = layout::card_sections(inner, error_height, result_height);

    frame.render_widget(widgets::Header::new(styles, icons), sections.header);
    frame.render_widget(
        widgets::PasswordField::new(&state.password, state.password_visible, styles, icons),
        sections.input,
    );
    frame.render_widget(
        widgets::SubmitButton::new(styles, icons).loading(state.is_loading(), state.tick),
        sections.button,
    );

    if let (Some(message), Some(error_area)) = (error, sections.error) {
        frame.render_widget(widgets::ErrorPanel::new(message, styles), error_area);
    }

    if let (Some(result), Some(result_area)) = (result, sections.result) {
        frame.render_widget(
            widgets::ResultPanel::new(result, styles, icons).revealed(state.ticks_since_result()),
            result_area,
        );
    }

    frame.render_widget(widgets::KeyHints::new(styles), areas.hints);
}
