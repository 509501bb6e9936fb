//! Main update function - handles state transitions (TEA pattern)

use pwcheck_client::EMPTY_PASSWORD_MESSAGE;
use pwcheck_core::{PointerColor, PointerPosition, RequestId, RequestState, StrengthResult};
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Shown for every transport, status or decoding failure
pub const CHECK_FAILED_MESSAGE: &str = "Failed to check password. Please try again.";

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick = state.tick.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Password Field
        // ─────────────────────────────────────────────────────────
        Message::InputChar(c) => {
            state.password.push(c);
            UpdateResult::none()
        }

        Message::InputBackspace => {
            state.password.pop();
            UpdateResult::none()
        }

        Message::ClearInput => {
            state.password.clear();
            UpdateResult::none()
        }

        Message::SetPassword(text) => {
            state.password.set(text);
            UpdateResult::none()
        }

        Message::ToggleVisibility => {
            state.password_visible = !state.password_visible;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scoring
        // ─────────────────────────────────────────────────────────
        Message::Submit => handle_submit(state),

        Message::StrengthReceived { request_id, result } => {
            handle_strength_received(state, request_id, result)
        }

        Message::StrengthCheckFailed { request_id, error } => {
            handle_strength_check_failed(state, request_id, &error)
        }

        // ─────────────────────────────────────────────────────────
        // Presentation
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            state.theme = state.theme.toggle();
            debug!("Theme switched to {}", state.theme);
            UpdateResult::none()
        }

        Message::PointerMoved {
            column,
            row,
            width,
            height,
        } => {
            let position = PointerPosition::from_cell(column, row, width, height);
            state.pointer = Some(position);
            if state.settings.background.pointer_tint {
                state.pointer_color = Some(PointerColor::from_position(position));
            }
            UpdateResult::none()
        }
    }
}

fn handle_submit(state: &mut AppState) -> UpdateResult {
    let previous = std::mem::take(&mut state.request).into_displayed_result();

    // An empty submit still supersedes whatever is in flight.
    let request_id = state.issue_request_id();

    if state.password.is_empty() {
        debug!("Submit with empty password, request {} not sent", request_id);
        state.request = RequestState::Failed {
            message: EMPTY_PASSWORD_MESSAGE.to_string(),
            previous,
        };
        return UpdateResult::none();
    }

    info!("Checking password strength (request {})", request_id);
    state.request = RequestState::Checking {
        request_id,
        previous,
    };
    UpdateResult::action(UpdateAction::CheckStrength {
        request_id,
        password: state.password.clone(),
    })
}

fn handle_strength_received(
    state: &mut AppState,
    request_id: RequestId,
    result: StrengthResult,
) -> UpdateResult {
    if !state.is_latest_request(request_id) {
        debug!(
            "Discarding stale result for request {} (latest is {})",
            request_id, state.last_request_id
        );
        return UpdateResult::none();
    }

    info!("Request {} scored {}", request_id, result.score);
    if state.request.displayed_result() != Some(&result) {
        state.result_shown_at = Some(state.tick);
    }
    state.request = RequestState::Succeeded(result);
    UpdateResult::none()
}

fn handle_strength_check_failed(
    state: &mut AppState,
    request_id: RequestId,
    error: &str,
) -> UpdateResult {
    if !state.is_latest_request(request_id) {
        debug!(
            "Discarding stale failure for request {}: {}",
            request_id, error
        );
        return UpdateResult::none();
    }

    warn!("Request {} failed: {}", request_id, error);
    let previous = std::mem::take(&mut state.request).into_displayed_result();
    state.request = RequestState::Failed {
        message: CHECK_FAILED_MESSAGE.to_string(),
        previous,
    };
    UpdateResult::none()
}
