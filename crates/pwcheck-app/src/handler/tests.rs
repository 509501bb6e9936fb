//! Tests for handler module

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState};
use pwcheck_client::EMPTY_PASSWORD_MESSAGE;
use pwcheck_core::{
    PointerColor, PointerPosition, RequestId, RequestState, StrengthResult, StrengthScore,
    ThemeKind,
};

fn state_with_password(text: &str) -> AppState {
    let mut state = AppState::new();
    state.password.set(text);
    state
}

/// Submit and return the issued request id
fn submit(state: &mut AppState) -> RequestId {
    match update(state, Message::Submit).action {
        Some(UpdateAction::CheckStrength { request_id, .. }) => request_id,
        None => panic!("expected a CheckStrength action"),
    }
}

fn weak() -> StrengthResult {
    StrengthResult::new(StrengthScore::Weak, "Add more characters")
}

fn strong() -> StrengthResult {
    StrengthResult::new(StrengthScore::Strong, "Great job!")
}

// ─────────────────────────────────────────────────────────────────
// Quit / keys
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_escape_key_produces_quit_message() {
    assert!(matches!(handle_key(InputKey::Esc), Some(Message::Quit)));
}

#[test]
fn test_ctrl_c_produces_quit_message() {
    assert!(matches!(
        handle_key(InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_q_is_typed_not_quit() {
    assert!(matches!(
        handle_key(InputKey::Char('q')),
        Some(Message::InputChar('q'))
    ));
}

#[test]
fn test_enter_produces_submit() {
    assert!(matches!(handle_key(InputKey::Enter), Some(Message::Submit)));
}

#[test]
fn test_visibility_and_theme_bindings() {
    assert!(matches!(
        handle_key(InputKey::CharCtrl('v')),
        Some(Message::ToggleVisibility)
    ));
    assert!(matches!(
        handle_key(InputKey::F(2)),
        Some(Message::ToggleVisibility)
    ));
    assert!(matches!(
        handle_key(InputKey::CharCtrl('t')),
        Some(Message::ToggleTheme)
    ));
    assert!(matches!(
        handle_key(InputKey::F(3)),
        Some(Message::ToggleTheme)
    ));
}

#[test]
fn test_ctrl_u_clears_input() {
    assert!(matches!(
        handle_key(InputKey::CharCtrl('u')),
        Some(Message::ClearInput)
    ));
}

#[test]
fn test_unbound_keys_are_ignored() {
    assert!(handle_key(InputKey::F(9)).is_none());
    assert!(handle_key(InputKey::CharCtrl('z')).is_none());
}

#[test]
fn test_key_message_returns_follow_up() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Key(InputKey::Char('x')));
    assert!(matches!(result.message, Some(Message::InputChar('x'))));
    assert!(result.action.is_none());
}

// ─────────────────────────────────────────────────────────────────
// Password field
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_typing_edits_password() {
    let mut state = AppState::new();
    for c in "hunter2".chars() {
        update(&mut state, Message::InputChar(c));
    }
    assert_eq!(state.password.as_str(), "hunter2");

    update(&mut state, Message::InputBackspace);
    assert_eq!(state.password.as_str(), "hunter");

    update(&mut state, Message::ClearInput);
    assert!(state.password.is_empty());
}

#[test]
fn test_backspace_on_empty_is_noop() {
    let mut state = AppState::new();
    update(&mut state, Message::InputBackspace);
    assert!(state.password.is_empty());
}

#[test]
fn test_editing_never_touches_request_state() {
    let mut state = state_with_password("hunter2");
    let id = submit(&mut state);
    update(
        &mut state,
        Message::StrengthReceived {
            request_id: id,
            result: weak(),
        },
    );

    let result = update(&mut state, Message::SetPassword("something else".into()));

    assert!(result.action.is_none());
    assert_eq!(state.request, RequestState::Succeeded(weak()));
}

#[test]
fn test_editing_keeps_error_visible() {
    let mut state = AppState::new();
    update(&mut state, Message::Submit);
    update(&mut state, Message::InputChar('a'));
    assert_eq!(state.request.error_message(), Some(EMPTY_PASSWORD_MESSAGE));
}

#[test]
fn test_visibility_toggle_never_changes_password() {
    let mut state = state_with_password("Tr0ub4dor&3");

    update(&mut state, Message::ToggleVisibility);
    assert!(state.password_visible);
    assert_eq!(state.password.as_str(), "Tr0ub4dor&3");

    update(&mut state, Message::ToggleVisibility);
    assert!(!state.password_visible);
    assert_eq!(state.password.as_str(), "Tr0ub4dor&3");
}

// ─────────────────────────────────────────────────────────────────
// Submit
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_empty_submit_sets_validation_error_without_request() {
    let mut state = AppState::new();

    let result = update(&mut state, Message::Submit);

    assert!(result.action.is_none());
    assert!(!state.is_loading());
    assert_eq!(state.request.error_message(), Some(EMPTY_PASSWORD_MESSAGE));
}

#[test]
fn test_submit_enters_checking_and_requests_once() {
    let mut state = state_with_password("hunter2");

    let result = update(&mut state, Message::Submit);

    match result.action {
        Some(UpdateAction::CheckStrength {
            request_id,
            password,
        }) => {
            assert_eq!(password.as_str(), "hunter2");
            assert_eq!(state.request.pending_request(), Some(request_id));
        }
        None => panic!("expected a CheckStrength action"),
    }
    assert!(state.is_loading());
    assert!(state.request.error_message().is_none());
}

#[test]
fn test_submit_clears_previous_error() {
    let mut state = AppState::new();
    update(&mut state, Message::Submit);
    assert!(state.request.error_message().is_some());

    state.password.set("hunter2");
    submit(&mut state);

    assert!(state.request.error_message().is_none());
    assert!(state.is_loading());
}

#[test]
fn test_submit_keeps_stale_result_visible() {
    let mut state = state_with_password("hunter2");
    let id = submit(&mut state);
    update(
        &mut state,
        Message::StrengthReceived {
            request_id: id,
            result: weak(),
        },
    );

    submit(&mut state);

    assert!(state.is_loading());
    assert_eq!(state.request.displayed_result(), Some(&weak()));
}

// ─────────────────────────────────────────────────────────────────
// Responses
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_hunter2_scenario() {
    let mut state = state_with_password("hunter2");
    let id = submit(&mut state);

    update(
        &mut state,
        Message::StrengthReceived {
            request_id: id,
            result: weak(),
        },
    );

    assert!(!state.is_loading());
    assert_eq!(state.request, RequestState::Succeeded(weak()));
    assert_eq!(state.password.as_str(), "hunter2");
}

#[test]
fn test_tr0ub4dor_scenario() {
    let mut state = state_with_password("Tr0ub4dor&3");
    let id = submit(&mut state);

    update(
        &mut state,
        Message::StrengthReceived {
            request_id: id,
            result: strong(),
        },
    );

    let shown = state.request.displayed_result().unwrap();
    assert_eq!(shown.score, StrengthScore::Strong);
    assert_eq!(shown.suggestion, "Great job!");
}

#[test]
fn test_failure_shows_generic_message_and_keeps_input() {
    let mut state = state_with_password("hunter2");
    let id = submit(&mut state);

    update(
        &mut state,
        Message::StrengthCheckFailed {
            request_id: id,
            error: "Scoring service responded with status code 500".into(),
        },
    );

    assert!(!state.is_loading());
    assert_eq!(state.request.error_message(), Some(CHECK_FAILED_MESSAGE));
    assert_eq!(state.password.as_str(), "hunter2");
}

#[test]
fn test_failure_keeps_stale_result() {
    let mut state = state_with_password("hunter2");
    let id = submit(&mut state);
    update(
        &mut state,
        Message::StrengthReceived {
            request_id: id,
            result: weak(),
        },
    );

    let id = submit(&mut state);
    update(
        &mut state,
        Message::StrengthCheckFailed {
            request_id: id,
            error: "connection refused".into(),
        },
    );

    assert_eq!(state.request.error_message(), Some(CHECK_FAILED_MESSAGE));
    assert_eq!(state.request.displayed_result(), Some(&weak()));
}

#[test]
fn test_latest_submit_wins_when_responses_arrive_out_of_order() {
    let mut state = state_with_password("hunter2");
    let first = submit(&mut state);
    state.password.set("Tr0ub4dor&3");
    let second = submit(&mut state);

    update(
        &mut state,
        Message::StrengthReceived {
            request_id: second,
            result: strong(),
        },
    );
    update(
        &mut state,
        Message::StrengthReceived {
            request_id: first,
            result: weak(),
        },
    );

    assert_eq!(state.request, RequestState::Succeeded(strong()));
}

#[test]
fn test_stale_response_does_not_end_loading() {
    let mut state = state_with_password("hunter2");
    let first = submit(&mut state);
    let second = submit(&mut state);

    update(
        &mut state,
        Message::StrengthReceived {
            request_id: first,
            result: weak(),
        },
    );

    assert_eq!(state.request.pending_request(), Some(second));
}

#[test]
fn test_stale_failure_is_ignored() {
    let mut state = state_with_password("hunter2");
    let first = submit(&mut state);
    let second = submit(&mut state);

    update(
        &mut state,
        Message::StrengthCheckFailed {
            request_id: first,
            error: "timeout".into(),
        },
    );
    update(
        &mut state,
        Message::StrengthReceived {
            request_id: second,
            result: weak(),
        },
    );

    assert_eq!(state.request, RequestState::Succeeded(weak()));
}

#[test]
fn test_empty_submit_supersedes_in_flight_request() {
    let mut state = state_with_password("hunter2");
    let in_flight = submit(&mut state);

    update(&mut state, Message::ClearInput);
    update(&mut state, Message::Submit);
    update(
        &mut state,
        Message::StrengthReceived {
            request_id: in_flight,
            result: weak(),
        },
    );

    assert_eq!(state.request.error_message(), Some(EMPTY_PASSWORD_MESSAGE));
}

#[test]
fn test_new_result_marks_reveal_tick() {
    let mut state = state_with_password("hunter2");
    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);
    let id = submit(&mut state);

    update(
        &mut state,
        Message::StrengthReceived {
            request_id: id,
            result: weak(),
        },
    );
    update(&mut state, Message::Tick);

    assert_eq!(state.result_shown_at, Some(2));
    assert_eq!(state.ticks_since_result(), Some(1));
}

// ─────────────────────────────────────────────────────────────────
// Theme / pointer
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_toggle_theme_alternates() {
    let mut state = AppState::new();
    assert_eq!(state.theme, ThemeKind::Cyberpunk);

    update(&mut state, Message::ToggleTheme);
    assert_eq!(state.theme, ThemeKind::Pastel);

    update(&mut state, Message::ToggleTheme);
    assert_eq!(state.theme, ThemeKind::Cyberpunk);
}

#[test]
fn test_toggle_theme_leaves_everything_else() {
    let mut state = state_with_password("hunter2");
    let id = submit(&mut state);
    update(
        &mut state,
        Message::StrengthReceived {
            request_id: id,
            result: weak(),
        },
    );

    update(&mut state, Message::ToggleTheme);

    assert_eq!(state.request, RequestState::Succeeded(weak()));
    assert_eq!(state.password.as_str(), "hunter2");
}

#[test]
fn test_pointer_move_sets_position_and_color() {
    let mut state = AppState::new();
    assert!(state.pointer_color.is_none());

    update(
        &mut state,
        Message::PointerMoved {
            column: 0,
            row: 0,
            width: 80,
            height: 24,
        },
    );

    let expected = PointerPosition::from_cell(0, 0, 80, 24);
    assert_eq!(state.pointer, Some(expected));
    assert_eq!(
        state.pointer_color,
        Some(PointerColor::from_position(expected))
    );
}

#[test]
fn test_pointer_color_tracks_latest_move() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::PointerMoved {
            column: 0,
            row: 0,
            width: 80,
            height: 24,
        },
    );
    let first = state.pointer_color;

    update(
        &mut state,
        Message::PointerMoved {
            column: 79,
            row: 23,
            width: 80,
            height: 24,
        },
    );

    assert_ne!(state.pointer_color, first);
}

#[test]
fn test_pointer_tint_disabled() {
    let mut settings = Settings::default();
    settings.background.pointer_tint = false;
    let mut state = AppState::with_settings(settings);

    update(
        &mut state,
        Message::PointerMoved {
            column: 10,
            row: 5,
            width: 80,
            height: 24,
        },
    );

    assert!(state.pointer.is_some());
    assert!(state.pointer_color.is_none());
}

#[test]
fn test_tick_advances_clock() {
    let mut state = AppState::new();
    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);
    assert_eq!(state.tick, 2);
}
