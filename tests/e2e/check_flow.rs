//! Typing, submitting, and displaying results through the real HTTP client

use std::time::Duration;

use pwcheck_app::message::Message;
use pwcheck_app::{InputKey, CHECK_FAILED_MESSAGE};
use pwcheck_client::test_utils::{MockReply, MockScoringServer};
use pwcheck_client::EMPTY_PASSWORD_MESSAGE;
use pwcheck_core::{RequestState, StrengthScore, ThemeKind};

use crate::Harness;

#[tokio::test]
async fn test_weak_password_end_to_end() {
    let server = MockScoringServer::start(vec![MockReply::json(
        200,
        r#"{"score":0,"suggestion":"Add more characters"}"#,
    )])
    .await;
    let mut h = Harness::new(&server.endpoint());

    h.type_text("hunter2");
    h.press_enter();
    assert!(h.state.is_loading());
    h.settle().await;

    let result = h.state.request.displayed_result().unwrap();
    assert_eq!(result.score, StrengthScore::Weak);
    assert_eq!(result.suggestion, "Add more characters");
    assert_eq!(server.requests()[0].body, r#"{"password":"hunter2"}"#);
}

#[tokio::test]
async fn test_strong_password_end_to_end() {
    let server = MockScoringServer::start(vec![MockReply::json(
        200,
        r#"{"score":2,"suggestion":"Great job!"}"#,
    )])
    .await;
    let mut h = Harness::new(&server.endpoint());

    h.type_text("Tr0ub4dor&3");
    h.press_enter();
    h.settle().await;

    let result = h.state.request.displayed_result().unwrap();
    assert_eq!(result.score, StrengthScore::Strong);
    assert_eq!(result.score.label(), "Strong");
    assert_eq!(result.score.emoji(), "💪");
}

#[tokio::test]
async fn test_empty_submit_sends_nothing() {
    let server = MockScoringServer::start(vec![MockReply::json(
        200,
        r#"{"score":2,"suggestion":"unused"}"#,
    )])
    .await;
    let mut h = Harness::new(&server.endpoint());

    h.press_enter();

    assert_eq!(h.state.request.error_message(), Some(EMPTY_PASSWORD_MESSAGE));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(server.request_count(), 0);
}

#[tokio::test]
async fn test_server_error_keeps_input() {
    let server = MockScoringServer::start(vec![MockReply::json(500, "{}")]).await;
    let mut h = Harness::new(&server.endpoint());

    h.type_text("hunter2");
    h.press_enter();
    h.settle().await;

    assert_eq!(h.state.request.error_message(), Some(CHECK_FAILED_MESSAGE));
    assert_eq!(h.state.password.as_str(), "hunter2");
    assert!(!h.state.should_quit());
}

#[tokio::test]
async fn test_unreachable_service_does_not_crash() {
    // Bind and immediately drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut h = Harness::new(&format!("http://{}/check-password", addr));

    h.type_text("hunter2");
    h.press_enter();
    h.settle().await;

    assert_eq!(h.state.request.error_message(), Some(CHECK_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_malformed_body_is_failure() {
    let server =
        MockScoringServer::start(vec![MockReply::json(200, r#"{"score":9,"suggestion":""}"#)])
            .await;
    let mut h = Harness::new(&server.endpoint());

    h.type_text("hunter2");
    h.press_enter();
    h.settle().await;

    assert!(matches!(h.state.request, RequestState::Failed { .. }));
}

#[tokio::test]
async fn test_one_request_per_submit() {
    let server = MockScoringServer::start(vec![MockReply::json(
        200,
        r#"{"score":1,"suggestion":"Add a symbol"}"#,
    )])
    .await;
    let mut h = Harness::new(&server.endpoint());

    h.type_text("abc");
    h.press_enter();
    h.settle().await;
    h.press_enter();
    h.settle().await;

    assert_eq!(server.request_count(), 2);
}

#[tokio::test]
async fn test_latest_submit_wins_over_slow_earlier_one() {
    let server = MockScoringServer::start(vec![
        MockReply::delayed(
            Duration::from_millis(300),
            MockReply::json(200, r#"{"score":0,"suggestion":"old"}"#),
        ),
        MockReply::json(200, r#"{"score":2,"suggestion":"new"}"#),
    ])
    .await;
    let mut h = Harness::new(&server.endpoint());

    h.type_text("first");
    h.press_enter();
    // Let the first request reach the server before the second is sent
    tokio::time::sleep(Duration::from_millis(50)).await;
    h.send(Message::Key(InputKey::CharCtrl('u')));
    h.type_text("second-longer");
    h.press_enter();

    h.settle().await;
    assert_eq!(
        h.state.request.displayed_result().unwrap().suggestion,
        "new"
    );

    // The slow stale answer arrives later and must be ignored
    h.apply_next().await;
    assert_eq!(
        h.state.request.displayed_result().unwrap().suggestion,
        "new"
    );
}

#[tokio::test]
async fn test_stale_result_survives_later_failure() {
    let server = MockScoringServer::start(vec![
        MockReply::json(200, r#"{"score":1,"suggestion":"Add a symbol"}"#),
        MockReply::json(503, "{}"),
    ])
    .await;
    let mut h = Harness::new(&server.endpoint());

    h.type_text("hunter2");
    h.press_enter();
    h.settle().await;
    h.type_text("!");
    h.press_enter();
    h.settle().await;

    assert_eq!(h.state.request.error_message(), Some(CHECK_FAILED_MESSAGE));
    assert_eq!(
        h.state.request.displayed_result().unwrap().suggestion,
        "Add a symbol"
    );
}

#[tokio::test]
async fn test_timeout_becomes_failure() {
    let server = MockScoringServer::start(vec![MockReply::delayed(
        Duration::from_secs(5),
        MockReply::json(200, r#"{"score":2,"suggestion":"late"}"#),
    )])
    .await;
    let mut h = Harness::with_timeout(&server.endpoint(), Some(Duration::from_millis(100)));

    h.type_text("hunter2");
    h.press_enter();
    h.settle().await;

    assert_eq!(h.state.request.error_message(), Some(CHECK_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_theme_and_visibility_do_not_touch_request() {
    let server = MockScoringServer::start(vec![MockReply::json(
        200,
        r#"{"score":1,"suggestion":"Add a symbol"}"#,
    )])
    .await;
    let mut h = Harness::new(&server.endpoint());

    h.type_text("hunter2");
    h.press_enter();
    h.settle().await;
    let before = h.state.request.clone();

    h.send(Message::Key(InputKey::F(3)));
    h.send(Message::Key(InputKey::F(2)));

    assert_eq!(h.state.theme, ThemeKind::Pastel);
    assert!(h.state.password_visible);
    assert_eq!(h.state.password.as_str(), "hunter2");
    assert_eq!(h.state.request, before);
    assert_eq!(server.request_count(), 1);
}
