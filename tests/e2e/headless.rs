//! Headless mode against the mock scoring server

use std::sync::Arc;

use pwcheck::headless::runner::check_lines;
use pwcheck::headless::HeadlessEvent;
use pwcheck_app::message::Message;
use pwcheck_app::state::AppState;
use pwcheck_client::test_utils::{MockReply, MockScoringServer};
use pwcheck_client::ScoringClient;
use tokio::sync::mpsc;

async fn run(endpoint: &str, lines: &[&str]) -> Vec<HeadlessEvent> {
    let (line_tx, line_rx) = mpsc::channel::<String>(16);
    for line in lines {
        line_tx.send(line.to_string()).await.unwrap();
    }
    drop(line_tx);

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    let service = Arc::new(ScoringClient::new(endpoint, None).unwrap());
    let mut state = AppState::new();
    let mut events = Vec::new();

    check_lines(&mut state, line_rx, msg_tx, msg_rx, &service, |e| {
        events.push(e)
    })
    .await
    .unwrap();

    events
}

#[tokio::test]
async fn test_headless_reports_each_line_in_order() {
    let server = MockScoringServer::start(vec![
        MockReply::json(200, r#"{"score":0,"suggestion":"Add more characters"}"#),
        MockReply::json(200, r#"{"score":2,"suggestion":"Great job!"}"#),
    ])
    .await;

    let events = run(&server.endpoint(), &["hunter2", "", "Tr0ub4dor&3"]).await;

    let names: Vec<_> = events.iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        vec![
            "check_started",
            "check_succeeded",
            "check_failed",
            "check_started",
            "check_succeeded",
        ]
    );
    assert!(matches!(
        &events[1],
        HeadlessEvent::CheckSucceeded { score: 0, label, .. } if label == "Weak"
    ));
    assert!(matches!(
        &events[2],
        HeadlessEvent::CheckFailed { request_id: 2, .. }
    ));
    assert!(matches!(
        &events[4],
        HeadlessEvent::CheckSucceeded { score: 2, suggestion, .. } if suggestion == "Great job!"
    ));
    // The empty line never reached the server
    assert_eq!(server.request_count(), 2);
}

#[tokio::test]
async fn test_headless_output_is_ndjson() {
    let server = MockScoringServer::start(vec![MockReply::json(
        200,
        r#"{"score":1,"suggestion":"Add a symbol"}"#,
    )])
    .await;

    let events = run(&server.endpoint(), &["hunter2"]).await;

    let mut out = Vec::new();
    for event in &events {
        event.write_to(&mut out).unwrap();
    }
    let text = String::from_utf8(out).unwrap();

    for line in text.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value["event"].is_string());
        assert!(value["timestamp"].is_i64());
    }
    assert!(!text.contains("hunter2"));
}
