//! Headless mode runner - stdin-driven check loop without TUI
//!
//! Each stdin line becomes a `SetPassword` + `Submit` pair processed by the
//! regular update function. Checks run one at a time so every line gets its
//! own outcome event.

use std::io::BufRead;
use std::sync::Arc;

use pwcheck_app::config::Settings;
use pwcheck_app::message::Message;
use pwcheck_app::process::process_message;
use pwcheck_app::signals;
use pwcheck_app::state::AppState;
use pwcheck_client::{ScoreService, ScoringClient};
use pwcheck_core::prelude::*;
use tokio::sync::mpsc;

use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("pwcheck starting in HEADLESS mode");
    info!("Endpoint: {}", settings.server.endpoint);
    info!("═══════════════════════════════════════════════════════");

    let service = Arc::new(ScoringClient::new(
        &settings.server.endpoint,
        settings.server.timeout(),
    )?);

    let (line_tx, line_rx) = mpsc::channel::<String>(64);
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(line_tx);
    });

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let mut state = AppState::with_settings(settings);
    let result = check_lines(
        &mut state,
        line_rx,
        msg_tx,
        msg_rx,
        &service,
        |event| event.emit(),
    )
    .await;

    info!("pwcheck headless mode exiting");
    result
}

/// Check every line from `lines` until it closes or a quit arrives.
///
/// `emit` receives one outcome event per line. `check_started` precedes it
/// only when a request actually went out; an empty line fails validation and
/// reports `check_failed` alone.
pub async fn check_lines<S, F>(
    state: &mut AppState,
    mut lines: mpsc::Receiver<String>,
    msg_tx: mpsc::Sender<Message>,
    mut msg_rx: mpsc::Receiver<Message>,
    service: &Arc<S>,
    mut emit: F,
) -> Result<()>
where
    S: ScoreService + Send + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    while !state.should_quit() {
        let line = tokio::select! {
            line = lines.recv() => line,
            Some(msg) = msg_rx.recv() => {
                process_message(state, msg, &msg_tx, service);
                continue;
            }
        };

        let Some(password) = line else {
            info!("Input closed");
            break;
        };

        process_message(state, Message::SetPassword(password), &msg_tx, service);
        process_message(state, Message::Submit, &msg_tx, service);

        let request_id = state.last_request_id;
        if state.is_loading() {
            emit(HeadlessEvent::check_started(
                request_id,
                state.password.char_count(),
            ));
        }

        while state.is_loading() && !state.should_quit() {
            match msg_rx.recv().await {
                Some(msg) => process_message(state, msg, &msg_tx, service),
                None => return Err(Error::ChannelClosed),
            }
        }

        if let Some(event) = HeadlessEvent::check_finished(request_id, &state.request) {
            debug!("Request {} settled: {}", request_id, event.name());
            emit(event);
        }
    }

    Ok(())
}

/// Forward stdin lines to the check loop (blocking version)
fn spawn_stdin_reader_blocking(line_tx: mpsc::Sender<String>) {
    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                // Keep interior and leading whitespace; it is part of the password
                let password = line.trim_end_matches('\r').to_string();
                if line_tx.blocking_send(password).is_err() {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}
