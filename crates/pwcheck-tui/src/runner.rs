//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use pwcheck_app::config::Settings;
use pwcheck_app::message::Message;
use pwcheck_app::process::process_message;
use pwcheck_app::signals;
use pwcheck_app::state::AppState;
use pwcheck_client::{ScoreService, ScoringClient};
use pwcheck_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the password checker TUI until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    // Fail before touching the terminal if the endpoint is unusable
    let client = ScoringClient::new(&settings.server.endpoint, settings.server.timeout())?;
    info!(
        "Using scoring endpoint {} (theme: {})",
        client.endpoint(),
        settings.ui.theme
    );
    let service = Arc::new(client);

    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let mouse = settings.background.enabled && settings.background.mouse_interaction;
    if mouse {
        if let Err(e) = terminal::enable_mouse_capture() {
            warn!("{}", e);
        }
    }

    let mut state = AppState::with_settings(settings);

    // Scoring results and signals arrive here
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &service);

    if mouse {
        terminal::disable_mouse_capture();
    }
    ratatui::restore();

    info!("Exiting ({})", state.request.name());
    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    service: &Arc<S>,
) -> Result<()>
where
    S: ScoreService + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Results from scoring tasks and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, service);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, service);
        }
    }

    Ok(())
}
