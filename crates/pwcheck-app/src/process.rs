//! Message processing
//!
//! Runs the TEA update loop over follow-up messages and hands actions to the
//! action dispatcher.

use std::sync::Arc;

use pwcheck_client::ScoreService;
use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &Arc<S>,
) where
    S: ScoreService + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), service.clone());
        }

        msg = result.message;
    }
}
