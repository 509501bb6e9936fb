//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use pwcheck_client::ScoreService;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task.
///
/// Every `CheckStrength` runs on its own task; earlier requests are neither
/// cancelled nor awaited.
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, service: Arc<S>)
where
    S: ScoreService + Send + Sync + 'static,
{
    match action {
        UpdateAction::CheckStrength {
            request_id,
            password,
        } => {
            tokio::spawn(async move {
                let message = match service.check(password.as_str()).await {
                    Ok(result) => Message::StrengthReceived { request_id, result },
                    Err(e) => {
                        if e.is_recoverable() {
                            warn!("Request {} failed: {}", request_id, e);
                        } else {
                            error!("Request {} failed: {}", request_id, e);
                        }
                        Message::StrengthCheckFailed {
                            request_id,
                            error: e.to_string(),
                        }
                    }
                };
                debug!("Request {} finished", request_id);
                if msg_tx.send(message).await.is_err() {
                    warn!("Event loop gone before request {} reported back", request_id);
                }
            });
        }
    }
}
