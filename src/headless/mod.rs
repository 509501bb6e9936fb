//! Headless mode - NDJSON output for scripted checks
//!
//! Reads one password per stdin line, scores it through the same controller as
//! the TUI, and writes structured events to stdout instead of drawing a screen.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type. Passwords are never
//! echoed; only their length is reported.
//!
//! # Example Output
//!
//! ```json
//! {"event":"check_started","request_id":1,"length":7,"timestamp":1704700001000}
//! {"event":"check_succeeded","request_id":1,"score":0,"label":"Weak","suggestion":"Add more characters","timestamp":1704700001042}
//! {"event":"check_failed","request_id":2,"message":"Please enter a password","timestamp":1704700001050}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use pwcheck_core::{RequestId, RequestState};
use serde::Serialize;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A scoring request was sent
    CheckStarted {
        request_id: u64,
        length: usize,
        timestamp: i64,
    },

    /// The scoring service answered
    CheckSucceeded {
        request_id: u64,
        score: u8,
        label: String,
        suggestion: String,
        timestamp: i64,
    },

    /// Validation or transport failure, with the message the UI would show
    CheckFailed {
        request_id: u64,
        message: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(writer, "{}", json)?;
        writer.flush()
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn check_started(request_id: RequestId, length: usize) -> Self {
        Self::CheckStarted {
            request_id: request_id.value(),
            length,
            timestamp: Self::now(),
        }
    }

    /// Event describing a settled request, `None` while it is still in flight
    pub fn check_finished(request_id: RequestId, state: &RequestState) -> Option<Self> {
        match state {
            RequestState::Succeeded(result) => Some(Self::CheckSucceeded {
                request_id: request_id.value(),
                score: result.score.value(),
                label: result.score.label().to_string(),
                suggestion: result.suggestion.clone(),
                timestamp: Self::now(),
            }),
            RequestState::Failed { message, .. } => Some(Self::CheckFailed {
                request_id: request_id.value(),
                message: message.clone(),
                timestamp: Self::now(),
            }),
            RequestState::Idle | RequestState::Checking { .. } => None,
        }
    }

    /// Name of the event as it appears in the `event` field
    pub fn name(&self) -> &'static str {
        match self {
            Self::CheckStarted { .. } => "check_started",
            Self::CheckSucceeded { .. } => "check_succeeded",
            Self::CheckFailed { .. } => "check_failed",
        }
    }
}
