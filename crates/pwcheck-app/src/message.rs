//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use pwcheck_core::{RequestId, StrengthResult};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit without confirmation (Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Password Field
    // ─────────────────────────────────────────────────────────
    /// Append a character to the password
    InputChar(char),

    /// Remove the last character of the password
    InputBackspace,

    /// Replace the password with the empty string
    ClearInput,

    /// Replace the whole password (paste, headless input)
    SetPassword(String),

    /// Flip masked/plaintext rendering of the password
    ToggleVisibility,

    // ─────────────────────────────────────────────────────────
    // Scoring
    // ─────────────────────────────────────────────────────────
    /// Check the current password (Enter key or the submit button)
    Submit,

    /// Scoring service answered
    StrengthReceived {
        request_id: RequestId,
        result: StrengthResult,
    },

    /// Scoring request failed; `error` is for logs only
    StrengthCheckFailed { request_id: RequestId, error: String },

    // ─────────────────────────────────────────────────────────
    // Presentation
    // ─────────────────────────────────────────────────────────
    ToggleTheme,

    /// Pointer moved to a cell of a `width` x `height` surface
    PointerMoved {
        column: u16,
        row: u16,
        width: u16,
        height: u16,
    },
}
