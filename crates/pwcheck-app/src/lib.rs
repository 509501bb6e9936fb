//! pwcheck-app - Application state and orchestration for pwcheck
//!
//! Implements the TEA (The Elm Architecture) pattern for the password checker
//! screen: `AppState` is the model, `Message` the events, `handler::update` the
//! only place state changes, and `UpdateAction` the side effects the event
//! loop performs (scoring requests). Also owns settings loading and signal
//! handling.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult, CHECK_FAILED_MESSAGE};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppPhase, AppState, PasswordInput};
