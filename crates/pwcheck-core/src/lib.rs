//! # pwcheck-core - Core Domain Types
//!
//! Foundation crate for pwcheck. Provides domain types, error handling and
//! logging setup shared by the client, app and TUI crates.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, tracing-subscriber, tracing-appender, dirs).
//!
//! ## Public API
//!
//! ### Strength (`strength`)
//! - [`StrengthScore`] - The three score tiers (Weak, Medium, Strong)
//! - [`StrengthResult`] - A score plus the server's suggestion text
//!
//! ### Request Lifecycle (`request`)
//! - [`RequestState`] - Idle / Checking / Succeeded / Failed
//! - [`RequestId`] - Monotonic identity of an issued scoring request
//!
//! ### Presentation Inputs (`theme`, `pointer`, `effect`)
//! - [`ThemeKind`] - Cyberpunk or Pastel
//! - [`PointerPosition`], [`PointerColor`] - Normalized cursor position and
//!   the background tint derived from it
//! - [`BackgroundEffectConfig`] - Configuration consumed by the animated background
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `network` and `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pwcheck_core::prelude::*;
//! ```

pub mod effect;
pub mod error;
pub mod logging;
pub mod pointer;
pub mod request;
pub mod strength;
pub mod theme;

/// Prelude for common imports used throughout all pwcheck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use effect::BackgroundEffectConfig;
pub use error::{Error, Result, ResultExt};
pub use pointer::{PointerColor, PointerPosition};
pub use request::{RequestId, RequestState};
pub use strength::{StrengthResult, StrengthScore};
pub use theme::ThemeKind;
