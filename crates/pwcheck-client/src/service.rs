//! Scoring service trait
//!
//! The application layer only sees this trait, so tests and alternative
//! transports can stand in for the HTTP client.

use pwcheck_core::prelude::*;
use pwcheck_core::StrengthResult;

/// Password scoring operations
///
/// Implement [`ScoreService`] (the `Send` variant); the local variant is
/// provided automatically.
#[trait_variant::make(ScoreService: Send)]
pub trait LocalScoreService {
    /// Score one password. One call is one request; implementations must not
    /// retry or deduplicate.
    async fn check(&self, password: &str) -> Result<StrengthResult>;
}
