//! # pwcheck-client - Remote Scoring Client
//!
//! Talks to the external password scoring service over HTTP and turns its
//! JSON answer into a [`pwcheck_core::StrengthResult`].
//!
//! Depends on [`pwcheck_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Client
//! - [`ScoringClient`] - reqwest-backed client for `POST /check-password`
//! - [`DEFAULT_ENDPOINT`] - Endpoint used when nothing is configured
//!
//! ### Service Seam
//! - [`ScoreService`] - Async trait the application layer depends on
//!
//! ### Protocol
//! - [`CheckPasswordRequest`], [`CheckPasswordResponse`] - Wire types
//! - [`parse_response()`] - Decode and validate a response body

pub mod client;
pub mod protocol;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{ScoringClient, DEFAULT_ENDPOINT, EMPTY_PASSWORD_MESSAGE};
pub use protocol::{parse_response, CheckPasswordRequest, CheckPasswordResponse};
pub use service::{LocalScoreService, ScoreService};
