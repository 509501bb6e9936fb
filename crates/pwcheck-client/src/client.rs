//! HTTP client for the scoring service

use std::time::Duration;

use pwcheck_core::prelude::*;
use pwcheck_core::StrengthResult;
use url::Url;

use crate::protocol::{parse_response, CheckPasswordRequest};
use crate::service::ScoreService;

/// Endpoint used when neither config nor CLI provides one
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/check-password";

/// Message of the validation error raised for an empty password
pub const EMPTY_PASSWORD_MESSAGE: &str = "Please enter a password";

/// Client for `POST /check-password`
///
/// Each [`check`](ScoringClient::check) is exactly one request: no retries,
/// no deduplication, and no cancellation of earlier calls.
#[derive(Debug, Clone)]
pub struct ScoringClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ScoringClient {
    /// Create a client for `endpoint`.
    ///
    /// `timeout` of `None` keeps the transport default.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::invalid_endpoint(endpoint, e.to_string()))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::invalid_endpoint(
                endpoint.as_str(),
                format!("unsupported scheme '{}'", endpoint.scheme()),
            ));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Score `password` with the remote service
    pub async fn check(&self, password: &str) -> Result<StrengthResult> {
        if password.is_empty() {
            return Err(Error::validation(EMPTY_PASSWORD_MESSAGE));
        }

        debug!("POST {} ({} chars)", self.endpoint, password.chars().count());

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&CheckPasswordRequest { password })
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Scoring service responded with status {}", status);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::network(format!("Failed to read response body: {}", e)))?;

        let result = parse_response(&body)?;
        debug!("Scored password as {}", result.score);
        Ok(result)
    }
}

impl ScoreService for ScoringClient {
    async fn check(&self, password: &str) -> Result<StrengthResult> {
        ScoringClient::check(self, password).await
    }
}
