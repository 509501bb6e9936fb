//! Wire format of the scoring service
//!
//! Request: `{"password": "<text>"}`
//! Response: `{"score": 0|1|2, "suggestion": "<text>"}`

use pwcheck_core::prelude::*;
use pwcheck_core::{StrengthResult, StrengthScore};
use serde::{Deserialize, Serialize};

/// Body of `POST /check-password`
#[derive(Serialize)]
pub struct CheckPasswordRequest<'a> {
    pub password: &'a str,
}

impl std::fmt::Debug for CheckPasswordRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckPasswordRequest")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Raw success body before score validation
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CheckPasswordResponse {
    pub score: i64,
    pub suggestion: String,
}

impl TryFrom<CheckPasswordResponse> for StrengthResult {
    type Error = Error;

    fn try_from(response: CheckPasswordResponse) -> Result<Self> {
        let score = StrengthScore::try_from(response.score)?;
        Ok(StrengthResult::new(score, response.suggestion))
    }
}

/// Decode a success body into a validated result.
///
/// Any body that is not an object with an integer `score` in 0..=2 and a string
/// `suggestion` is reported as [`Error::MalformedResponse`].
pub fn parse_response(body: &[u8]) -> Result<StrengthResult> {
    let raw: CheckPasswordResponse =
        serde_json::from_slice(body).map_err(|e| Error::malformed(e.to_string()))?;
    StrengthResult::try_from(raw)
}
