//! Scoring request lifecycle

use crate::strength::StrengthResult;

/// Identity of one issued scoring request.
///
/// Issued in strictly increasing order by the controller. Only the response
/// carrying the most recently issued id may change the displayed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// The id following this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of the scoring flow.
///
/// `previous` carries the last successful result so it stays visible while a
/// new check is pending or after a failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Checking {
        request_id: RequestId,
        previous: Option<StrengthResult>,
    },
    Succeeded(StrengthResult),
    Failed {
        message: String,
        previous: Option<StrengthResult>,
    },
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Checking { .. })
    }

    /// Id of the request currently awaited, if any
    pub fn pending_request(&self) -> Option<RequestId> {
        match self {
            RequestState::Checking { request_id, .. } => Some(*request_id),
            _ => None,
        }
    }

    /// User-facing error message, present only in `Failed`
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The result the result panel should show, fresh or stale
    pub fn displayed_result(&self) -> Option<&StrengthResult> {
        match self {
            RequestState::Idle => None,
            RequestState::Succeeded(result) => Some(result),
            RequestState::Checking { previous, .. } | RequestState::Failed { previous, .. } => {
                previous.as_ref()
            }
        }
    }

    /// Consume the state, keeping only the result worth carrying forward
    pub fn into_displayed_result(self) -> Option<StrengthResult> {
        match self {
            RequestState::Idle => None,
            RequestState::Succeeded(result) => Some(result),
            RequestState::Checking { previous, .. } | RequestState::Failed { previous, .. } => {
                previous
            }
        }
    }

    /// Short name for logs and headless output
    pub fn name(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Checking { .. } => "checking",
            RequestState::Succeeded(_) => "succeeded",
            RequestState::Failed { .. } => "failed",
        }
    }
}
