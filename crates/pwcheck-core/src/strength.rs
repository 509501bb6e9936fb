//! Password strength score and result types

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Strength tier reported by the scoring service.
///
/// The wire value is an integer; only 0, 1 and 2 are valid. Anything else is
/// rejected as a malformed response rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "i64")]
pub enum StrengthScore {
    Weak,
    Medium,
    Strong,
}

impl StrengthScore {
    /// All tiers in ascending order
    pub const ALL: [StrengthScore; 3] = [
        StrengthScore::Weak,
        StrengthScore::Medium,
        StrengthScore::Strong,
    ];

    /// Numeric wire value (0, 1 or 2), also usable as a table index
    pub fn value(self) -> u8 {
        match self {
            StrengthScore::Weak => 0,
            StrengthScore::Medium => 1,
            StrengthScore::Strong => 2,
        }
    }

    /// Index into per-tier lookup tables
    pub fn index(self) -> usize {
        self.value() as usize
    }

    /// Human-readable tier label
    pub fn label(self) -> &'static str {
        match self {
            StrengthScore::Weak => "Weak",
            StrengthScore::Medium => "Medium",
            StrengthScore::Strong => "Strong",
        }
    }

    /// Reaction emoji shown next to the tier label
    pub fn emoji(self) -> &'static str {
        match self {
            StrengthScore::Weak => "😡",
            StrengthScore::Medium => "😬",
            StrengthScore::Strong => "💪",
        }
    }
}

impl TryFrom<i64> for StrengthScore {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(StrengthScore::Weak),
            1 => Ok(StrengthScore::Medium),
            2 => Ok(StrengthScore::Strong),
            other => Err(Error::malformed(format!(
                "score {} is outside the supported range 0..=2",
                other
            ))),
        }
    }
}

impl From<StrengthScore> for u8 {
    fn from(score: StrengthScore) -> Self {
        score.value()
    }
}

impl std::fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A successful scoring outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub score: StrengthScore,
    pub suggestion: String,
}

impl StrengthResult {
    pub fn new(score: StrengthScore, suggestion: impl Into<String>) -> Self {
        Self {
            score,
            suggestion: suggestion.into(),
        }
    }
}
