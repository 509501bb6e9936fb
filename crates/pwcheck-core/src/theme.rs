//! Theme selection

use serde::{Deserialize, Serialize};

/// Which of the two visual themes is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Cyberpunk,
    Pastel,
}

impl ThemeKind {
    /// The other theme
    pub fn toggle(self) -> Self {
        match self {
            ThemeKind::Cyberpunk => ThemeKind::Pastel,
            ThemeKind::Pastel => ThemeKind::Cyberpunk,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKind::Cyberpunk => "cyberpunk",
            ThemeKind::Pastel => "pastel",
        }
    }
}

impl std::fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ThemeKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cyberpunk" => Ok(ThemeKind::Cyberpunk),
            "pastel" => Ok(ThemeKind::Pastel),
            other => Err(crate::Error::config(format!("unknown theme '{}'", other))),
        }
    }
}
