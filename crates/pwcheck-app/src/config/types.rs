//! Configuration types for pwcheck
//!
//! Defines:
//! - `Settings` - Top-level contents of `config.toml`
//! - `ServerSettings`, `UiSettings`, `BackgroundSettings` - Its sections
//! - `IconMode` - Glyph set selection

use std::time::Duration;

use pwcheck_client::DEFAULT_ENDPOINT;
use pwcheck_core::{BackgroundEffectConfig, ThemeKind};
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub background: BackgroundSettings,
}

/// Where and how to reach the scoring service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Full URL of the scoring endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in milliseconds; 0 keeps the transport default
    #[serde(default)]
    pub timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: 0,
        }
    }
}

impl ServerSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_true() -> bool {
    true
}

/// Icon rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font installed in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct UiSettings {
    /// Theme at startup; toggling at runtime is not saved
    #[serde(default)]
    pub theme: ThemeKind,

    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Show the password in plaintext at startup
    #[serde(default)]
    pub start_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BackgroundSettings {
    /// Draw the dithered background at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Advance the wave on every tick
    #[serde(default = "default_true")]
    pub animate: bool,

    /// Brighten the wave around the pointer
    #[serde(default = "default_true")]
    pub mouse_interaction: bool,

    /// Tint the background from the pointer position
    #[serde(default = "default_true")]
    pub pointer_tint: bool,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            animate: true,
            mouse_interaction: true,
            pointer_tint: true,
        }
    }
}

impl BackgroundSettings {
    /// Effect configuration for `theme` with these switches applied
    pub fn effect_config(&self, theme: ThemeKind) -> BackgroundEffectConfig {
        BackgroundEffectConfig::for_theme(theme)
            .with_animation(self.animate)
            .with_mouse_interaction(self.mouse_interaction)
    }
}
