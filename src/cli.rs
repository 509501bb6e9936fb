//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use pwcheck_app::config::{self, Settings};
use pwcheck_core::ThemeKind;

/// pwcheck - Check password strength against a scoring service
#[derive(Parser, Debug, Default)]
#[command(name = "pwcheck")]
#[command(about = "Check password strength against a scoring service", long_about = None)]
pub struct Args {
    /// Scoring endpoint, e.g. http://localhost:8000/check-password
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Starting theme (cyberpunk or pastel)
    #[arg(long)]
    pub theme: Option<ThemeKind>,

    /// Config file (defaults to <config dir>/pwcheck/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Draw a solid background instead of the dithered wave
    #[arg(long)]
    pub no_background: bool,

    /// Read passwords from stdin and print NDJSON events (no TUI)
    #[arg(long)]
    pub headless: bool,
}

impl Args {
    /// Load the config file and apply flag overrides on top
    pub fn settings(&self) -> Settings {
        let mut settings = config::load_settings_or_default(self.config.as_deref());
        self.apply_overrides(&mut settings);
        settings
    }

    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(endpoint) = &self.endpoint {
            settings.server.endpoint = endpoint.clone();
        }
        if let Some(theme) = self.theme {
            settings.ui.theme = theme;
        }
        if self.no_background {
            settings.background.enabled = false;
        }
    }
}
