//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use pwcheck_app::config::IconMode;
use pwcheck_core::{StrengthScore, ThemeKind};

/// Runtime icon resolver.
///
/// Created from `IconMode`, returns the appropriate icon string for each
/// icon slot based on the configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn shield(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f132}", // nf-fa-shield
            IconMode::Unicode => "\u{25c8}",   // ◈
        }
    }

    pub fn shield_alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0ecc}", // nf-md-shield_alert
            IconMode::Unicode => "\u{26a0}",    // ⚠
        }
    }

    pub fn shield_check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0565}", // nf-md-shield_check
            IconMode::Unicode => "\u{2714}",    // ✔
        }
    }

    pub fn eye(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f06e}", // nf-fa-eye
            IconMode::Unicode => "\u{25c9}",   // ◉
        }
    }

    pub fn eye_off(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f070}", // nf-fa-eye_slash
            IconMode::Unicode => "\u{25cc}",   // ◌
        }
    }

    pub fn sun(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f185}", // nf-fa-sun_o
            IconMode::Unicode => "\u{2600}",   // ☀
        }
    }

    pub fn moon(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f186}", // nf-fa-moon_o
            IconMode::Unicode => "\u{263e}",   // ☾
        }
    }

    pub fn sparkles(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0d0}", // nf-fa-magic
            IconMode::Unicode => "\u{2726}",   // ✦
        }
    }

    /// Tier icon: alert for weak, plain shield for medium, check for strong
    pub fn strength(&self, score: StrengthScore) -> &'static str {
        match score {
            StrengthScore::Weak => self.shield_alert(),
            StrengthScore::Medium => self.shield(),
            StrengthScore::Strong => self.shield_check(),
        }
    }

    /// Theme toggle indicator: sun while cyberpunk, moon while pastel
    pub fn theme_toggle(&self, theme: ThemeKind) -> &'static str {
        match theme {
            ThemeKind::Cyberpunk => self.sun(),
            ThemeKind::Pastel => self.moon(),
        }
    }

    /// Visibility control: eye-off while the password is shown
    pub fn visibility(&self, visible: bool) -> &'static str {
        if visible {
            self.eye_off()
        } else {
            self.eye()
        }
    }
}
