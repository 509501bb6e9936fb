//! Configuration surface of the animated background effect

use serde::{Deserialize, Serialize};

use crate::theme::ThemeKind;

/// Parameters consumed by the dithered wave background.
///
/// The renderer treats these as opaque inputs; nothing else in the
/// application depends on how they are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundEffectConfig {
    /// Wave color as linear RGB in 0.0..=1.0
    pub wave_color: [f32; 3],
    /// Advance the wave over time
    pub animate: bool,
    /// Brighten the field around the pointer
    pub mouse_interaction: bool,
    /// Radius of pointer influence in normalized units
    pub mouse_radius: f32,
    /// Number of quantized shades
    pub color_levels: u8,
    pub wave_amplitude: f32,
    pub wave_frequency: f32,
    pub wave_speed: f32,
}

impl BackgroundEffectConfig {
    pub const CYBERPUNK_WAVE: [f32; 3] = [0.7, 0.4, 0.7];
    pub const PASTEL_WAVE: [f32; 3] = [0.6, 0.7, 0.9];

    /// Fixed parameters with the wave color taken from the theme
    pub fn for_theme(theme: ThemeKind) -> Self {
        let wave_color = match theme {
            ThemeKind::Cyberpunk => Self::CYBERPUNK_WAVE,
            ThemeKind::Pastel => Self::PASTEL_WAVE,
        };
        Self {
            wave_color,
            animate: true,
            mouse_interaction: true,
            mouse_radius: 0.3,
            color_levels: 4,
            wave_amplitude: 0.3,
            wave_frequency: 3.0,
            wave_speed: 0.05,
        }
    }

    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn with_mouse_interaction(mut self, enabled: bool) -> Self {
        self.mouse_interaction = enabled;
        self
    }
}

impl Default for BackgroundEffectConfig {
    fn default() -> Self {
        Self::for_theme(ThemeKind::default())
    }
}
