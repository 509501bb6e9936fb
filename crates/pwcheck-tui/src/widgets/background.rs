//! Dithered wave background.
//!
//! A terminal rendition of the animated backdrop: a two-sine wave field,
//! brightened around the pointer, quantized to a few shades with a 4x4 Bayer
//! ordered dither and painted as cell backgrounds. Rendering is a pure
//! function of the config, base color, pointer and tick.

use std::f32::consts::{PI, TAU};

use pwcheck_core::{BackgroundEffectConfig, PointerPosition};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::theme::palette;

/// Classic 4x4 Bayer threshold matrix (values 0..16)
const BAYER_4X4: [[u8; 4]; 4] = [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]];

/// Share of the wave color mixed into the base at full intensity
const WAVE_MIX: f32 = 0.6;

/// Extra intensity at the pointer center
const POINTER_BOOST: f32 = 0.5;

pub struct DitherBackground<'a> {
    config: &'a BackgroundEffectConfig,
    base: Color,
    pointer: Option<PointerPosition>,
    tick: u64,
}

impl<'a> DitherBackground<'a> {
    pub fn new(config: &'a BackgroundEffectConfig, base: Color) -> Self {
        Self {
            config,
            base,
            pointer: None,
            tick: 0,
        }
    }

    pub fn pointer(mut self, pointer: Option<PointerPosition>) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn time(&self) -> f32 {
        if self.config.animate {
            // Wrap to keep f32 precision over long sessions.
            (self.tick % 100_000) as f32 * self.config.wave_speed
        } else {
            0.0
        }
    }
}

impl Widget for DitherBackground<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let time = self.time();
        let pointer = if self.config.mouse_interaction {
            self.pointer
        } else {
            None
        };

        for row in 0..area.height {
            for column in 0..area.width {
                let pos = PointerPosition::from_cell(column, row, area.width, area.height);
                let mut intensity = wave_intensity(self.config, pos, time);
                if let Some(pointer) = pointer {
                    intensity += pointer_boost(self.config, pos, pointer);
                }
                let level = quantize(
                    intensity.clamp(0.0, 1.0),
                    column,
                    row,
                    self.config.color_levels,
                );
                let color = shade(self.base, self.config.wave_color, level);

                if let Some(cell) = buf.cell_mut((area.x + column, area.y + row)) {
                    cell.set_symbol(" ");
                    cell.set_bg(color);
                }
            }
        }
    }
}

/// Wave field value in 0..=1 at a normalized position
pub fn wave_intensity(config: &BackgroundEffectConfig, pos: PointerPosition, time: f32) -> f32 {
    let f = config.wave_frequency;
    let a = ((pos.x * f + time) * TAU).sin();
    let b = ((pos.y * f * 0.5 - time * 0.5) * TAU + pos.x * PI).sin();
    let n = (a + b) * 0.25 + 0.5;
    (n * (0.4 + config.wave_amplitude)).clamp(0.0, 1.0)
}

/// Added intensity from the pointer, fading linearly to zero at the radius
pub fn pointer_boost(
    config: &BackgroundEffectConfig,
    pos: PointerPosition,
    pointer: PointerPosition,
) -> f32 {
    if config.mouse_radius <= 0.0 {
        return 0.0;
    }
    let d = pos.distance(&pointer);
    if d >= config.mouse_radius {
        0.0
    } else {
        (1.0 - d / config.mouse_radius) * POINTER_BOOST
    }
}

/// Ordered-dither `intensity` to one of `levels` evenly spaced values in 0..=1
pub fn quantize(intensity: f32, column: u16, row: u16, levels: u8) -> f32 {
    let steps = (levels.max(2) - 1) as f32;
    let threshold =
        (BAYER_4X4[(row % 4) as usize][(column % 4) as usize] as f32 + 0.5) / 16.0 - 0.5;
    let q = (intensity * steps + threshold).round().clamp(0.0, steps);
    q / steps
}

/// Mix the wave color into `base` by `level`
pub fn shade(base: Color, wave_color: [f32; 3], level: f32) -> Color {
    let (r, g, b) = palette::rgb(base);
    let mix = level.clamp(0.0, 1.0) * WAVE_MIX;
    let channel = |base: u8, wave: f32| -> u8 {
        let base = base as f32;
        let target = wave.clamp(0.0, 1.0) * 255.0;
        (base + (target - base) * mix).round().clamp(0.0, 255.0) as u8
    };
    Color::Rgb(
        channel(r, wave_color[0]),
        channel(g, wave_color[1]),
        channel(b, wave_color[2]),
    )
}
