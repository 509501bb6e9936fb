//! Color palette shared by both themes.
//!
//! Values follow the Tailwind scale so the two themes keep their familiar
//! look when rendered as terminal RGB colors.

use ratatui::style::Color;

pub const BLACK: Color = Color::Rgb(0, 0, 0);
pub const WHITE: Color = Color::Rgb(255, 255, 255);

// --- Grays ---
pub const GRAY_400: Color = Color::Rgb(156, 163, 175);
pub const GRAY_500: Color = Color::Rgb(107, 114, 128);
pub const GRAY_800: Color = Color::Rgb(31, 41, 55);
pub const GRAY_900: Color = Color::Rgb(17, 24, 39);

// --- Cyberpunk accents ---
pub const PINK_500: Color = Color::Rgb(236, 72, 153);
pub const PINK_600: Color = Color::Rgb(219, 39, 119);
pub const PINK_800: Color = Color::Rgb(157, 23, 77);
pub const YELLOW_400: Color = Color::Rgb(250, 204, 21);

// --- Pastel accents ---
pub const PURPLE_100: Color = Color::Rgb(243, 232, 255);
pub const PURPLE_200: Color = Color::Rgb(233, 213, 255);
pub const PURPLE_400: Color = Color::Rgb(192, 132, 252);
pub const PURPLE_600: Color = Color::Rgb(147, 51, 234);
pub const PURPLE_700: Color = Color::Rgb(126, 34, 206);
pub const BLUE_500: Color = Color::Rgb(59, 130, 246);
pub const SOFT_WHITE: Color = Color::Rgb(250, 247, 255);

// --- Strength tiers ---
pub const RED_500: Color = Color::Rgb(239, 68, 68);
pub const YELLOW_500: Color = Color::Rgb(234, 179, 8);
pub const YELLOW_600: Color = Color::Rgb(202, 138, 4);
pub const EMERALD_500: Color = Color::Rgb(16, 185, 129);
pub const EMERALD_600: Color = Color::Rgb(5, 150, 105);

/// RGB components of a palette color, black for non-RGB colors
pub fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0, 0, 0),
    }
}
