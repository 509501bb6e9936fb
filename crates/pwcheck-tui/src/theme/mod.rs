//! Theme presentation layer.
//!
//! This module provides:
//! - `palette` - Raw color constants
//! - `styles` - The per-theme style table (`ThemeStyles`)
//! - `icons` - Glyphs with Nerd Font and Unicode variants

pub mod icons;
pub mod palette;
pub mod styles;

pub use icons::IconSet;
pub use styles::{StrengthStyle, ThemeStyles};
