//! Pointer position and the background tint derived from it

/// Pointer position normalized to the unit square (0,0 = top-left)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    /// Normalize a cell coordinate inside a `width` x `height` surface.
    ///
    /// Cell centers are used so that the first and last columns map to values
    /// strictly inside the unit interval. Degenerate surfaces map to the center.
    pub fn from_cell(column: u16, row: u16, width: u16, height: u16) -> Self {
        Self {
            x: normalize(column, width),
            y: normalize(row, height),
        }
    }

    /// Euclidean distance to another normalized point
    pub fn distance(&self, other: &PointerPosition) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

fn normalize(pos: u16, extent: u16) -> f32 {
    if extent == 0 {
        return 0.5;
    }
    let pos = pos.min(extent - 1) as f32;
    ((pos + 0.5) / extent as f32).clamp(0.0, 1.0)
}

/// Background color computed live from the pointer position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PointerColor {
    /// Derive a dark tint from the pointer position.
    ///
    /// Horizontal position drives red, vertical drives green, and blue falls
    /// as the pointer moves toward the bottom-right. Channels stay in a low
    /// band so foreground text keeps its contrast.
    pub fn from_position(pos: PointerPosition) -> Self {
        let x = pos.x.clamp(0.0, 1.0);
        let y = pos.y.clamp(0.0, 1.0);
        Self {
            r: channel(x),
            g: channel(y),
            b: channel(1.0 - (x + y) / 2.0),
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Map a unit value into the 16..=80 band
fn channel(t: f32) -> u8 {
    (16.0 + t * 64.0).round() as u8
}
