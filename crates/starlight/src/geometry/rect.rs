//! Rectangle value type

use serde::{Deserialize, Serialize};

/// Signed pixel rectangle
///
/// Components may go negative while composing offsets or bevel strips;
/// nothing here clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i64,
    /// Top edge
    pub y: i64,
    /// Width in pixels
    pub width: i64,
    /// Height in pixels
    pub height: i64,
}

impl Rect {
    /// The empty rectangle at the origin, used as the frame for root elements
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a rectangle
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self { x, y, width, height }
    }

    /// Set the size, keeping the position
    pub fn resize(&mut self, width: i64, height: i64) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Move by `(dx, dy)`
    pub fn offset(&mut self, dx: i64, dy: i64) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    /// Top-left position that centers `inner` in `outer`
    ///
    /// Uses truncating division on `outer.x + outer.width`, so odd sizes bias
    /// toward the origin and a non-zero `outer` origin is only half applied.
    pub const fn center(inner: &Self, outer: &Self) -> (i64, i64) {
        let center_x = (outer.x + outer.width) / 2;
        let center_y = (outer.y + outer.height) / 2;

        (center_x - inner.width / 2, center_y - inner.height / 2)
    }

    /// Whether `(x, y)` falls inside `[x, x+width) × [y, y+height)`
    pub const fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }
}
