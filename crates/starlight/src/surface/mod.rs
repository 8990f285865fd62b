//! Pixel surface and drawing primitives
//!
//! `Canvas` is the seam between the painters (font, shading, element tree)
//! and whatever owns the pixels. `PixelSurface` is the device-backed
//! implementation; tests plug in recording canvases.

pub mod framebuffer;

pub use framebuffer::PixelSurface;

/// Packed `0xAARRGGBB` pixel word
pub type Color = u32;

/// Build an opaque color from 8-bit channels
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Split a color into `[r, g, b, a]` bytes
pub const fn to_rgba(color: Color) -> [u8; 4] {
    [
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
        (color >> 24) as u8,
    ]
}

/// Anything that accepts individually clipped pixel writes
pub trait Canvas {
    /// Write one pixel; coordinates outside the canvas are ignored
    fn put_pixel(&mut self, x: i64, y: i64, color: Color);

    /// Draw a line with inclusive endpoints (integer Bresenham, no anti-aliasing)
    fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, color: Color) {
        let dx = (x2 - x1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let dy = -(y2 - y1).abs();
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        let (mut x, mut y) = (x1, y1);
        loop {
            self.put_pixel(x, y, color);

            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill `[x, x+width) × [y, y+height)` one clipped pixel at a time
    fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64, color: Color) {
        for yy in y..y + height {
            for xx in x..x + width {
                self.put_pixel(xx, yy, color);
            }
        }
    }
}
