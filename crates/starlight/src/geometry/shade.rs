//! Rectangle painters built on [`Canvas`]

use super::Rect;
use crate::surface::{Canvas, Color};

/// Trace the four borders of `rect`
///
/// Edges run from `x` to `x + width` inclusive, so the outline covers one
/// more column and row than a fill of the same rectangle.
pub fn outline<C: Canvas + ?Sized>(canvas: &mut C, rect: &Rect, color: Color) {
    let (x1, y1) = (rect.x, rect.y);
    let (x2, y2) = (rect.x + rect.width, rect.y + rect.height);

    canvas.line(x1, y1, x2, y1, color);
    canvas.line(x1, y1, x1, y2, color);
    canvas.line(x1, y2, x2, y2, color);
    canvas.line(x2, y1, x2, y2, color);
}

/// Flat fill of `rect`
pub fn fill<C: Canvas + ?Sized>(canvas: &mut C, rect: &Rect, color: Color) {
    canvas.fill_rect(rect.x, rect.y, rect.width, rect.height, color);
}

/// Bevel overlay: `light` strips on top and left, `dark` on bottom and right
///
/// The dark right strip starts `edge` pixels down so the top-right corner
/// stays light; the dark bottom strip is drawn last-but-one and wins the
/// bottom-left corner.
pub fn bevel<C: Canvas + ?Sized>(canvas: &mut C, rect: &Rect, edge: i64, light: Color, dark: Color) {
    canvas.fill_rect(rect.x, rect.y, rect.width, edge, light);
    canvas.fill_rect(rect.x, rect.y, edge, rect.height, light);

    canvas.fill_rect(rect.x, rect.y + rect.height - edge, rect.width, edge, dark);
    canvas.fill_rect(
        rect.x + rect.width - edge,
        rect.y + edge,
        edge,
        rect.height - edge,
        dark,
    );
}

/// Raised rectangle: `base` fill followed by a [`bevel`] of width `edge`
///
/// Only looks right while `edge < min(width, height) / 2`.
pub fn trishade<C: Canvas + ?Sized>(
    canvas: &mut C,
    rect: &Rect,
    edge: i64,
    light: Color,
    base: Color,
    dark: Color,
) {
    fill(canvas, rect, base);
    bevel(canvas, rect, edge, light, dark);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::{memory_surface, RecordingCanvas};

    const L: Color = 0xFFAA_AAAA;
    const B: Color = 0xFF77_7777;
    const D: Color = 0xFF33_3333;

    #[test]
    fn test_trishade_geometry() {
        let mut surface = memory_surface(64, 40);
        let rect = Rect::new(10, 10, 40, 20);
        trishade(&mut surface, &rect, 3, L, B, D);

        for y in 0..40 {
            for x in 0..64 {
                let expected = if !rect.contains(x, y) {
                    0
                } else if y >= 27 || (x >= 47 && y >= 13) {
                    D
                } else if y < 13 || x < 13 {
                    L
                } else {
                    B
                };
                assert_eq!(surface.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fill_matches_rect_exactly() {
        let mut surface = memory_surface(16, 16);
        let rect = Rect::new(2, 3, 4, 5);
        fill(&mut surface, &rect, B);

        let painted = surface.pixels().iter().filter(|&&p| p == B).count();
        assert_eq!(painted, 20);
        assert_eq!(surface.pixel(2, 3), Some(B));
        assert_eq!(surface.pixel(5, 7), Some(B));
        assert_eq!(surface.pixel(6, 7), Some(0));
    }

    #[test]
    fn test_outline_covers_inclusive_border() {
        let mut surface = memory_surface(16, 16);
        outline(&mut surface, &Rect::new(1, 1, 4, 3), L);

        for (x, y) in [(1, 1), (5, 1), (1, 4), (5, 4), (3, 1), (3, 4), (1, 2), (5, 3)] {
            assert_eq!(surface.pixel(x, y), Some(L), "border ({x}, {y})");
        }
        assert_eq!(surface.pixel(3, 2), Some(0));
        assert_eq!(surface.pixel(6, 1), Some(0));
    }

    #[test]
    fn test_bevel_paint_order() {
        let mut canvas = RecordingCanvas::default();
        bevel(&mut canvas, &Rect::new(0, 0, 4, 4), 1, L, D);

        // top 4 + left 4 + bottom 4 + right 3
        assert_eq!(canvas.writes.len(), 15);
        assert!(canvas.writes[..8].iter().all(|w| w.2 == L));
        assert!(canvas.writes[8..].iter().all(|w| w.2 == D));
        assert_eq!(canvas.writes[12], (3, 1, D));
    }
}
