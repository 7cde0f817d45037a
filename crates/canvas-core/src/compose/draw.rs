//! Axis-aligned blit.

use crate::buffer::PixelBuffer;
use crate::sample::Sampleable;

impl PixelBuffer {
    /// Blit `source` into the destination rectangle `(x, y, w, h)`.
    ///
    /// Every destination cell `(ix, iy)` in the covered integer range is
    /// inverse-mapped to `((ix - x) / w, (iy - y) / h)`, sampled and
    /// composited with [`plot`](PixelBuffer::plot). The range is inclusive
    /// at both ends, so one extra column and row past the rectangle are
    /// visited; they sample just outside the unit square and normally
    /// read transparent.
    ///
    /// Negative `w` or `h` flip the image. Zero or non-finite extents draw
    /// nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use canvas_core::{Color, PixelBuffer};
    ///
    /// let sprite = PixelBuffer::from_fn(1, 1, |_, _| Color::BLACK);
    /// let mut screen = PixelBuffer::new(4, 4);
    /// screen.draw(&sprite, 1.0, 1.0, 2.0, 2.0);
    ///
    /// assert_eq!(screen.get(1, 1), Some(Color::BLACK));
    /// assert_eq!(screen.get(0, 0), Some(Color::TRANSPARENT));
    /// ```
    pub fn draw<S: Sampleable + ?Sized>(&mut self, source: &S, x: f64, y: f64, w: f64, h: f64) {
        if w == 0.0 || h == 0.0 || !(x.is_finite() && y.is_finite() && w.is_finite() && h.is_finite())
        {
            return;
        }

        let (left, right) = if w < 0.0 { (x + w, x) } else { (x, x + w) };
        let (top, bottom) = if h < 0.0 { (y + h, y) } else { (y, y + h) };
        if right < 0.0 || bottom < 0.0 || left > self.width() as f64 || top > self.height() as f64 {
            return;
        }

        let (x0, x1) = cell_range(x, w);
        let (y0, y1) = cell_range(y, h);

        // Cells outside the buffer would be discarded by plot anyway.
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width() as i64 - 1);
        let y1 = y1.min(self.height() as i64 - 1);

        for ix in x0..=x1 {
            for iy in y0..=y1 {
                let color = source.color_at((ix as f64 - x) / w, (iy as f64 - y) / h);
                self.plot(ix, iy, color.gray, color.alpha);
            }
        }
    }
}

/// Inclusive integer range spanned by `start .. start + extent`, truncating
/// both ends toward zero and ordering them when `extent` is negative.
fn cell_range(start: f64, extent: f64) -> (i64, i64) {
    let a = start as i64;
    let b = (start + extent) as i64;
    if extent < 0.0 {
        (b, a)
    } else {
        (a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn ramp(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |x, y| {
            Color::opaque((y * width + x) as f64 / (width * height) as f64)
        })
    }

    fn opaque_count(buffer: &PixelBuffer) -> usize {
        buffer
            .rows()
            .flatten()
            .filter(|color| color.alpha > 0.0)
            .count()
    }

    #[test]
    fn test_cell_range_orders_endpoints() {
        assert_eq!(cell_range(1.0, 3.0), (1, 4));
        assert_eq!(cell_range(4.0, -3.0), (1, 4));
        assert_eq!(cell_range(1.5, 2.0), (1, 3));
    }

    #[test]
    fn test_draw_identity_reproduces_source() {
        let source = ramp(4, 4);
        let mut screen = PixelBuffer::new(4, 4);
        screen.draw(&source, 0.0, 0.0, 4.0, 4.0);
        assert_eq!(screen, source);
    }

    #[test]
    fn test_draw_scales_up() {
        let source = ramp(2, 2);
        let mut screen = PixelBuffer::new(4, 4);
        screen.draw(&source, 0.0, 0.0, 4.0, 4.0);

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(screen.get(x, y), source.get(x / 2, y / 2), "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_draw_negative_width_flips() {
        let source = ramp(4, 1);
        let mut screen = PixelBuffer::new(4, 1);
        screen.draw(&source, 4.0, 0.0, -4.0, 1.0);

        // destination column 1 samples u = (1 - 4) / -4 = 0.75
        assert_eq!(screen.get(1, 0), source.get(3, 0));
        assert_eq!(screen.get(3, 0), source.get(1, 0));
        // column 0 samples u = 1.0, the last source column
        assert_eq!(screen.get(0, 0), source.get(3, 0));
    }

    #[test]
    fn test_draw_negative_extent_partly_on_screen() {
        // Spans x in [-2, 2]; must not be culled
        let source = PixelBuffer::from_fn(1, 1, |_, _| Color::BLACK);
        let mut screen = PixelBuffer::new(4, 4);
        screen.draw(&source, 2.0, 0.0, -4.0, 4.0);
        assert_eq!(screen.get(0, 0), Some(Color::BLACK));
        assert_eq!(screen.get(1, 1), Some(Color::BLACK));
    }

    #[test]
    fn test_draw_zero_extent_is_noop() {
        let source = ramp(2, 2);
        let mut screen = PixelBuffer::new(4, 4);
        screen.draw(&source, 1.0, 1.0, 0.0, 2.0);
        screen.draw(&source, 1.0, 1.0, 2.0, 0.0);
        assert_eq!(screen, PixelBuffer::new(4, 4));
    }

    #[test]
    fn test_draw_non_finite_is_noop() {
        let source = ramp(2, 2);
        let mut screen = PixelBuffer::new(4, 4);
        screen.draw(&source, f64::NAN, 0.0, 2.0, 2.0);
        screen.draw(&source, 0.0, 0.0, f64::INFINITY, 2.0);
        assert_eq!(opaque_count(&screen), 0);
    }

    #[test]
    fn test_draw_culls_offscreen() {
        let source = ramp(2, 2);
        let mut screen = PixelBuffer::new(4, 4);
        screen.draw(&source, -10.0, 0.0, 5.0, 4.0);
        screen.draw(&source, 0.0, 5.0, 4.0, 4.0);
        assert_eq!(opaque_count(&screen), 0);
    }

    #[test]
    fn test_draw_clips_at_edges() {
        let source = PixelBuffer::from_fn(1, 1, |_, _| Color::BLACK);
        let mut screen = PixelBuffer::new(4, 4);
        screen.draw(&source, 2.0, 2.0, 10.0, 10.0);
        assert_eq!(opaque_count(&screen), 4);
        assert_eq!(screen.get(3, 3), Some(Color::BLACK));
    }

    #[test]
    fn test_draw_composites_over_background() {
        let half = PixelBuffer::from_fn(1, 1, |_, _| Color::new(1.0, 0.5));
        let mut screen = PixelBuffer::from_fn(2, 2, |_, _| Color::BLACK);
        screen.draw(&half, 0.0, 0.0, 2.0, 2.0);
        let color = screen.get(0, 0).unwrap();
        assert!((color.gray - 0.5).abs() < 1e-12);
        assert!((color.alpha - 1.0).abs() < 1e-12);
    }
}
