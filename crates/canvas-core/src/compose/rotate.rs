//! Rotated blit.
//!
//! The source rectangle `(x, y, w, h)` is rotated by `theta` about its center
//! `(cx, cy)`. Rasterization visits only the cells inside the rotated
//! rectangle: the axis-aligned bound selects the columns, and for each column
//! the vertical span is the intersection of two slabs, one bounded by the
//! rectangle's top/bottom edges and one by its left/right edges.
//!
//! For a column at horizontal offset `d = ix - cx`:
//!
//! ```text
//! top/bottom slab:  cy + d * sin/cos  ±  |ysize / cos|
//! left/right slab:  cy - d * cos/sin  ±  |xsize / sin|
//! ```
//!
//! Each slab degenerates when its divisor is zero, so `cos == 0` and
//! `sin == 0` are handled separately.

use crate::buffer::PixelBuffer;
use crate::sample::Sampleable;

/// Geometry of a rectangle rotated about its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedRect {
    /// Unrotated width (signed; negative mirrors).
    pub w: f64,
    /// Unrotated height (signed; negative mirrors).
    pub h: f64,
    pub cx: f64,
    pub cy: f64,
    pub sin: f64,
    pub cos: f64,
    /// Half extents `|w| / 2` and `|h| / 2`.
    pub xsize: f64,
    pub ysize: f64,
}

/// Axis-aligned bounding box `(xmin, ymin, xmax, ymax)`.
pub type Bounds = (f64, f64, f64, f64);

impl RotatedRect {
    /// Rectangle `(x, y, w, h)` rotated by `degrees` about its center.
    pub fn new(x: f64, y: f64, w: f64, h: f64, degrees: f64) -> Self {
        let theta = degrees.to_radians();
        let (sin, cos) = theta.sin_cos();
        Self {
            w,
            h,
            cx: x + w / 2.0,
            cy: y + h / 2.0,
            sin,
            cos,
            xsize: w.abs() / 2.0,
            ysize: h.abs() / 2.0,
        }
    }

    /// Axis-aligned bounding box of the rotated rectangle.
    pub fn bounds(&self) -> Bounds {
        let (sin, cos) = (self.sin.abs(), self.cos.abs());
        let half_w = cos * self.xsize + sin * self.ysize;
        let half_h = sin * self.xsize + cos * self.ysize;
        (
            self.cx - half_w,
            self.cy - half_h,
            self.cx + half_w,
            self.cy + half_h,
        )
    }

    /// Half-open column range `[x0, x1)` covered by the bounding box.
    pub fn column_range(&self) -> (i64, i64) {
        let (xmin, _, xmax, _) = self.bounds();
        (xmin.ceil() as i64, xmax.ceil() as i64)
    }

    /// Half-open row range `[y0, y1)` inside the rotated rectangle at
    /// column `ix`.
    pub fn column_span(&self, ix: i64) -> (i64, i64) {
        if self.cos == 0.0 {
            // Edge-on: the vertical extent is the rectangle's half width.
            return (
                (self.cy - self.xsize).ceil() as i64,
                (self.cy + self.xsize).ceil() as i64,
            );
        }
        if self.sin == 0.0 {
            return (
                (self.cy - self.ysize).ceil() as i64,
                (self.cy + self.ysize).ceil() as i64,
            );
        }

        let d = ix as f64 - self.cx;
        let base_w = self.cy + d * self.sin / self.cos;
        let diff_w = (self.ysize / self.cos).abs();
        let base_h = self.cy - d * self.cos / self.sin;
        let diff_h = (self.xsize / self.sin).abs();

        let y0 = (base_w - diff_w).max(base_h - diff_h).ceil() as i64;
        let y1 = (base_w + diff_w).min(base_h + diff_h).ceil() as i64;
        (y0, y1)
    }

    /// Source-normalized coordinate sampled for destination cell `(ix, iy)`.
    pub fn source_coords(&self, ix: i64, iy: i64) -> (f64, f64) {
        let dx = ix as f64 - self.cx;
        let dy = iy as f64 - self.cy;
        (
            (dx * self.cos + dy * self.sin + self.w / 2.0) / self.w,
            (dy * self.cos - dx * self.sin + self.h / 2.0) / self.h,
        )
    }
}

impl PixelBuffer {
    /// Blit `source` into the rectangle `(x, y, w, h)` rotated by `degrees`
    /// about its center.
    ///
    /// Positive angles rotate clockwise on screen (y grows downward). Zero
    /// or non-finite extents and non-finite angles draw nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use canvas_core::{Color, PixelBuffer};
    ///
    /// let bar = PixelBuffer::from_fn(1, 1, |_, _| Color::BLACK);
    /// let mut screen = PixelBuffer::new(10, 10);
    ///
    /// // 8x2 horizontal bar turned upright
    /// screen.rotate_draw(&bar, 1.0, 4.0, 8.0, 2.0, 90.0);
    ///
    /// assert_eq!(screen.get(5, 2), Some(Color::BLACK));
    /// assert_eq!(screen.get(2, 5), Some(Color::TRANSPARENT));
    /// ```
    pub fn rotate_draw<S: Sampleable + ?Sized>(
        &mut self,
        source: &S,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        degrees: f64,
    ) {
        if w == 0.0
            || h == 0.0
            || ![x, y, w, h, degrees].iter().all(|v| v.is_finite())
        {
            return;
        }

        let rect = RotatedRect::new(x, y, w, h, degrees);
        let (xmin, ymin, xmax, ymax) = rect.bounds();
        if xmax < 0.0 || ymax < 0.0 || xmin > self.width() as f64 || ymin > self.height() as f64 {
            return;
        }

        let (x0, x1) = rect.column_range();
        let x0 = x0.max(0);
        let x1 = x1.min(self.width() as i64);
        for ix in x0..x1 {
            let (y0, y1) = rect.column_span(ix);
            let y0 = y0.max(0);
            let y1 = y1.min(self.height() as i64);
            for iy in y0..y1 {
                let (u, v) = rect.source_coords(ix, iy);
                let color = source.color_at(u, v);
                self.plot(ix, iy, color.gray, color.alpha);
            }
        }
    }
}
