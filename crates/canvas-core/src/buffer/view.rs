//! Non-copying rectangular views onto another source.

use crate::color::Color;
use crate::sample::{in_unit_square, Sampleable};

/// A sub-rectangle of a borrowed [`Sampleable`], re-exposed as its own unit
/// square.
///
/// The window maps its own `(u, v)` in `[0, 1] x [0, 1]` to
/// `(x + w * u, y + h * v)` in the source's normalized space. The
/// rectangle may extend beyond the source (those samples read transparent)
/// and `w`/`h` may be negative to mirror. The window only borrows its
/// source, so it cannot outlive it and never mutates it.
///
/// # Example
///
/// Cropping one cell out of a 2x1 atlas:
///
/// ```
/// use canvas_core::{Color, PixelBuffer, Sampleable};
///
/// let atlas = PixelBuffer::from_fn(2, 1, |x, _| Color::opaque(x as f64));
/// let right = atlas.sub(0.5, 0.0, 0.5, 1.0);
///
/// assert_eq!(right.color_at(0.0, 0.0), Color::opaque(1.0));
/// assert_eq!(right.color_at(1.2, 0.0), Color::TRANSPARENT);
/// ```
#[derive(Debug)]
pub struct ViewWindow<'a, S: ?Sized> {
    source: &'a S,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

// Manual impls: a derive would demand `S: Clone`.
impl<S: ?Sized> Clone for ViewWindow<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for ViewWindow<'_, S> {}

impl<'a, S: Sampleable + ?Sized> ViewWindow<'a, S> {
    pub fn new(source: &'a S, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { source, x, y, w, h }
    }

    /// Window rectangle as `(x, y, w, h)` in the source's normalized space.
    pub fn rect(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.w, self.h)
    }

    pub fn source(&self) -> &'a S {
        self.source
    }

    /// A nested window, expressed in this window's coordinates.
    pub fn sub(&self, x: f64, y: f64, w: f64, h: f64) -> ViewWindow<'_, Self> {
        ViewWindow::new(self, x, y, w, h)
    }
}

impl<S: Sampleable + ?Sized> Sampleable for ViewWindow<'_, S> {
    fn color_at(&self, x: f64, y: f64) -> Color {
        if !in_unit_square(x, y) {
            return Color::TRANSPARENT;
        }
        self.source
            .color_at(self.x + self.w * x, self.y + self.h * y)
    }
}
