//! Mutable grayscale+alpha raster.

use crate::color::Color;
use crate::sample::{in_unit_square, Sampleable};

use super::ViewWindow;

/// A fixed-size 2D grid of [`Color`] cells, stored row-major.
///
/// A `PixelBuffer` is both a compositing destination (see [`PixelBuffer::plot`],
/// [`PixelBuffer::draw`], [`PixelBuffer::rotate_draw`]) and a [`Sampleable`]
/// source sampled by nearest neighbour. Dimensions never change after
/// construction.
///
/// # Example
///
/// ```
/// use canvas_core::{Color, PixelBuffer, Sampleable};
///
/// let mut buffer = PixelBuffer::new(4, 2);
/// buffer.plot(1, 0, 0.5, 1.0);
///
/// assert_eq!(buffer.get(1, 0), Some(Color::opaque(0.5)));
/// assert_eq!(buffer.color_at(0.3, 0.2), Color::opaque(0.5));
/// assert_eq!(buffer.color_at(-0.1, 0.2), Color::TRANSPARENT);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    /// Unpremultiplied luminance per cell, row-major.
    gray: Vec<f64>,
    /// Opacity per cell, row-major.
    alpha: Vec<f64>,
}

impl PixelBuffer {
    /// Allocate a fully transparent buffer.
    pub fn new(width: usize, height: usize) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            gray: vec![0.0; len],
            alpha: vec![0.0; len],
        }
    }

    /// Build a buffer by evaluating `f(x, y)` for every cell.
    ///
    /// Cells whose alpha is zero are stored as [`Color::TRANSPARENT`].
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Color,
    {
        let mut buffer = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let color = f(x, y);
                buffer.set(x, y, color);
            }
        }
        buffer
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the buffer has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Color of cell `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cell(x, y))
    }

    /// Overwrite cell `(x, y)` without compositing. Out-of-range is a no-op.
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y * self.width + x;
        self.alpha[idx] = color.alpha;
        self.gray[idx] = if color.alpha == 0.0 { 0.0 } else { color.gray };
    }

    /// Composite an unpremultiplied `(gray, alpha)` onto cell `(x, y)` with
    /// Porter-Duff "over".
    ///
    /// Coordinates outside the buffer, including negative ones, are ignored.
    /// This is the single primitive every drawing operation reduces to.
    pub fn plot(&mut self, x: i64, y: i64, gray: f64, alpha: f64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        let dst = Color::new(self.gray[idx], self.alpha[idx]);
        let out = Color::new(gray, alpha).over(dst);
        self.gray[idx] = out.gray;
        self.alpha[idx] = out.alpha;
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Color> + '_> + '_ {
        (0..self.height).map(move |y| (0..self.width).map(move |x| self.cell(x, y)))
    }

    /// A window onto the normalized rectangle `(x, y, w, h)` of this buffer.
    ///
    /// See [`ViewWindow`] for the coordinate mapping.
    pub fn sub(&self, x: f64, y: f64, w: f64, h: f64) -> ViewWindow<'_, Self> {
        ViewWindow::new(self, x, y, w, h)
    }

    #[inline]
    pub(crate) fn cell(&self, x: usize, y: usize) -> Color {
        let idx = y * self.width + x;
        Color::new(self.gray[idx], self.alpha[idx])
    }
}

impl Sampleable for PixelBuffer {
    /// Nearest-neighbour lookup: `floor(coord * dimension)`, with the
    /// `coord == 1.0` edge folded into the last row/column.
    fn color_at(&self, x: f64, y: f64) -> Color {
        if !in_unit_square(x, y) || self.is_empty() {
            return Color::TRANSPARENT;
        }
        let ix = ((x * self.width as f64) as usize).min(self.width - 1);
        let iy = ((y * self.height as f64) as usize).min(self.height - 1);
        self.cell(ix, iy)
    }
}
