//! Conversion from decoded RGBA images.

use crate::color::Color;

use super::PixelBuffer;

/// Full-scale value of a widened 16-bit channel.
const CHANNEL_MAX: f64 = 0xffff as f64;

/// A decoded image that can be read pixel by pixel.
///
/// Channels are *premultiplied* by alpha and widened to `0..=0xFFFF`, the
/// convention of most decoders' generic RGBA accessors. Decoders that
/// produce straight alpha should premultiply before handing pixels over.
pub trait RgbaSource {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (usize, usize);

    /// Premultiplied `[r, g, b, a]` of pixel `(x, y)`.
    ///
    /// Only called with `x < width` and `y < height`.
    fn rgba(&self, x: usize, y: usize) -> [u16; 4];
}

impl PixelBuffer {
    /// Sample every pixel of a decoded image into a new buffer.
    ///
    /// Gray is the mean of the three color channels, un-premultiplied by
    /// alpha; fully transparent pixels get gray 0.
    ///
    /// # Example
    ///
    /// ```
    /// use canvas_core::{Color, PixelBuffer, RgbaSource};
    ///
    /// struct HalfWhite;
    ///
    /// impl RgbaSource for HalfWhite {
    ///     fn dimensions(&self) -> (usize, usize) {
    ///         (1, 1)
    ///     }
    ///     fn rgba(&self, _x: usize, _y: usize) -> [u16; 4] {
    ///         // white at 50% opacity, premultiplied
    ///         [0x8000, 0x8000, 0x8000, 0x8000]
    ///     }
    /// }
    ///
    /// let buffer = PixelBuffer::from_source(&HalfWhite);
    /// let color = buffer.get(0, 0).unwrap();
    /// assert_eq!(color.gray, 1.0);
    /// ```
    pub fn from_source<R: RgbaSource + ?Sized>(source: &R) -> Self {
        let (width, height) = source.dimensions();
        Self::from_fn(width, height, |x, y| {
            let [r, g, b, a] = source.rgba(x, y);
            let alpha = a as f64 / CHANNEL_MAX;
            let gray = (r as u32 + g as u32 + b as u32) as f64 / 3.0 / CHANNEL_MAX;
            if alpha > 0.0 {
                Color::new(gray / alpha, alpha)
            } else {
                Color::TRANSPARENT
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Row-major list of premultiplied pixels.
    struct Pixels {
        width: usize,
        height: usize,
        data: Vec<[u16; 4]>,
    }

    impl RgbaSource for Pixels {
        fn dimensions(&self) -> (usize, usize) {
            (self.width, self.height)
        }

        fn rgba(&self, x: usize, y: usize) -> [u16; 4] {
            self.data[y * self.width + x]
        }
    }

    #[test]
    fn test_from_source_dimensions() {
        let source = Pixels {
            width: 3,
            height: 2,
            data: vec![[0, 0, 0, 0xffff]; 6],
        };
        let buffer = PixelBuffer::from_source(&source);
        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 2);
    }

    #[test]
    fn test_from_source_opaque_channels_average() {
        let source = Pixels {
            width: 3,
            height: 1,
            data: vec![
                [0xffff, 0xffff, 0xffff, 0xffff],
                [0, 0, 0, 0xffff],
                [0xffff, 0, 0, 0xffff],
            ],
        };
        let buffer = PixelBuffer::from_source(&source);

        assert_eq!(buffer.get(0, 0), Some(Color::WHITE));
        assert_eq!(buffer.get(1, 0), Some(Color::BLACK));
        let red = buffer.get(2, 0).unwrap();
        assert!((red.gray - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(red.alpha, 1.0);
    }

    #[test]
    fn test_from_source_unpremultiplies() {
        // gray 0.5 at alpha 0.5, premultiplied to 0.25
        let source = Pixels {
            width: 1,
            height: 1,
            data: vec![[0x4000, 0x4000, 0x4000, 0x8000]],
        };
        let color = PixelBuffer::from_source(&source).get(0, 0).unwrap();
        assert!((color.gray - 0.5).abs() < 1e-12);
        assert!((color.alpha - 0x8000 as f64 / CHANNEL_MAX).abs() < 1e-12);
    }

    #[test]
    fn test_from_source_transparent_has_zero_gray() {
        let source = Pixels {
            width: 1,
            height: 1,
            data: vec![[0x1234, 0x1234, 0x1234, 0]],
        };
        let color = PixelBuffer::from_source(&source).get(0, 0).unwrap();
        assert_eq!(color, Color::TRANSPARENT);
    }
}
