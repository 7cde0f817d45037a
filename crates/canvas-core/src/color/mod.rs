//! Grayscale+alpha color samples and the "over" compositing primitive.
//!
//! Every color in this crate is a [`Color`]: an *unpremultiplied* luminance
//! paired with an opacity, both nominally in `0.0..=1.0`. Premultiplication
//! only happens transiently inside [`Color::over`].

/// A single grayscale+alpha sample.
///
/// `gray` is straight (unpremultiplied) luminance, `alpha` is opacity.
/// When `alpha == 0.0` the `gray` channel carries no information and is
/// kept at `0.0` by every operation in this crate.
///
/// # Example
///
/// ```
/// use canvas_core::Color;
///
/// let half_gray = Color::new(0.5, 1.0);
/// assert_eq!(half_gray.gray, 0.5);
/// assert!(Color::TRANSPARENT.is_transparent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Unpremultiplied luminance (0.0 = black, 1.0 = white).
    pub gray: f64,
    /// Opacity (0.0 = fully transparent, 1.0 = fully opaque).
    pub alpha: f64,
}

impl Color {
    /// Fully transparent; the value returned for any out-of-domain sample.
    pub const TRANSPARENT: Self = Self {
        gray: 0.0,
        alpha: 0.0,
    };

    /// Fully opaque black.
    pub const BLACK: Self = Self {
        gray: 0.0,
        alpha: 1.0,
    };

    /// Fully opaque white.
    pub const WHITE: Self = Self {
        gray: 1.0,
        alpha: 1.0,
    };

    #[inline]
    pub const fn new(gray: f64, alpha: f64) -> Self {
        Self { gray, alpha }
    }

    /// Opaque color with the given luminance.
    #[inline]
    pub const fn opaque(gray: f64) -> Self {
        Self { gray, alpha: 1.0 }
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.alpha == 0.0
    }

    /// Porter-Duff "source over destination".
    ///
    /// `self` is the incoming (source) color, `dst` the color already in the
    /// cell. Both operands are premultiplied, blended, and the result is
    /// un-premultiplied by the combined opacity:
    ///
    /// ```text
    /// a' = a_dst + a_src - a_dst * a_src
    /// g' = (g_dst * a_dst * (1 - a_src) + g_src * a_src) / a'      (a' > 0)
    /// g' = 0                                                       (a' = 0)
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// use canvas_core::Color;
    ///
    /// let dst = Color::new(0.2, 0.7);
    /// assert_eq!(Color::new(0.9, 1.0).over(dst), Color::new(0.9, 1.0));
    /// assert_eq!(Color::TRANSPARENT.over(dst), dst);
    /// ```
    pub fn over(self, dst: Color) -> Color {
        // A zero-alpha source leaves the cell as it was.
        if self.alpha == 0.0 {
            return if dst.alpha == 0.0 {
                Color::TRANSPARENT
            } else {
                dst
            };
        }

        // Same union as a_dst + a_src - a_dst*a_src, ordered so that an
        // opaque source yields exactly 1.0.
        let alpha = self.alpha + dst.alpha * (1.0 - self.alpha);
        if alpha == 0.0 {
            return Color::TRANSPARENT;
        }

        let gray = (dst.gray * dst.alpha * (1.0 - self.alpha) + self.gray * self.alpha) / alpha;
        Color { gray, alpha }
    }

    /// Luminance of this color composited over a white backdrop.
    ///
    /// Transparent samples read as 1.0 (background), opaque ones as their
    /// own `gray`.
    #[inline]
    pub fn luminance_on_white(self) -> f64 {
        self.gray * self.alpha + (1.0 - self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "expected {b}, got {a}");
    }

    #[test]
    fn test_over_transparent_source_is_identity() {
        let dst = Color::new(0.3, 0.4);
        assert_eq!(Color::new(0.8, 0.0).over(dst), dst);
    }

    #[test]
    fn test_over_transparent_source_onto_transparent_resets_gray() {
        // gray carried by a zero-alpha cell is meaningless and must collapse
        let dst = Color::new(0.6, 0.0);
        assert_eq!(Color::new(0.8, 0.0).over(dst), Color::TRANSPARENT);
    }

    #[test]
    fn test_over_opaque_source_overwrites() {
        for dst in [
            Color::TRANSPARENT,
            Color::BLACK,
            Color::new(0.1, 0.3),
            Color::new(0.9, 0.99),
        ] {
            assert_eq!(Color::new(0.25, 1.0).over(dst), Color::new(0.25, 1.0));
        }
    }

    #[test]
    fn test_over_half_alpha_onto_opaque() {
        let result = Color::new(1.0, 0.5).over(Color::BLACK);
        assert_close(result.alpha, 1.0);
        assert_close(result.gray, 0.5);
    }

    #[test]
    fn test_over_onto_transparent_keeps_source() {
        let result = Color::new(0.5, 0.5).over(Color::TRANSPARENT);
        assert_close(result.alpha, 0.5);
        assert_close(result.gray, 0.5);
    }

    #[test]
    fn test_luminance_on_white() {
        assert_close(Color::TRANSPARENT.luminance_on_white(), 1.0);
        assert_close(Color::BLACK.luminance_on_white(), 0.0);
        assert_close(Color::WHITE.luminance_on_white(), 1.0);
        assert_close(Color::new(0.0, 0.5).luminance_on_white(), 0.5);
    }
}
