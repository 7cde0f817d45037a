//! PixelBuffer to text conversion.

use std::fmt;

use crate::buffer::PixelBuffer;
use crate::color::Color;

use super::table::{glyph, LEVELS};

/// Quantize a color to a luminance level in `0..=15`.
///
/// The color is composited over white (transparent reads as 1.0), scaled
/// by 16, rounded to the nearest level and clamped, so pure white (16)
/// lands on 15.
#[inline]
pub fn luminance_level(color: Color) -> usize {
    let scaled = LEVELS as f64 * color.luminance_on_white();
    (scaled.round() as i64).clamp(0, LEVELS as i64 - 1) as usize
}

impl PixelBuffer {
    /// Render the buffer as text, two pixel rows per line.
    ///
    /// Returns `height / 2` lines of `width` characters; a trailing odd row
    /// is dropped. Each character encodes the pixel above (row `2r`) and the
    /// pixel below (row `2r + 1`).
    ///
    /// # Example
    ///
    /// ```
    /// use canvas_core::{Color, PixelBuffer};
    ///
    /// let buffer = PixelBuffer::from_fn(3, 2, |x, _| {
    ///     if x == 0 { Color::BLACK } else { Color::TRANSPARENT }
    /// });
    /// assert_eq!(buffer.text_lines(), vec!["M  ".to_string()]);
    /// ```
    pub fn text_lines(&self) -> Vec<String> {
        (0..self.height() / 2)
            .map(|row| {
                (0..self.width())
                    .map(|x| {
                        let upper = luminance_level(self.cell(x, 2 * row));
                        let lower = luminance_level(self.cell(x, 2 * row + 1));
                        glyph(upper, lower)
                    })
                    .collect()
            })
            .collect()
    }
}

/// Newline-joined [`text_lines`](PixelBuffer::text_lines), no trailing newline.
impl fmt::Display for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.text_lines().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::table::GLYPH_TABLE;

    #[test]
    fn test_luminance_level_extremes() {
        assert_eq!(luminance_level(Color::BLACK), 0);
        assert_eq!(luminance_level(Color::WHITE), 15);
        assert_eq!(luminance_level(Color::TRANSPARENT), 15);
    }

    #[test]
    fn test_luminance_level_rounds_to_nearest() {
        assert_eq!(luminance_level(Color::opaque(0.5)), 8);
        // 16 * 0.49 = 7.84
        assert_eq!(luminance_level(Color::opaque(0.49)), 8);
        // 16 * 0.47 = 7.52
        assert_eq!(luminance_level(Color::opaque(0.47)), 8);
        // 16 * 0.46 = 7.36
        assert_eq!(luminance_level(Color::opaque(0.46)), 7);
        // 16 * 0.99 = 15.84, rounds to 16 and clamps
        assert_eq!(luminance_level(Color::opaque(0.99)), 15);
        // 16 * 0.02 = 0.32
        assert_eq!(luminance_level(Color::opaque(0.02)), 0);
    }

    #[test]
    fn test_luminance_level_blends_toward_white() {
        // black at 50% over white reads as mid gray
        assert_eq!(luminance_level(Color::new(0.0, 0.5)), 8);
    }

    #[test]
    fn test_luminance_level_clamps_out_of_range_gray() {
        assert_eq!(luminance_level(Color::opaque(-1.0)), 0);
        assert_eq!(luminance_level(Color::opaque(3.0)), 15);
    }

    #[test]
    fn test_text_lines_dimensions() {
        let buffer = PixelBuffer::new(5, 6);
        let lines = buffer.text_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.chars().count() == 5));
    }

    #[test]
    fn test_text_lines_drops_odd_row() {
        let buffer = PixelBuffer::from_fn(2, 3, |_, _| Color::BLACK);
        assert_eq!(buffer.text_lines(), vec!["MM".to_string()]);
    }

    #[test]
    fn test_text_lines_pairs_rows() {
        // upper black, lower white
        let buffer = PixelBuffer::from_fn(1, 2, |_, y| if y == 0 { Color::BLACK } else { Color::WHITE });
        let expected = GLYPH_TABLE[0][15] as char;
        assert_eq!(buffer.text_lines(), vec![expected.to_string()]);
    }

    #[test]
    fn test_display_joins_lines() {
        let buffer = PixelBuffer::from_fn(2, 4, |_, y| if y < 2 { Color::BLACK } else { Color::WHITE });
        assert_eq!(buffer.to_string(), "MM\n  ");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(PixelBuffer::new(3, 1).to_string(), "");
    }
}
