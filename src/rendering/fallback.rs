//! Built-in sprite used when no image can be loaded.

use canvas_core::{Color, PixelBuffer};

/// A `size x size` shaded disc on a transparent background.
///
/// The disc is dark with a lighter ring and a bright highlight toward the
/// top-left, so rotation is visible when it is drawn with a wobble.
pub fn fallback_sprite(size: usize) -> PixelBuffer {
    let radius = size as f64 / 2.0;
    PixelBuffer::from_fn(size, size, |x, y| {
        // Cell centers, relative to the disc center, in units of the radius.
        let dx = (x as f64 + 0.5 - radius) / radius;
        let dy = (y as f64 + 0.5 - radius) / radius;
        let r = (dx * dx + dy * dy).sqrt();
        if r > 1.0 {
            return Color::TRANSPARENT;
        }

        let highlight = ((dx + 0.35).powi(2) + (dy + 0.35).powi(2)).sqrt();
        let gray = if highlight < 0.25 {
            0.95
        } else if r > 0.8 {
            0.6
        } else {
            0.15 + 0.3 * r
        };
        Color::opaque(gray)
    })
}
