//! canvas-core: grayscale compositing for terminal text art
//!
//! This library turns raster images into monochrome text. Images live in a
//! [`PixelBuffer`] of grayscale+alpha cells, are composited onto a
//! destination buffer with positioning, scaling and rotation, and the
//! destination is finally quantized into printable glyphs at double vertical
//! resolution (each character encodes two stacked pixels).
//!
//! # Quick Start
//!
//! ```
//! use canvas_core::{Color, PixelBuffer};
//!
//! // A 2x2 sprite: black, white / mid gray, transparent
//! let sprite = PixelBuffer::from_fn(2, 2, |x, y| match (x, y) {
//!     (0, 0) => Color::BLACK,
//!     (1, 0) => Color::WHITE,
//!     (0, 1) => Color::opaque(0.5),
//!     _ => Color::TRANSPARENT,
//! });
//!
//! // 4 columns, 4 pixel rows = 2 text lines
//! let mut screen = PixelBuffer::new(4, 4);
//! screen.draw(&sprite, 0.0, 0.0, 4.0, 4.0);
//!
//! assert_eq!(screen.text_lines(), vec!["MM  ", "rr  "]);
//! ```
//!
//! # Sampling
//!
//! Everything drawable implements [`Sampleable`]: a single method answering
//! "what color is at normalized `(x, y)`?". Coordinates outside the unit
//! square read as [`Color::TRANSPARENT`]. [`PixelBuffer`] samples by nearest
//! neighbour; [`ViewWindow`] crops, offsets or mirrors another source without
//! copying it, which is how glyphs are cut out of a font atlas:
//!
//! ```
//! use canvas_core::{Color, PixelBuffer, Sampleable};
//!
//! // 16x8 cell atlas, one pixel per cell
//! let atlas = PixelBuffer::from_fn(16, 8, |x, y| Color::opaque(((y * 16 + x) % 2) as f64));
//! let code = 'A' as usize;
//! let cell = atlas.sub((code % 16) as f64 / 16.0, (code / 16) as f64 / 8.0, 1.0 / 16.0, 1.0 / 8.0);
//!
//! assert_eq!(cell.color_at(0.5, 0.5), Color::opaque(1.0));
//! ```
//!
//! # Compositing
//!
//! All drawing reduces to [`PixelBuffer::plot`], Porter-Duff "over" on
//! unpremultiplied values:
//!
//! ```text
//! a' = a_dst + a_src - a_dst * a_src
//! g' = (g_dst * a_dst * (1 - a_src) + g_src * a_src) / a'
//! ```
//!
//! with `g' = 0` whenever `a' = 0`. [`PixelBuffer::draw`] performs an
//! axis-aligned blit with optional flip; [`PixelBuffer::rotate_draw`] rotates
//! about the rectangle's center and only visits cells inside the rotated
//! rectangle.
//!
//! # Quantization
//!
//! [`PixelBuffer::text_lines`] maps every vertical pixel pair through the
//! 16x16 [`GLYPH_TABLE`]. Pixels are composited over a white backdrop
//! first, so transparent areas print as blanks.
//!
//! All operations are total: out-of-range coordinates, degenerate
//! rectangles and empty buffers are handled as no-ops or transparent
//! samples rather than errors.

pub mod buffer;
pub mod color;
pub mod compose;
pub mod glyph;
pub mod sample;


pub use buffer::{PixelBuffer, RgbaSource, ViewWindow};
pub use color::Color;
pub use compose::RotatedRect;
pub use glyph::{luminance_level, GLYPH_TABLE};
pub use sample::{in_unit_square, Sampleable};
