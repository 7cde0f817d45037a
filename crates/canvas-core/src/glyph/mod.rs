//! Glyph quantization.
//!
//! Each output character covers two vertically stacked pixels. Both pixels
//! are reduced to one of 16 luminance levels (composited over white) and
//! the pair indexes [`GLYPH_TABLE`], a fixed table of printable ASCII
//! ordered from densest (`[0][0]`) to blank (`[15][15]`).

mod quantize;
mod table;

pub use quantize::luminance_level;
pub use table::{glyph, GLYPH_TABLE, LEVELS};
