//! Image sources for the canvas: PNG decoding, the built-in sprite, and
//! font atlas text.

pub mod decode;
pub mod fallback;
pub mod text;

pub use decode::{decode_png_bytes, decode_png_file, decode_png_reader, DecodedPng};
pub use fallback::fallback_sprite;
pub use text::{AtlasLayout, FontAtlas};
