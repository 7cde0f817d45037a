//! PNG fixtures encoded on the fly.

use std::path::{Path, PathBuf};

/// Encode raw 8-bit samples as a PNG.
pub fn encode_png(width: u32, height: u32, color_type: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(data).expect("PNG data");
    }
    out
}

/// 2x2 grayscale checkerboard: black top-left and bottom-right.
pub fn checker_png() -> Vec<u8> {
    encode_png(2, 2, png::ColorType::Grayscale, &[0, 255, 255, 0])
}

/// Square opaque black image.
pub fn solid_png(size: u32) -> Vec<u8> {
    let data = vec![0u8; (size * size) as usize];
    encode_png(size, size, png::ColorType::Grayscale, &data)
}

/// Pixel size of one glyph cell in [`font_atlas_png`].
pub const CELL: u32 = 2;

/// 16x8 font atlas with `CELL`-pixel cells: opaque black for codes where
/// `inked` returns true, transparent elsewhere.
pub fn font_atlas_png(inked: impl Fn(u32) -> bool) -> Vec<u8> {
    let (width, height) = (16 * CELL, 8 * CELL);
    let mut data = Vec::with_capacity((width * height * 2) as usize);
    for y in 0..height {
        for x in 0..width {
            let code = (y / CELL) * 16 + x / CELL;
            let alpha = if inked(code) { 255 } else { 0 };
            data.extend_from_slice(&[0, alpha]);
        }
    }
    encode_png(width, height, png::ColorType::GrayscaleAlpha, &data)
}

/// Write `bytes` into `dir` and return the file path.
pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}
