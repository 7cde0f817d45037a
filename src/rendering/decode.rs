//! PNG decoding into [`PixelBuffer`]s.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use canvas_core::{PixelBuffer, RgbaSource};

use crate::error::CanvasError;

/// A decoded PNG frame normalized to 8- or 16-bit gray/RGB with optional alpha.
pub struct DecodedPng {
    width: usize,
    height: usize,
    color_type: png::ColorType,
    sixteen_bit: bool,
    line_size: usize,
    data: Vec<u8>,
}

impl DecodedPng {
    /// Decode the first frame of a PNG stream.
    ///
    /// Palette images, tRNS chunks and sub-byte bit depths are expanded by
    /// the decoder so only the four direct color types remain.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CanvasError> {
        let mut decoder = png::Decoder::new(reader);
        decoder.set_transformations(png::Transformations::EXPAND);
        let mut reader = decoder.read_info()?;

        let mut data = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut data)?;
        data.truncate(info.buffer_size());

        if info.width == 0 || info.height == 0 {
            return Err(CanvasError::UnsupportedImage {
                width: info.width,
                height: info.height,
            });
        }

        let sixteen_bit = match info.bit_depth {
            png::BitDepth::Eight => false,
            png::BitDepth::Sixteen => true,
            other => {
                return Err(CanvasError::Decode(format!(
                    "unexpected bit depth after expansion: {other:?}"
                )))
            }
        };
        if info.color_type == png::ColorType::Indexed {
            return Err(CanvasError::Decode(
                "palette image was not expanded".to_string(),
            ));
        }

        tracing::debug!(
            width = info.width,
            height = info.height,
            color_type = ?info.color_type,
            sixteen_bit,
            "Decoded PNG"
        );

        Ok(Self {
            width: info.width as usize,
            height: info.height as usize,
            color_type: info.color_type,
            sixteen_bit,
            line_size: info.line_size,
            data,
        })
    }

    pub fn color_type(&self) -> png::ColorType {
        self.color_type
    }

    fn channels(&self) -> usize {
        match self.color_type {
            png::ColorType::Grayscale | png::ColorType::Indexed => 1,
            png::ColorType::GrayscaleAlpha => 2,
            png::ColorType::Rgb => 3,
            png::ColorType::Rgba => 4,
        }
    }

    /// Channel `c` of pixel `(x, y)`, widened to 16 bits.
    fn sample(&self, x: usize, y: usize, c: usize) -> u16 {
        let bytes = if self.sixteen_bit { 2 } else { 1 };
        let offset = y * self.line_size + (x * self.channels() + c) * bytes;
        if self.sixteen_bit {
            u16::from_be_bytes([self.data[offset], self.data[offset + 1]])
        } else {
            self.data[offset] as u16 * 0x101
        }
    }

    /// Straight (non-premultiplied) RGBA of pixel `(x, y)`.
    fn straight_rgba(&self, x: usize, y: usize) -> [u16; 4] {
        match self.color_type {
            png::ColorType::Grayscale | png::ColorType::Indexed => {
                let v = self.sample(x, y, 0);
                [v, v, v, 0xffff]
            }
            png::ColorType::GrayscaleAlpha => {
                let v = self.sample(x, y, 0);
                [v, v, v, self.sample(x, y, 1)]
            }
            png::ColorType::Rgb => [
                self.sample(x, y, 0),
                self.sample(x, y, 1),
                self.sample(x, y, 2),
                0xffff,
            ],
            png::ColorType::Rgba => [
                self.sample(x, y, 0),
                self.sample(x, y, 1),
                self.sample(x, y, 2),
                self.sample(x, y, 3),
            ],
        }
    }
}

impl RgbaSource for DecodedPng {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn rgba(&self, x: usize, y: usize) -> [u16; 4] {
        let [r, g, b, a] = self.straight_rgba(x, y);
        let premultiply = |c: u16| (c as u32 * a as u32 / 0xffff) as u16;
        [premultiply(r), premultiply(g), premultiply(b), a]
    }
}

/// Decode a PNG stream into a [`PixelBuffer`].
pub fn decode_png_reader<R: Read>(reader: R) -> Result<PixelBuffer, CanvasError> {
    let decoded = DecodedPng::from_reader(reader)?;
    Ok(PixelBuffer::from_source(&decoded))
}

/// Decode PNG bytes into a [`PixelBuffer`].
pub fn decode_png_bytes(bytes: &[u8]) -> Result<PixelBuffer, CanvasError> {
    decode_png_reader(Cursor::new(bytes))
}

/// Decode a PNG file into a [`PixelBuffer`].
pub fn decode_png_file(path: &Path) -> Result<PixelBuffer, CanvasError> {
    let file = File::open(path)?;
    let buffer = decode_png_reader(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        width = buffer.width(),
        height = buffer.height(),
        "Loaded image"
    );
    Ok(buffer)
}
