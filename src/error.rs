use thiserror::Error;

/// Failures at the image/terminal boundary.
///
/// The compositing core is total; only decoding, file access and output
/// writing can fail.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Unsupported image: {width}x{height}")]
    UnsupportedImage { width: u32, height: u32 },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<png::DecodingError> for CanvasError {
    fn from(e: png::DecodingError) -> Self {
        match e {
            // A stream that ends early is a truncated image, not an I/O fault.
            png::DecodingError::IoError(io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
                CanvasError::Decode(format!("truncated image: {io}"))
            }
            png::DecodingError::IoError(io) => CanvasError::Io(io),
            other => CanvasError::Decode(other.to_string()),
        }
    }
}

impl CanvasError {
    /// True for malformed or unsupported image data, as opposed to I/O.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            CanvasError::Decode(_) | CanvasError::UnsupportedImage { .. }
        )
    }
}
