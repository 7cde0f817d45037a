//! Raster storage and views.
//!
//! - [`PixelBuffer`]: owned, mutable grayscale+alpha grid
//! - [`ViewWindow`]: borrowed sub-rectangle of any [`Sampleable`](crate::Sampleable)
//! - [`RgbaSource`]: decoded-image boundary used by [`PixelBuffer::from_source`]

mod pixel_buffer;
mod source;
mod view;

pub use pixel_buffer::PixelBuffer;
pub use source::RgbaSource;
pub use view::ViewWindow;
