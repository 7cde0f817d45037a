//! Compositing onto a destination [`PixelBuffer`](crate::PixelBuffer).
//!
//! Both blits rasterize a destination region, inverse-map every covered cell
//! to a source-normalized coordinate, sample the source and composite the
//! result with [`PixelBuffer::plot`](crate::PixelBuffer::plot):
//!
//! - [`PixelBuffer::draw`](crate::PixelBuffer::draw): axis-aligned, with
//!   scaling and flipping via signed extents
//! - [`PixelBuffer::rotate_draw`](crate::PixelBuffer::rotate_draw): rotation
//!   about the rectangle's center, rasterized over the rotated area only

mod draw;
mod rotate;

pub use rotate::{Bounds, RotatedRect};
