//! ascii-canvas - terminal text art
//!
//! Decodes PNG images, composites them with the `canvas-core` primitives and
//! prints the result as half-block glyphs.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
