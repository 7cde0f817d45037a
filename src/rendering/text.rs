//! Text drawing from a bitmap font atlas.

use canvas_core::{PixelBuffer, ViewWindow};

use crate::models::FontConfig;

/// Grid layout of a font atlas image.
///
/// Character code `c` occupies cell `(c % columns, c / columns)`; the
/// default 16x8 grid covers ASCII 0..128.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasLayout {
    pub columns: u32,
    pub rows: u32,
}

impl Default for AtlasLayout {
    fn default() -> Self {
        Self {
            columns: 16,
            rows: 8,
        }
    }
}

impl From<&FontConfig> for AtlasLayout {
    fn from(config: &FontConfig) -> Self {
        Self {
            columns: config.columns,
            rows: config.rows,
        }
    }
}

/// A font atlas image together with its grid layout.
pub struct FontAtlas {
    image: PixelBuffer,
    layout: AtlasLayout,
}

impl FontAtlas {
    pub fn new(image: PixelBuffer, layout: AtlasLayout) -> Self {
        Self { image, layout }
    }

    pub fn layout(&self) -> AtlasLayout {
        self.layout
    }

    /// Number of glyph cells in the atlas.
    pub fn capacity(&self) -> u64 {
        u64::from(self.layout.columns) * u64::from(self.layout.rows)
    }

    /// Window onto the cell of `ch`, or `None` when the atlas has no such cell.
    pub fn glyph(&self, ch: char) -> Option<ViewWindow<'_, PixelBuffer>> {
        let code = ch as u32;
        if u64::from(code) >= self.capacity() {
            return None;
        }
        let columns = self.layout.columns as f64;
        let rows = self.layout.rows as f64;
        let col = (code % self.layout.columns) as f64;
        let row = (code / self.layout.columns) as f64;
        Some(
            self.image
                .sub(col / columns, row / rows, 1.0 / columns, 1.0 / rows),
        )
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    ///
    /// Glyphs are `size` tall and `size / 2` wide, laid out left to right.
    /// Characters without an atlas cell are skipped but still advance.
    pub fn draw_text(&self, canvas: &mut PixelBuffer, text: &str, x: f64, y: f64, size: f64) {
        let advance = size / 2.0;
        for (i, ch) in text.chars().enumerate() {
            match self.glyph(ch) {
                Some(cell) => canvas.draw(&cell, x + i as f64 * advance, y, advance, size),
                None => tracing::trace!(%ch, "No atlas cell for character"),
            }
        }
    }
}
