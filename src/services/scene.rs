//! One-shot compositions used by the `render` and `text` commands.

use canvas_core::{PixelBuffer, Sampleable};

use crate::rendering::FontAtlas;
use crate::services::terminal::canvas_for_terminal;

/// Where an image lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Rotation in degrees; `None` uses the axis-aligned blit.
    pub rotate: Option<f64>,
}

impl Placement {
    /// Resolve unset fields against a canvas: the image fills it by default.
    pub fn resolve(&self, canvas: &PixelBuffer) -> (f64, f64, f64, f64) {
        (
            self.x.unwrap_or(0.0),
            self.y.unwrap_or(0.0),
            self.width.unwrap_or(canvas.width() as f64),
            self.height.unwrap_or(canvas.height() as f64),
        )
    }
}

/// Composite `image` onto a fresh `columns x rows` terminal canvas.
pub fn compose_image<S: Sampleable + ?Sized>(
    image: &S,
    columns: u16,
    rows: u16,
    placement: &Placement,
) -> PixelBuffer {
    let mut canvas = canvas_for_terminal(columns, rows);
    let (x, y, w, h) = placement.resolve(&canvas);
    match placement.rotate {
        Some(degrees) => canvas.rotate_draw(image, x, y, w, h, degrees),
        None => canvas.draw(image, x, y, w, h),
    }
    tracing::debug!(columns, rows, x, y, w, h, rotate = ?placement.rotate, "Composed image");
    canvas
}

/// Draw `text` at the top-left of a fresh `columns x rows` terminal canvas.
pub fn compose_text(atlas: &FontAtlas, text: &str, size: f64, columns: u16, rows: u16) -> PixelBuffer {
    let mut canvas = canvas_for_terminal(columns, rows);
    atlas.draw_text(&mut canvas, text, 0.0, 0.0, size);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::AtlasLayout;
    use canvas_core::Color;

    fn checker() -> PixelBuffer {
        PixelBuffer::from_fn(2, 2, |x, y| {
            if (x + y) % 2 == 0 {
                Color::BLACK
            } else {
                Color::WHITE
            }
        })
    }

    #[test]
    fn test_default_placement_fills_canvas() {
        let canvas = compose_image(&checker(), 4, 2, &Placement::default());
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 4);
        assert!(canvas.rows().flatten().all(|c| c.alpha == 1.0));
        assert_eq!(canvas.get(0, 0), Some(Color::BLACK));
        assert_eq!(canvas.get(2, 0), Some(Color::WHITE));
    }

    #[test]
    fn test_explicit_placement() {
        let placement = Placement {
            x: Some(2.0),
            y: Some(0.0),
            width: Some(1.0),
            height: Some(1.0),
            rotate: None,
        };
        let canvas = compose_image(&checker(), 4, 2, &placement);
        assert_eq!(canvas.get(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(canvas.get(2, 0), Some(Color::BLACK));
        assert_eq!(canvas.get(3, 3), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_zero_rotation_matches_plain_draw() {
        let plain = compose_image(&checker(), 6, 3, &Placement::default());
        let rotated = compose_image(
            &checker(),
            6,
            3,
            &Placement {
                rotate: Some(0.0),
                ..Placement::default()
            },
        );
        assert_eq!(plain, rotated);
    }

    #[test]
    fn test_compose_text_uses_atlas() {
        let atlas = FontAtlas::new(
            PixelBuffer::from_fn(2, 1, |x, _| if x == 1 { Color::BLACK } else { Color::TRANSPARENT }),
            AtlasLayout { columns: 2, rows: 1 },
        );
        let canvas = compose_text(&atlas, "\u{1}", 2.0, 4, 2);
        assert_eq!(canvas.get(0, 0), Some(Color::BLACK));
        assert_eq!(canvas.get(3, 3), Some(Color::TRANSPARENT));
    }
}
