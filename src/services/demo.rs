//! Animated demo: a wobbling sprite under a gradient with a jittering caption.

use std::io::Write;
use std::time::Duration;

use canvas_core::PixelBuffer;
use rand::Rng;

use crate::error::CanvasError;
use crate::models::DemoConfig;
use crate::rendering::FontAtlas;
use crate::services::terminal::{canvas_for_terminal, Screen};

pub struct Demo<'a> {
    config: &'a DemoConfig,
    sprite: &'a PixelBuffer,
    font: Option<&'a FontAtlas>,
}

impl<'a> Demo<'a> {
    pub fn new(config: &'a DemoConfig, sprite: &'a PixelBuffer, font: Option<&'a FontAtlas>) -> Self {
        Self {
            config,
            sprite,
            font,
        }
    }

    /// Render a single `columns x rows` frame.
    pub fn render_frame<R: Rng>(&self, columns: u16, rows: u16, rng: &mut R) -> PixelBuffer {
        let mut canvas = canvas_for_terminal(columns, rows);

        let wobble = self.config.wobble_degrees.abs();
        // rand needs a finite span between the bounds
        let angle = if (2.0 * wobble).is_finite() && wobble > 0.0 {
            rng.gen_range(-wobble..=wobble)
        } else {
            0.0
        };
        let size = self.config.sprite_size;
        canvas.rotate_draw(self.sprite, 0.0, 0.0, size, size, angle);

        if self.config.gradient {
            let width = canvas.width() as f64;
            let height = canvas.height() as f64;
            for y in 0..canvas.height() {
                for x in 0..canvas.width() {
                    canvas.plot(x as i64, y as i64, x as f64 / width, 0.5 * y as f64 / height);
                }
            }
        }

        if let Some(font) = self.font {
            let jitter = self.config.text_jitter;
            let jitter = if jitter.is_finite() && jitter > 0.0 {
                jitter
            } else {
                0.0
            };
            let dx = rng.gen::<f64>() * jitter;
            let dy = rng.gen::<f64>() * jitter;
            font.draw_text(&mut canvas, &self.config.text, dx, dy, self.config.text_size);
        }

        canvas
    }

    /// Present frames until `frames` have been shown, or forever when `None`.
    ///
    /// `size` is polled before every frame so the canvas follows terminal
    /// resizes. Returns the number of frames presented.
    pub fn run<W, R, F>(
        &self,
        screen: &mut Screen<W>,
        mut size: F,
        frames: Option<u64>,
        rng: &mut R,
    ) -> Result<u64, CanvasError>
    where
        W: Write,
        R: Rng,
        F: FnMut() -> (u16, u16),
    {
        let interval = Duration::from_millis(self.config.frame_interval_ms);
        let mut shown = 0u64;
        while frames.map_or(true, |limit| shown < limit) {
            let (columns, rows) = size();
            let frame = self.render_frame(columns, rows, rng);
            screen.present(&frame)?;
            shown += 1;
            tracing::trace!(frame = shown, columns, rows, "Presented frame");
            if !interval.is_zero() {
                std::thread::sleep(interval);
            }
        }
        Ok(shown)
    }
}
