//! Terminal geometry and output.

use std::io::Write;

use canvas_core::PixelBuffer;

use crate::error::CanvasError;
use crate::models::TerminalConfig;

/// Moves the cursor to the top-left cell so the next frame overwrites the last.
pub const CURSOR_HOME: &str = "\x1b[1;1H";

/// Query the `(columns, rows)` of the terminal attached to stdout.
#[cfg(unix)]
pub fn query_terminal_size() -> std::io::Result<(u16, u16)> {
    // SAFETY: TIOCGWINSZ fills the `winsize` we pass and reads nothing else.
    unsafe {
        let mut winsz: libc::winsize = std::mem::zeroed();
        if libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut winsz) == -1 {
            return Err(std::io::Error::last_os_error());
        }
        Ok((winsz.ws_col, winsz.ws_row))
    }
}

#[cfg(not(unix))]
pub fn query_terminal_size() -> std::io::Result<(u16, u16)> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "terminal size query is only available on unix",
    ))
}

/// Terminal `(columns, rows)`, falling back to the configured defaults when
/// stdout is not a terminal or reports a zero size.
pub fn terminal_size(config: &TerminalConfig) -> (u16, u16) {
    let fallback = (config.default_columns, config.default_rows);
    match query_terminal_size() {
        Ok((columns, rows)) if columns > 0 && rows > 0 => (columns, rows),
        Ok((columns, rows)) => {
            tracing::debug!(columns, rows, "Terminal reported zero size, using defaults");
            fallback
        }
        Err(e) => {
            tracing::debug!(%e, "Terminal size query failed, using defaults");
            fallback
        }
    }
}

/// A transparent canvas covering a terminal of `columns x rows` cells, at
/// two pixel rows per character.
pub fn canvas_for_terminal(columns: u16, rows: u16) -> PixelBuffer {
    PixelBuffer::new(columns as usize, 2 * rows as usize)
}

/// Writes rendered canvases to a byte sink.
pub struct Screen<W: Write> {
    sink: W,
    home_cursor: bool,
}

impl<W: Write> Screen<W> {
    /// With `home_cursor`, every frame starts with [`CURSOR_HOME`] and has no
    /// trailing newline so successive frames overwrite in place. Without it,
    /// each frame is printed as plain lines.
    pub fn new(sink: W, home_cursor: bool) -> Self {
        Self { sink, home_cursor }
    }

    pub fn present(&mut self, canvas: &PixelBuffer) -> Result<(), CanvasError> {
        if self.home_cursor {
            self.sink.write_all(CURSOR_HOME.as_bytes())?;
            write!(self.sink, "{canvas}")?;
        } else {
            writeln!(self.sink, "{canvas}")?;
        }
        self.sink.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
