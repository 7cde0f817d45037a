//! Assertion helpers for tests.

use canvas_core::PixelBuffer;
use pretty_assertions::assert_eq;

/// Assert the text rendering of `canvas`, line by line.
pub fn assert_lines(canvas: &PixelBuffer, expected: &[&str]) {
    let actual = canvas.text_lines();
    let actual: Vec<&str> = actual.iter().map(String::as_str).collect();
    assert_eq!(actual, expected);
}

/// Split captured screen output into frames on the cursor-home sequence.
pub fn split_frames(output: &str) -> Vec<&str> {
    output
        .split(ascii_canvas::services::CURSOR_HOME)
        .filter(|frame| !frame.is_empty())
        .collect()
}
