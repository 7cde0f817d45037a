//! Static two-level luminance to glyph table.

/// Number of luminance levels per half cell.
pub const LEVELS: usize = 16;

/// `GLYPH_TABLE[upper][lower]`: glyph whose upper and lower halves best
/// match luminance levels `upper` and `lower` (0 = black, 15 = white).
///
/// Densest glyph at `[0][0]`, blank at `[15][15]`.
pub static GLYPH_TABLE: [[u8; LEVELS]; LEVELS] = [
    *b"MMMMMM###TTTTTTT",
    *b"QQBMMNW##TTTTTV*",
    *b"QQQBBEK@PTTTVVV*",
    *b"QQQmdE88P9VVVV**",
    *b"QQQmdGDU0YVV77**",
    *b"pQQmAbk65YY?7***",
    *b"ppgAww443vv?7***",
    *b"pggyysxcJv??7***",
    *b"pggyaLojrt<<+**\"",
    *b"gggaauuj{11!//\"\"",
    *b"gggaauui])|!/~~\"",
    *b"ggaauui]((;::~~^",
    *b"ggaauu](;;::-~~'",
    *b"ggauu(;;;;---~``",
    *b"gaau;;,,,,,...``",
    *b"gau,,,,,,,,...  ",
];

/// Glyph for an `(upper, lower)` level pair. Levels above 15 are clamped.
#[inline]
pub fn glyph(upper: usize, lower: usize) -> char {
    GLYPH_TABLE[upper.min(LEVELS - 1)][lower.min(LEVELS - 1)] as char
}
