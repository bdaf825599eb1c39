use crossterm::style::Color;

use crate::core::data::band::Band;
use crate::core::fractals::mandelbrot::banding::{COLOUR_COUNT, PALETTE_SIZE};

/// Glyphs ordered from sparse to dense.
pub const GLYPHS: [char; PALETTE_SIZE] = [
    ' ', '.', ':', '-', '=', '+', '*', '!', '/', '?', '&', '#', '%', '@',
];

/// Colour table for indices `1..=COLOUR_COUNT + 1`; the last entry colours the interior.
pub const COLOURS: [Color; COLOUR_COUNT as usize + 1] = [
    Color::Blue,
    Color::White,
    Color::Green,
    Color::Yellow,
    Color::Red,
    Color::Magenta,
    Color::Cyan,
];

#[must_use]
pub fn glyph_for(shade_index: usize) -> char {
    GLYPHS[shade_index.min(PALETTE_SIZE - 1)]
}

/// Index 0, and anything past the table, leaves the terminal's default foreground.
#[must_use]
pub fn colour_for(colour_index: u8) -> Color {
    usize::from(colour_index)
        .checked_sub(1)
        .and_then(|i| COLOURS.get(i).copied())
        .unwrap_or(Color::Reset)
}

#[must_use]
pub fn style_for(band: Band) -> (char, Color) {
    (glyph_for(band.shade_index), colour_for(band.colour_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::algorithm::MAX_ITERATIONS;
    use crate::core::fractals::mandelbrot::banding::band;

    #[test]
    fn test_palette_runs_sparse_to_dense() {
        assert_eq!(GLYPHS.first(), Some(&' '));
        assert_eq!(GLYPHS.last(), Some(&'@'));
        assert_eq!(GLYPHS.iter().collect::<String>(), " .:-=+*!/?&#%@");
    }

    #[test]
    fn test_colour_zero_is_no_override() {
        assert_eq!(colour_for(0), Color::Reset);
        assert_eq!(colour_for(1), Color::Blue);
        assert_eq!(colour_for(COLOUR_COUNT + 1), Color::Cyan);
        assert_eq!(colour_for(COLOUR_COUNT + 2), Color::Reset);
    }

    #[test]
    fn test_every_band_has_a_style() {
        assert_eq!(style_for(band(0)), (' ', Color::Blue));
        assert_eq!(style_for(band(MAX_ITERATIONS)), ('@', Color::Cyan));
        assert_eq!(glyph_for(usize::MAX), '@');
    }
}
