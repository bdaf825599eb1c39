use crate::core::data::band::Band;
use crate::core::fractals::mandelbrot::algorithm::MAX_ITERATIONS;

/// Number of glyphs in the display palette, sparse to dense.
pub const PALETTE_SIZE: usize = 14;

/// Number of colours spread across escaped points. The band for `MAX_ITERATIONS`
/// lands one past this, on the interior colour.
pub const COLOUR_COUNT: u8 = 6;

/// Maps an escape time to its display band.
///
/// `shade_index = floor(iter * PALETTE_SIZE / MAX_ITERATIONS)` clamped to the palette,
/// `colour_index = floor(iter * COLOUR_COUNT / MAX_ITERATIONS) + 1`.
#[must_use]
pub fn band(iterations: u32) -> Band {
    let iterations = u64::from(iterations.min(MAX_ITERATIONS));
    let max = u64::from(MAX_ITERATIONS);

    let shade = iterations * PALETTE_SIZE as u64 / max;
    let colour = iterations * u64::from(COLOUR_COUNT) / max + 1;

    Band {
        shade_index: (shade as usize).min(PALETTE_SIZE - 1),
        colour_index: colour as u8,
    }
}
