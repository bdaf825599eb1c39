/// Discrete (glyph, colour) pair assigned to a cell from its escape time.
///
/// `shade_index` indexes the display's glyph palette, `colour_index` its colour table.
/// Colour index 0 is reserved by display backends for "no override" and is never produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Band {
    pub shade_index: usize,
    pub colour_index: u8,
}
