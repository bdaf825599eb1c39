pub mod band;
pub mod band_buffer;
pub mod complex;
pub mod grid_dimensions;
pub mod screen_anchor;
pub mod viewport;
