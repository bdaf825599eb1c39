use crate::core::data::complex::Complex;
use crate::core::data::grid_dimensions::GridDimensions;
use crate::core::data::viewport::Viewport;

/// Complex-plane point under grid cell `(row, col)`.
///
/// Both axes divide by the column count, so one cell spans `scale / cols` horizontally
/// and vertically alike.
#[must_use]
pub fn cell_to_complex_coords(row: i32, col: i32, grid: GridDimensions, view: Viewport) -> Complex {
    screen_to_complex_coords(f64::from(col), f64::from(row), grid, view)
}

/// Same mapping for a fractional screen position `(x, y)`, with `x` along columns.
#[must_use]
pub fn screen_to_complex_coords(x: f64, y: f64, grid: GridDimensions, view: Viewport) -> Complex {
    let (mid_x, mid_y) = grid.midpoint();
    let cols = f64::from(grid.cols());

    Complex {
        real: view.center_x + (x - mid_x) * view.scale / cols,
        imag: view.center_y + (y - mid_y) * view.scale / cols,
    }
}

/// Complex-plane width of a single cell.
#[must_use]
pub fn cell_step(grid: GridDimensions, view: Viewport) -> f64 {
    view.scale / f64::from(grid.cols())
}
