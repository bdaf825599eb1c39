use crate::core::data::grid_dimensions::GridDimensions;

/// The grid cell that stays visually fixed during a zoom.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenAnchor {
    pub sx: i32,
    pub sy: i32,
}

impl ScreenAnchor {
    #[must_use]
    pub const fn new(sx: i32, sy: i32) -> Self {
        Self { sx, sy }
    }

    /// Cell nearest the grid centre, using integer halves.
    #[must_use]
    pub fn center_cell(grid: GridDimensions) -> Self {
        Self {
            sx: i32::from(grid.cols() / 2),
            sy: i32::from(grid.rows() / 2),
        }
    }
}
