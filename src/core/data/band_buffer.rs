use crate::core::actions::render_frame::ports::cell_sink::CellSink;
use crate::core::data::band::Band;
use crate::core::data::grid_dimensions::GridDimensions;

/// Row-major frame of bands, one per grid cell.
///
/// Filled through its [`CellSink`] impl so a frame can be computed up front and
/// handed to a presenter whose drawing may fail.
#[derive(Debug, Clone, PartialEq)]
pub struct BandBuffer {
    grid: GridDimensions,
    bands: Vec<Band>,
}

impl BandBuffer {
    #[must_use]
    pub fn new(grid: GridDimensions) -> Self {
        Self {
            grid,
            bands: vec![
                Band {
                    shade_index: 0,
                    colour_index: 1,
                };
                grid.cell_count()
            ],
        }
    }

    #[must_use]
    pub fn grid(&self) -> GridDimensions {
        self.grid
    }

    #[must_use]
    pub fn get(&self, row: u16, col: u16) -> Option<Band> {
        if row >= self.grid.rows() || col >= self.grid.cols() {
            return None;
        }

        self.bands.get(self.index(row, col)).copied()
    }

    /// Iterates one row of bands left to right.
    pub fn row(&self, row: u16) -> impl Iterator<Item = Band> + '_ {
        let cols = usize::from(self.grid.cols());
        let start = usize::from(row) * cols;

        self.bands
            .get(start..start + cols)
            .unwrap_or(&[])
            .iter()
            .copied()
    }

    fn index(&self, row: u16, col: u16) -> usize {
        usize::from(row) * usize::from(self.grid.cols()) + usize::from(col)
    }
}

impl CellSink for BandBuffer {
    fn emit(&mut self, row: u16, col: u16, band: Band) {
        if row >= self.grid.rows() || col >= self.grid.cols() {
            return;
        }

        let index = self.index(row, col);
        self.bands[index] = band;
    }
}
