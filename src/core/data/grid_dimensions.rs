use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GridDimensionsError {
    #[error("grid must be at least 1x1 cells, got {rows} rows x {cols} cols")]
    Empty { rows: u16, cols: u16 },
}

/// Character-cell grid size. Both dimensions are at least one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridDimensions {
    rows: u16,
    cols: u16,
}

impl GridDimensions {
    pub fn new(rows: u16, cols: u16) -> Result<Self, GridDimensionsError> {
        if rows == 0 || cols == 0 {
            return Err(GridDimensionsError::Empty { rows, cols });
        }

        Ok(Self { rows, cols })
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Floating midpoint `(cols / 2, rows / 2)`, not truncated.
    #[must_use]
    pub fn midpoint(&self) -> (f64, f64) {
        (f64::from(self.cols) / 2.0, f64::from(self.rows) / 2.0)
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new_valid() {
        let grid = GridDimensions::new(24, 80).unwrap();

        assert_eq!(grid.rows(), 24);
        assert_eq!(grid.cols(), 80);
        assert_eq!(grid.cell_count(), 1920);
    }

    #[test]
    fn test_grid_must_not_be_empty() {
        assert_eq!(
            GridDimensions::new(0, 80),
            Err(GridDimensionsError::Empty { rows: 0, cols: 80 })
        );
        assert_eq!(
            GridDimensions::new(24, 0),
            Err(GridDimensionsError::Empty { rows: 24, cols: 0 })
        );
        assert!(GridDimensions::new(1, 1).is_ok());
    }

    #[test]
    fn test_midpoint_is_not_truncated() {
        let grid = GridDimensions::new(25, 81).unwrap();

        assert_eq!(grid.midpoint(), (40.5, 12.5));
    }
}
