use crate::core::actions::render_frame::ports::cell_sink::CellSink;
use crate::core::data::grid_dimensions::GridDimensions;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::classify;
use crate::core::fractals::mandelbrot::banding::band;
use crate::core::util::cell_to_complex_coords::cell_to_complex_coords;

/// Classifies every cell of `grid` under `view` and emits its band exactly once.
///
/// Cells are visited in row-major order: rows top to bottom, columns left to right.
pub fn render_frame<S: CellSink + ?Sized>(grid: GridDimensions, view: Viewport, sink: &mut S) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let c = cell_to_complex_coords(i32::from(row), i32::from(col), grid, view);
            let iterations = classify(c.real, c.imag);

            sink.emit(row, col, band(iterations));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::band::Band;
    use crate::core::data::band_buffer::BandBuffer;
    use crate::core::fractals::mandelbrot::algorithm::MAX_ITERATIONS;
    use crate::core::fractals::mandelbrot::banding::{COLOUR_COUNT, PALETTE_SIZE};

    fn interior() -> Band {
        band(MAX_ITERATIONS)
    }

    #[test]
    fn test_emits_each_cell_once_in_row_major_order() {
        let grid = GridDimensions::new(3, 4).unwrap();
        let mut visited = Vec::new();

        render_frame(grid, Viewport::default(), &mut |row: u16, col: u16, _band: Band| {
            visited.push((row, col));
        });

        let expected: Vec<(u16, u16)> = (0..3)
            .flat_map(|row| (0..4).map(move |col| (row, col)))
            .collect();
        assert_eq!(visited, expected);
    }

    #[test]
    fn test_default_view_center_cell_is_interior() {
        let grid = GridDimensions::new(24, 80).unwrap();
        let mut buffer = BandBuffer::new(grid);

        render_frame(grid, Viewport::default(), &mut buffer);

        assert_eq!(buffer.get(12, 40), Some(interior()));
        assert_eq!(
            buffer.get(12, 40),
            Some(Band {
                shade_index: PALETTE_SIZE - 1,
                colour_index: COLOUR_COUNT + 1,
            })
        );
    }

    #[test]
    fn test_default_view_corner_escapes() {
        let grid = GridDimensions::new(24, 80).unwrap();
        let mut buffer = BandBuffer::new(grid);

        render_frame(grid, Viewport::default(), &mut buffer);

        // Top-left cell sits at (-2.0, -0.45), outside the set.
        assert_ne!(buffer.get(0, 0), Some(interior()));
    }

    #[test]
    fn test_far_away_view_is_all_sparse() {
        let grid = GridDimensions::new(5, 10).unwrap();
        let view = Viewport::new(50.0, 50.0, 1.0).unwrap();
        let mut buffer = BandBuffer::new(grid);

        render_frame(grid, view, &mut buffer);

        for row in 0..5 {
            assert!(buffer.row(row).all(|b| b == band(1)));
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let grid = GridDimensions::new(12, 40).unwrap();
        let view = Viewport::new(-0.75, 0.1, 0.5).unwrap();
        let mut first = BandBuffer::new(grid);
        let mut second = BandBuffer::new(grid);

        render_frame(grid, view, &mut first);
        render_frame(grid, view, &mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = GridDimensions::new(1, 1).unwrap();
        let view = Viewport::new(0.0, 0.0, 1.0).unwrap();
        let mut emitted = Vec::new();

        render_frame(grid, view, &mut |row: u16, col: u16, band: Band| {
            emitted.push((row, col, band));
        });

        // The only cell is (0, 0), half a step up-left of centre: (-0.5, -0.5), interior.
        assert_eq!(emitted, vec![(0, 0, interior())]);
    }
}
