use crate::core::actions::zoom::zoom_at::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR, zoom_center};
use crate::core::data::grid_dimensions::GridDimensions;
use crate::core::data::viewport::Viewport;
use crate::core::util::cell_to_complex_coords::cell_step;

/// Cells moved per pan command.
pub const PAN_CELLS: f64 = 5.0;

/// A viewport change requested by the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Navigation {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
}

impl Navigation {
    pub const ALL: &'static [Self] = &[
        Self::PanUp,
        Self::PanDown,
        Self::PanLeft,
        Self::PanRight,
        Self::ZoomIn,
        Self::ZoomOut,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PanUp => "pan up",
            Self::PanDown => "pan down",
            Self::PanLeft => "pan left",
            Self::PanRight => "pan right",
            Self::ZoomIn => "zoom in",
            Self::ZoomOut => "zoom out",
        }
    }
}

impl std::fmt::Display for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Applies one navigation step and returns the new viewport.
///
/// Pans move by `PAN_CELLS` cells of the current view; zooms hold the grid centre fixed.
#[must_use]
pub fn navigate(view: Viewport, grid: GridDimensions, navigation: Navigation) -> Viewport {
    let pan = cell_step(grid, view) * PAN_CELLS;

    match navigation {
        Navigation::PanUp => view.translated(0.0, -pan),
        Navigation::PanDown => view.translated(0.0, pan),
        Navigation::PanLeft => view.translated(-pan, 0.0),
        Navigation::PanRight => view.translated(pan, 0.0),
        Navigation::ZoomIn => zoom_center(view, ZOOM_IN_FACTOR, grid),
        Navigation::ZoomOut => zoom_center(view, ZOOM_OUT_FACTOR, grid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridDimensions {
        GridDimensions::new(24, 80).unwrap()
    }

    #[test]
    fn test_pans_move_five_cells() {
        let view = Viewport::new(0.0, 0.0, 8.0).unwrap();
        // step = 8 / 80 = 0.1, pan = 0.5
        assert_eq!(navigate(view, grid(), Navigation::PanUp).center_y, -0.5);
        assert_eq!(navigate(view, grid(), Navigation::PanDown).center_y, 0.5);
        assert_eq!(navigate(view, grid(), Navigation::PanLeft).center_x, -0.5);
        assert_eq!(navigate(view, grid(), Navigation::PanRight).center_x, 0.5);
    }

    #[test]
    fn test_pans_leave_other_axis_and_scale_alone() {
        let view = Viewport::default();

        let up = navigate(view, grid(), Navigation::PanUp);
        let right = navigate(view, grid(), Navigation::PanRight);

        assert_eq!(up.center_x, view.center_x);
        assert_eq!(up.scale, view.scale);
        assert_eq!(right.center_y, view.center_y);
        assert_eq!(right.scale, view.scale);
    }

    #[test]
    fn test_zooms_scale_by_ten() {
        let view = Viewport::default();

        let zoomed_in = navigate(view, grid(), Navigation::ZoomIn);
        let zoomed_out = navigate(view, grid(), Navigation::ZoomOut);

        assert_eq!(zoomed_in.scale, 3.0 * 0.1);
        assert_eq!(zoomed_out.scale, 30.0);
        assert_eq!(zoomed_in.center_x, view.center_x);
        assert_eq!(zoomed_out.center_y, view.center_y);
    }

    #[test]
    fn test_zoom_in_then_pan_right() {
        let view = Viewport::default();

        let zoomed = navigate(view, grid(), Navigation::ZoomIn);
        let panned = navigate(zoomed, grid(), Navigation::PanRight);

        // The zoom keeps the centre where it was, so only the pan shifts it, by five
        // cells of the zoomed scale.
        let scale_after_zoom = 3.0 * 0.1;
        let expected = -0.5 + scale_after_zoom / 80.0 * 5.0;

        assert_eq!(zoomed.center_x, -0.5);
        assert_eq!(panned.center_x, expected);
        assert_eq!(panned.center_y, 0.0);
        assert_eq!(panned.scale, scale_after_zoom);
    }

    #[test]
    fn test_pan_distance_tracks_zoom_level() {
        let view = Viewport::default();
        let wide = navigate(view, grid(), Navigation::PanLeft);
        let narrow = navigate(
            navigate(view, grid(), Navigation::ZoomIn),
            grid(),
            Navigation::PanLeft,
        );

        let wide_shift = view.center_x - wide.center_x;
        let narrow_shift = view.center_x - narrow.center_x;

        assert!((narrow_shift * 10.0 - wide_shift).abs() < 1e-12);
    }

    #[test]
    fn test_display_names_are_unique() {
        let names: Vec<&str> = Navigation::ALL.iter().map(|n| n.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
