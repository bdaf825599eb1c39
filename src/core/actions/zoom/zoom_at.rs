use crate::core::data::grid_dimensions::GridDimensions;
use crate::core::data::screen_anchor::ScreenAnchor;
use crate::core::data::viewport::Viewport;
use crate::core::util::cell_to_complex_coords::screen_to_complex_coords;

/// Keyboard zoom-in factor.
pub const ZOOM_IN_FACTOR: f64 = 0.1;

/// Keyboard zoom-out factor, the reciprocal of [`ZOOM_IN_FACTOR`].
pub const ZOOM_OUT_FACTOR: f64 = 1.0 / ZOOM_IN_FACTOR;

/// Rescales `view` by `factor` while keeping the point under `anchor` fixed on screen.
///
/// `factor < 1` zooms in, `factor > 1` zooms out. The factor must be positive for the
/// result to keep a positive scale. No lower bound is placed on the resulting scale;
/// deep zooms simply run into `f64` precision.
#[must_use]
pub fn zoom_at(view: Viewport, factor: f64, grid: GridDimensions, anchor: ScreenAnchor) -> Viewport {
    zoom_about(view, factor, grid, f64::from(anchor.sx), f64::from(anchor.sy))
}

/// [`zoom_at`] anchored on the exact floating grid centre `(cols / 2, rows / 2)`.
#[must_use]
pub fn zoom_center(view: Viewport, factor: f64, grid: GridDimensions) -> Viewport {
    let (mid_x, mid_y) = grid.midpoint();
    zoom_about(view, factor, grid, mid_x, mid_y)
}

fn zoom_about(view: Viewport, factor: f64, grid: GridDimensions, x: f64, y: f64) -> Viewport {
    let old_scale = view.scale;
    let new_scale = view.scale * factor;
    let ratio = new_scale / old_scale;

    let target = screen_to_complex_coords(x, y, grid, view);

    Viewport {
        center_x: target.real + (view.center_x - target.real) * ratio,
        center_y: target.imag + (view.center_y - target.imag) * ratio,
        scale: new_scale,
    }
}
