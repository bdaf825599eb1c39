use crate::core::data::complex::Complex;
use thiserror::Error;

pub const DEFAULT_CENTER_X: f64 = -0.5;
pub const DEFAULT_CENTER_Y: f64 = 0.0;
pub const DEFAULT_SCALE: f64 = 3.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport scale must be positive and finite: {scale}")]
    InvalidScale { scale: f64 },
    #[error("viewport centre must be finite: ({center_x}, {center_y})")]
    NonFiniteCenter { center_x: f64, center_y: f64 },
}

/// The region of the complex plane currently mapped onto the grid.
///
/// `scale` is the real-axis width spread across the grid's columns. The imaginary
/// extent is derived from the same per-column step, so it is never stored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub center_x: f64,
    pub center_y: f64,
    pub scale: f64,
}

impl Viewport {
    pub fn new(center_x: f64, center_y: f64, scale: f64) -> Result<Self, ViewportError> {
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(ViewportError::NonFiniteCenter { center_x, center_y });
        }

        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewportError::InvalidScale { scale });
        }

        Ok(Self {
            center_x,
            center_y,
            scale,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.center_x, self.center_y)
    }

    /// Returns a copy shifted by `(dx, dy)` in complex-plane units.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            center_x: self.center_x + dx,
            center_y: self.center_y + dy,
            ..self
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            scale: DEFAULT_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport() {
        let view = Viewport::default();

        assert_eq!(view.center_x, -0.5);
        assert_eq!(view.center_y, 0.0);
        assert_eq!(view.scale, 3.0);
    }

    #[test]
    fn test_new_valid() {
        let view = Viewport::new(0.25, -0.75, 1e-12).unwrap();

        assert_eq!(view.center(), Complex::new(0.25, -0.75));
        assert_eq!(view.scale, 1e-12);
    }

    #[test]
    fn test_scale_must_be_positive_and_finite() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 0.0),
            Err(ViewportError::InvalidScale { scale: 0.0 })
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, -3.0),
            Err(ViewportError::InvalidScale { scale: -3.0 })
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, f64::INFINITY),
            Err(ViewportError::InvalidScale {
                scale: f64::INFINITY
            })
        );
        assert!(Viewport::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_center_must_be_finite() {
        assert!(matches!(
            Viewport::new(f64::NAN, 0.0, 1.0),
            Err(ViewportError::NonFiniteCenter { .. })
        ));
        assert!(matches!(
            Viewport::new(0.0, f64::NEG_INFINITY, 1.0),
            Err(ViewportError::NonFiniteCenter { .. })
        ));
    }

    #[test]
    fn test_translated_keeps_scale() {
        let view = Viewport::default().translated(0.5, -0.25);

        assert_eq!(view.center_x, 0.0);
        assert_eq!(view.center_y, -0.25);
        assert_eq!(view.scale, 3.0);
    }
}
