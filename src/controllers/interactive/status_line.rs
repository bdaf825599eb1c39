use std::fmt;

use crate::core::data::viewport::Viewport;

/// Data shown on the top row after every render.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StatusLine {
    pub cpu_percent: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub scale: f64,
}

impl StatusLine {
    #[must_use]
    pub fn new(cpu_percent: f64, view: Viewport) -> Self {
        Self {
            cpu_percent,
            center_x: view.center_x,
            center_y: view.center_y,
            scale: view.scale,
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU: {:5.1}% x={:.6} cy={:.6} scale={:.6}",
            self.cpu_percent, self.center_x, self.center_y, self.scale
        )
    }
}
