mod config;
mod controllers;
mod core;
mod errors;
mod input;
mod instrumentation;
mod logging;
mod presenters;

pub use config::{Cli, ConfigError, ExplorerConfig};
pub use controllers::interactive::{
    Command, ControllerError, InputEvent, InputPort, InteractiveController, PresentError,
    PresenterPort, StatusLine,
};
pub use crate::core::actions::navigate::{Navigation, PAN_CELLS, navigate};
pub use crate::core::actions::render_frame::ports::cell_sink::CellSink;
pub use crate::core::actions::render_frame::render_frame::render_frame;
pub use crate::core::actions::zoom::zoom_at::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR, zoom_at, zoom_center};
pub use crate::core::data::band::Band;
pub use crate::core::data::band_buffer::BandBuffer;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid_dimensions::{GridDimensions, GridDimensionsError};
pub use crate::core::data::screen_anchor::ScreenAnchor;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{MAX_ITERATIONS, classify, escape_time};
pub use crate::core::fractals::mandelbrot::banding::{COLOUR_COUNT, PALETTE_SIZE, band};
pub use crate::core::util::cell_to_complex_coords::{cell_step, cell_to_complex_coords, screen_to_complex_coords};
pub use errors::AppError;
pub use input::terminal::RunTerminalCommand;
pub use instrumentation::cpu_sampler::{CpuMonitor, CpuSampler, ProcessTimes};
pub use logging::{LoggingError, init_file_logging};
pub use presenters::terminal::{TerminalError, TerminalPresenter};
