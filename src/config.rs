use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::core::data::viewport::{
    DEFAULT_CENTER_X, DEFAULT_CENTER_Y, DEFAULT_SCALE, Viewport, ViewportError,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid starting view: {0}")]
    Viewport(#[from] ViewportError),
    #[error("poll interval must be at least 1 ms")]
    ZeroPollInterval,
}

/// mandelbrot_term: explore the Mandelbrot set in a terminal
#[derive(Debug, Parser)]
#[command(version, about = "Explore the Mandelbrot set in a terminal")]
#[command(after_help = "KEYS:
    Arrows      pan five cells
    z / x       zoom in / out by 10x about the centre
    q, Esc      quit")]
pub struct Cli {
    /// Real part of the starting view centre
    #[arg(long, default_value_t = DEFAULT_CENTER_X, allow_negative_numbers = true)]
    pub center_x: f64,

    /// Imaginary part of the starting view centre
    #[arg(long, default_value_t = DEFAULT_CENTER_Y, allow_negative_numbers = true)]
    pub center_y: f64,

    /// Width of the complex plane spread across the terminal's columns
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    /// How often the status line refreshes while idle, in milliseconds
    #[arg(long, default_value_t = 250)]
    pub poll_interval_ms: u64,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Validated startup settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub viewport: Viewport,
    pub poll_interval: Duration,
    pub log_file: Option<PathBuf>,
}

impl TryFrom<Cli> for ExplorerConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }

        Ok(Self {
            viewport: Viewport::new(cli.center_x, cli.center_y, cli.scale)?,
            poll_interval: Duration::from_millis(cli.poll_interval_ms),
            log_file: cli.log_file,
        })
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            poll_interval: Duration::from_millis(250),
            log_file: None,
        }
    }
}
