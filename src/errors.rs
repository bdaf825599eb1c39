use thiserror::Error;

use crate::config::ConfigError;
use crate::controllers::interactive::errors::ControllerError;
use crate::logging::LoggingError;
use crate::presenters::terminal::session::TerminalError;

/// Anything that can stop the explorer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Terminal(#[from] TerminalError),
    #[error(transparent)]
    Controller(#[from] ControllerError),
}
