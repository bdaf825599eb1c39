//! Interactive controller for keyboard-driven exploration.
//!
//! Owns the single [`Viewport`](crate::core::data::viewport::Viewport) for the
//! session, turns input events into viewport changes, and re-renders after each one.
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: an `InputPort` yielding `InputEvent`s
//! - **Output**: a `PresenterPort` receiving finished frames and status lines
//! - **Core**: `navigate` and `render_frame` from `core/` do the actual work

pub mod command;
mod controller;
pub mod errors;
pub mod ports;
pub mod status_line;

pub use command::{Command, InputEvent};
pub use controller::InteractiveController;
pub use errors::{ControllerError, InputError, PresentError};
pub use ports::{InputPort, PresenterPort};
pub use status_line::StatusLine;
