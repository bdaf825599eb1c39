//! Port definitions for the interactive controller.
//!
//! Traits describing what the controller needs from the terminal (or a test double)
//! on the way in and on the way out.

pub mod input_port;
pub mod presenter_port;

pub use input_port::InputPort;
pub use presenter_port::PresenterPort;
