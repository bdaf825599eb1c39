//! Character-grid display backend built on crossterm.

pub mod palette;
pub mod presenter;
pub mod session;

pub use presenter::TerminalPresenter;
pub use session::{TerminalError, TerminalSession};
