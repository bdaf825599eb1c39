//! Keyboard and resize input read from the terminal with crossterm.

pub mod commands;
pub mod event_source;
pub mod key_map;

pub use commands::run_terminal::RunTerminalCommand;
pub use event_source::CrosstermInput;
