//! Terminal setup and teardown: raw mode, alternate screen, cursor, and the
//! colour-support precondition.

use std::io::{self, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::style::available_color_count;
use crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::data::grid_dimensions::{GridDimensions, GridDimensionsError};

/// Fewest colours that can show the whole colour table.
pub const MIN_COLOURS: u16 = 8;

/// Set while the terminal is in raw mode, so the panic hook knows to restore it.
static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("terminal does not support colours ({available} available, {required} required)")]
    NoColourSupport { available: u16, required: u16 },
    #[error("terminal reported an unusable size: {0}")]
    Size(#[from] GridDimensionsError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Number of colours the terminal advertises. `TERM=dumb` has none.
#[must_use]
pub fn detect_colour_count() -> u16 {
    match std::env::var("TERM") {
        Ok(term) if term == "dumb" => 0,
        _ => available_color_count(),
    }
}

pub fn check_colour_support(available: u16) -> Result<(), TerminalError> {
    if available < MIN_COLOURS {
        return Err(TerminalError::NoColourSupport {
            available,
            required: MIN_COLOURS,
        });
    }

    Ok(())
}

/// Guard that owns the terminal for the lifetime of the explorer and restores it on drop,
/// including when unwinding from a panic.
#[derive(Debug)]
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    /// Checks colour support, then enters raw mode and the alternate screen.
    pub fn enter() -> Result<Self, TerminalError> {
        check_colour_support(detect_colour_count())?;

        install_panic_hook();

        enable_raw_mode()?;
        SESSION_ACTIVE.store(true, Ordering::SeqCst);
        let session = Self { active: true };

        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        debug!("terminal session entered");

        Ok(session)
    }

    /// Current terminal size as a grid.
    pub fn grid(&self) -> Result<GridDimensions, TerminalError> {
        let (cols, rows) = terminal::size()?;
        Ok(GridDimensions::new(rows, cols)?)
    }

    /// Restores the terminal now, reporting any failure. Dropping afterwards is a no-op.
    pub fn exit(mut self) -> Result<(), TerminalError> {
        self.active = false;
        restore_terminal()?;
        debug!("terminal session exited");
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            if let Err(error) = restore_terminal() {
                warn!(%error, "failed to restore terminal");
            }
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    if !SESSION_ACTIVE.swap(false, Ordering::SeqCst) {
        return Ok(());
    }

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;
    stdout.flush()?;
    disable_raw_mode()
}

fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Best effort: the panic message must land on a usable screen.
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
