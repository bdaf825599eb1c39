use std::io::{self, BufWriter};

use tracing::info;

use crate::config::ExplorerConfig;
use crate::controllers::interactive::InteractiveController;
use crate::errors::AppError;
use crate::input::terminal::event_source::CrosstermInput;
use crate::presenters::terminal::presenter::TerminalPresenter;
use crate::presenters::terminal::session::TerminalSession;

/// Takes over the terminal and runs the explorer until the user quits.
#[derive(Debug)]
pub struct RunTerminalCommand {
    config: ExplorerConfig,
}

impl RunTerminalCommand {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    pub fn execute(self) -> Result<(), AppError> {
        let session = TerminalSession::enter()?;
        let grid = session.grid()?;

        let presenter = TerminalPresenter::new(BufWriter::new(io::stdout()));
        let mut controller = InteractiveController::new(self.config.viewport, grid, presenter);
        let mut input = CrosstermInput::new(self.config.poll_interval);

        // The session must be restored even when the controller fails.
        let outcome = controller.run(&mut input);
        session.exit()?;
        outcome?;

        let view = controller.viewport();
        info!(
            center_x = view.center_x,
            center_y = view.center_y,
            scale = view.scale,
            "final view"
        );

        Ok(())
    }
}
