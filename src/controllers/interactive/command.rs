use crate::core::actions::navigate::Navigation;
use crate::core::data::grid_dimensions::GridDimensions;

/// The seven user commands: six viewport changes and quit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(Navigation),
    Quit,
}

/// Everything an input source can report to the controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Command(Command),
    /// The display changed size.
    Resize(GridDimensions),
    /// Nothing happened within the poll interval.
    Tick,
}

impl From<Navigation> for InputEvent {
    fn from(navigation: Navigation) -> Self {
        Self::Command(Command::Navigate(navigation))
    }
}

impl From<Command> for InputEvent {
    fn from(command: Command) -> Self {
        Self::Command(command)
    }
}
