use crate::controllers::interactive::command::InputEvent;
use crate::controllers::interactive::errors::InputError;

pub trait InputPort {
    /// Blocks until the next event. Sources with nothing to report after their poll
    /// interval return `InputEvent::Tick`.
    fn next_event(&mut self) -> Result<InputEvent, InputError>;
}
