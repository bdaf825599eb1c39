use std::time::{Duration, Instant};

use crossterm::event;

use crate::controllers::interactive::command::InputEvent;
use crate::controllers::interactive::errors::InputError;
use crate::controllers::interactive::ports::InputPort;
use crate::input::terminal::key_map::map_event;

/// Reads crossterm events, yielding `Tick` when `poll_interval` passes without one.
#[derive(Debug, Clone)]
pub struct CrosstermInput {
    poll_interval: Duration,
}

impl CrosstermInput {
    #[must_use]
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }
}

impl InputPort for CrosstermInput {
    fn next_event(&mut self) -> Result<InputEvent, InputError> {
        let deadline = Instant::now() + self.poll_interval;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(InputEvent::Tick);
            }

            if let Some(mapped) = map_event(&event::read()?) {
                return Ok(mapped);
            }
        }
    }
}
