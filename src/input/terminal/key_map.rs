use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::controllers::interactive::command::{Command, InputEvent};
use crate::core::actions::navigate::Navigation;
use crate::core::data::grid_dimensions::GridDimensions;

/// Translates a terminal event into a controller event, or `None` if it means nothing here.
///
/// Arrows pan, `z`/`x` zoom in/out, and `q`, `Esc` or `Ctrl-C` quit. A resize to zero
/// rows or columns is dropped.
#[must_use]
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key).map(InputEvent::Command),
        Event::Resize(cols, rows) => GridDimensions::new(*rows, *cols).ok().map(InputEvent::Resize),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let command = match key.code {
        KeyCode::Up => Command::Navigate(Navigation::PanUp),
        KeyCode::Down => Command::Navigate(Navigation::PanDown),
        KeyCode::Left => Command::Navigate(Navigation::PanLeft),
        KeyCode::Right => Command::Navigate(Navigation::PanRight),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('z') => Command::Navigate(Navigation::ZoomIn),
        KeyCode::Char('x') => Command::Navigate(Navigation::ZoomOut),
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };

    Some(command)
}
