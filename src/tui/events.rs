/// Terminal event to action mapping
///
/// Pickers are mouse driven: only left-button presses and the quit keys
/// produce actions. Everything else is ignored.
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::Position;
use tracing::trace;

use super::action::Action;

pub fn event_to_action(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => key_to_action(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                trace!("MOUSE: press at ({}, {})", mouse.column, mouse.row);
                Some(Action::Click(Position::new(mouse.column, mouse.row)))
            }
            _ => None,
        },
        _ => None,
    }
}

fn key_to_action(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}
