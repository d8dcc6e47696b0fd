//! Input handling: terminal events to board commands.

mod command;
mod keybindings;

pub use command::Command;
pub use keybindings::{KeyCombo, KeybindingConfig};

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};

/// Translate a terminal event into a command, if it means anything to the board.
///
/// Only key presses count (not repeats or releases), and only left button
/// presses count as clicks.
pub fn translate_event(event: &Event, bindings: &KeybindingConfig) -> Option<Command> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => bindings.lookup(key.code, key.modifiers),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Command::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        Event::Resize(_, _) => Some(Command::Redraw),
        _ => None,
    }
}
