//! Default keybindings for the board.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Normalize a combo as reported by the terminal.
    ///
    /// Terminals disagree on whether an upper-case letter carries SHIFT, so
    /// SHIFT is dropped for character keys.
    pub fn normalized(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::Char(_) => Self::new(code, modifiers.difference(KeyModifiers::SHIFT)),
            _ => Self::new(code, modifiers),
        }
    }
}

/// Key to command table.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates the default bindings.
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(KeyCombo::plain(KeyCode::Char('r')), Command::ResetAll);
        bindings.insert(KeyCombo::plain(KeyCode::Char('R')), Command::ResetAll);

        bindings.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        bindings.insert(KeyCombo::plain(KeyCode::Char('Q')), Command::Quit);
        bindings.insert(KeyCombo::plain(KeyCode::Esc), Command::Quit);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);

        Self { bindings }
    }

    /// Look up the command for a key press.
    pub fn lookup(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
        self.bindings
            .get(&KeyCombo::normalized(code, modifiers))
            .copied()
    }
}
