//! Command definitions for input handling.
//!
//! Input events are translated into [`Command`]s so that key bindings stay
//! decoupled from what the board does with them.

/// Everything the user can ask the board to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Save and leave (q, Esc, Ctrl+C)
    Quit,
    /// Free every seat (r)
    ResetAll,
    /// Left click on a terminal cell
    Click { column: u16, row: u16 },
    /// Terminal was resized; redraw only
    Redraw,
}
