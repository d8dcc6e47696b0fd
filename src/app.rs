//! Application state for the seat board TUI.
//!
//! [`App`] owns the [`Hall`] and the bits of UI state around it: the redraw
//! flag, the last status message and the canvas area used to map clicks.
//! Every mutation goes through the hall first (which saves), and only then
//! is a redraw requested.

use ratatui::layout::Rect;

use crate::error::StoreResult;
use crate::hall::{Hall, LoadOutcome};
use crate::input::Command;
use crate::store::SeatStore;
use crate::ui::CanvasMapping;

pub struct App<S> {
    pub hall: Hall<S>,
    /// Set when the next loop iteration must redraw.
    pub needs_redraw: bool,
    should_quit: bool,
    /// Outcome of the most recent quit save.
    quit_save_failed: bool,
    status: Option<String>,
    canvas_area: Rect,
}

impl<S: SeatStore> App<S> {
    /// Wrap an opened hall. An unreadable snapshot is reported in the footer.
    pub fn new(hall: Hall<S>, outcome: LoadOutcome) -> Self {
        let status = match outcome {
            LoadOutcome::Recovered(err) => Some(err.user_message()),
            LoadOutcome::Fresh | LoadOutcome::Restored { .. } => None,
        };
        Self {
            hall,
            needs_redraw: true,
            should_quit: false,
            quit_save_failed: false,
            status,
            canvas_area: Rect::default(),
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Footer message replacing the help line, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_canvas_area(&mut self, area: Rect) {
        self.canvas_area = area;
    }

    pub fn canvas_mapping(&self) -> CanvasMapping {
        CanvasMapping::new(self.canvas_area, self.hall.viewport())
    }

    /// Run one command to completion.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Click { column, row } => self.click(column, row),
            Command::ResetAll => self.reset(),
            Command::Quit => {
                // Failure is already logged and shown; leaving anyway.
                let _ = self.quit();
            }
            Command::Redraw => self.mark_dirty(),
        }
    }

    /// Toggle the seat under terminal cell `(column, row)`.
    ///
    /// The cell center is tried first. In small terminals a cell can be wider
    /// than a seat, so the cell's braille dots are tried next.
    pub fn click(&mut self, column: u16, row: u16) {
        let points = self.canvas_mapping().cell_points(column, row);
        let Some(point) = points
            .iter()
            .copied()
            .find(|p| self.hall.seat_at(*p).is_some())
        else {
            tracing::debug!(column, row, "Click hit no seat");
            return;
        };
        match self.hall.toggle_at(point) {
            Ok(true) => {
                self.status = None;
                self.mark_dirty();
            }
            Ok(false) => {}
            Err(err) => {
                self.status = Some(err.user_message());
                self.mark_dirty();
            }
        }
    }

    pub fn reset(&mut self) {
        match self.hall.reset_all() {
            Ok(()) => self.status = None,
            Err(err) => self.status = Some(err.user_message()),
        }
        self.mark_dirty();
    }

    /// Process exit status: non-zero when the last quit could not save.
    pub fn exit_code(&self) -> i32 {
        if self.quit_save_failed {
            1
        } else {
            0
        }
    }

    /// Final save before exit. Safe to call more than once.
    pub fn quit(&mut self) -> StoreResult<()> {
        self.should_quit = true;
        let result = self.hall.save();
        self.quit_save_failed = result.is_err();
        if let Err(err) = &result {
            self.status = Some(err.user_message());
            self.mark_dirty();
        } else {
            tracing::info!("Bookings saved on quit");
        }
        result
    }
}
