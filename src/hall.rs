//! The seat board: layout, hit-testing, mutations and persistence.
//!
//! Every mutating operation saves the full board before returning. When the
//! save fails the in-memory change is rolled back, so the board in memory is
//! always the last snapshot that reached the store.

use std::collections::HashMap;

use ratatui::style::Color;

use crate::error::{ConfigError, StoreError, StoreResult};
use crate::layout::{grid_origin, seat_center, GridConfig, Point, ViewportConfig};
use crate::seat::Seat;
use crate::snapshot::{HallSnapshot, SeatRecord};
use crate::store::SeatStore;
use crate::ui::theme::{COLOR_SEAT_FREE, COLOR_SEAT_SOLD};

/// Rendering collaborator that knows how to paint one seat.
pub trait SeatPainter {
    fn draw_seat(&mut self, center: Point, radius: f64, fill: Color);
}

/// Free and sold totals for the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeatCounts {
    pub free: usize,
    pub sold: usize,
}

/// Result of reconciling the board with the store.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Nothing was saved yet; every seat is free.
    Fresh,
    /// A snapshot was applied.
    Restored { applied: usize, ignored: usize },
    /// The snapshot could not be read and was ignored; every seat is free.
    Recovered(StoreError),
}

/// Owns every seat of one hall and its backing store.
#[derive(Debug)]
pub struct Hall<S> {
    grid: GridConfig,
    viewport: ViewportConfig,
    seats: Vec<Seat>,
    store: S,
}

impl<S: SeatStore> Hall<S> {
    /// Build the grid. Seats start free; call [`Hall::load`] to restore bookings.
    pub fn new(grid: GridConfig, viewport: ViewportConfig, store: S) -> Result<Self, ConfigError> {
        grid.validate()?;
        viewport.validate()?;
        let seats = build_seats(&grid, &viewport);
        Ok(Self {
            grid,
            viewport,
            seats,
            store,
        })
    }

    /// Build the grid and restore bookings from the store.
    pub fn open(grid: GridConfig, viewport: ViewportConfig, store: S) -> Result<(Self, LoadOutcome), ConfigError> {
        let mut hall = Self::new(grid, viewport, store)?;
        let outcome = hall.load();
        Ok((hall, outcome))
    }

    /// Replace the grid configuration.
    ///
    /// All seats are rebuilt from scratch and then reconciled with the store,
    /// so bookings for seats that still exist survive.
    pub fn rebuild(&mut self, grid: GridConfig, viewport: ViewportConfig) -> Result<LoadOutcome, ConfigError> {
        grid.validate()?;
        viewport.validate()?;
        self.seats = build_seats(&grid, &viewport);
        self.grid = grid;
        self.viewport = viewport;
        Ok(self.load())
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn viewport(&self) -> &ViewportConfig {
        &self.viewport
    }

    /// Seats in row-major order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, row: usize, col: usize) -> Option<&Seat> {
        if row >= self.grid.rows || col >= self.grid.cols {
            return None;
        }
        self.seats.get(row * self.grid.cols + col)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn counts(&self) -> SeatCounts {
        let sold = self.seats.iter().filter(|s| s.is_booked()).count();
        SeatCounts {
            free: self.seats.len() - sold,
            sold,
        }
    }

    /// Current state of every seat.
    pub fn snapshot(&self) -> HallSnapshot {
        HallSnapshot::new(self.seats.iter().map(Seat::to_record).collect())
    }

    /// Reconcile seats with the stored snapshot.
    ///
    /// Never fails: a missing snapshot leaves every seat free, and an
    /// unreadable one is logged and treated as missing. Entries that do not
    /// name a seat of this grid are ignored.
    pub fn load(&mut self) -> LoadOutcome {
        for seat in &mut self.seats {
            seat.set_booked(false);
        }

        let snapshot = match self.store.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                tracing::info!("No saved bookings at {}", self.store.describe());
                return LoadOutcome::Fresh;
            }
            Err(err) => {
                tracing::warn!(
                    code = err.error_code(),
                    "Ignoring unreadable bookings at {}: {}",
                    self.store.describe(),
                    err
                );
                return LoadOutcome::Recovered(err);
            }
        };

        let by_position: HashMap<(usize, usize), &SeatRecord> = snapshot
            .seats
            .iter()
            .map(|record| ((record.row, record.col), record))
            .collect();

        let mut applied = 0;
        for seat in &mut self.seats {
            if let Some(record) = by_position.get(&seat.position()) {
                seat.apply_record(record);
                applied += 1;
            }
        }
        let ignored = snapshot.seats.len() - applied;

        tracing::info!(
            "Restored {} seats ({} sold) from {}, ignored {} entries",
            applied,
            self.counts().sold,
            self.store.describe(),
            ignored
        );
        LoadOutcome::Restored { applied, ignored }
    }

    /// Write every seat to the store, replacing the previous snapshot.
    pub fn save(&self) -> StoreResult<()> {
        let snapshot = self.snapshot();
        self.store.save(&snapshot).map_err(|err| {
            tracing::error!(
                code = err.error_code(),
                "Failed to save bookings to {}: {}",
                self.store.describe(),
                err
            );
            err
        })?;
        tracing::debug!(
            "Saved {} seats ({} sold) to {}",
            snapshot.seats.len(),
            snapshot.booked_count(),
            self.store.describe()
        );
        Ok(())
    }

    /// Topmost seat under `point`, if any.
    pub fn seat_at(&self, point: Point) -> Option<&Seat> {
        self.hit_index(point).map(|index| &self.seats[index])
    }

    // Last built seat is drawn on top, so it wins.
    fn hit_index(&self, point: Point) -> Option<usize> {
        self.seats.iter().rposition(|seat| seat.contains(point))
    }

    /// Toggle the topmost seat under `point`.
    ///
    /// Returns `Ok(false)` when no seat is hit; nothing is saved then. On a
    /// save failure the toggle is undone and the error returned.
    pub fn toggle_at(&mut self, point: Point) -> StoreResult<bool> {
        let Some(index) = self.hit_index(point) else {
            tracing::debug!("Click at ({:.1}, {:.1}) hit no seat", point.x, point.y);
            return Ok(false);
        };

        self.seats[index].toggle();
        if let Err(err) = self.save() {
            self.seats[index].toggle();
            return Err(err);
        }

        let seat = &self.seats[index];
        tracing::debug!(
            row = seat.row(),
            col = seat.col(),
            booked = seat.is_booked(),
            "Seat toggled"
        );
        Ok(true)
    }

    /// Free every seat and save. On a save failure the previous bookings are restored.
    pub fn reset_all(&mut self) -> StoreResult<()> {
        let previous: Vec<bool> = self.seats.iter().map(Seat::is_booked).collect();
        for seat in &mut self.seats {
            seat.set_booked(false);
        }

        if let Err(err) = self.save() {
            for (seat, booked) in self.seats.iter_mut().zip(previous) {
                seat.set_booked(booked);
            }
            return Err(err);
        }

        tracing::info!("All seats reset to free");
        Ok(())
    }

    /// Paint every seat, free or sold.
    pub fn draw<P: SeatPainter + ?Sized>(&self, painter: &mut P) {
        for seat in &self.seats {
            let fill = if seat.is_booked() {
                COLOR_SEAT_SOLD
            } else {
                COLOR_SEAT_FREE
            };
            painter.draw_seat(seat.center(), seat.radius(), fill);
        }
    }
}

fn build_seats(grid: &GridConfig, viewport: &ViewportConfig) -> Vec<Seat> {
    let origin = grid_origin(grid, viewport);
    let mut seats = Vec::with_capacity(grid.seat_count());
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            seats.push(Seat::new(row, col, seat_center(grid, origin, row, col), grid.radius));
        }
    }
    seats
}
