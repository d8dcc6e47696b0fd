//! A single bookable seat.

use crate::layout::Point;
use crate::snapshot::SeatRecord;

/// One seat of the board.
///
/// Identity and geometry are fixed at construction; `booked` is the only
/// state that changes, and only through the owning `Hall`.
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    row: usize,
    col: usize,
    center: Point,
    radius: f64,
    booked: bool,
}

impl Seat {
    pub fn new(row: usize, col: usize, center: Point, radius: f64) -> Self {
        Self {
            row,
            col,
            center,
            radius,
            booked: false,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// `(row, col)` key of this seat.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn is_booked(&self) -> bool {
        self.booked
    }

    /// Point-in-circle test, boundary inclusive.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.center.distance_to(point) <= self.radius
    }

    /// Persisted form of this seat.
    pub fn to_record(&self) -> SeatRecord {
        SeatRecord::new(self.row, self.col, self.booked)
    }

    /// Take the booked flag from a persisted record.
    pub fn apply_record(&mut self, record: &SeatRecord) {
        self.booked = record.booked;
    }

    pub(crate) fn toggle(&mut self) {
        self.booked = !self.booked;
    }

    pub(crate) fn set_booked(&mut self, booked: bool) {
        self.booked = booked;
    }
}
