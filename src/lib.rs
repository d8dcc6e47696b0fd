//! seatbook - a terminal cinema seat booking board
//!
//! Seats are laid out on a canvas, toggled with mouse clicks and saved to a
//! JSON file after every change. This library exposes modules for use in
//! integration tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod hall;
pub mod input;
pub mod layout;
pub mod logging;
pub mod seat;
pub mod snapshot;
pub mod store;
pub mod terminal;
pub mod ui;

pub use hall::{Hall, LoadOutcome, SeatCounts, SeatPainter};
pub use layout::{GridConfig, Point, ViewportConfig};
pub use seat::Seat;
pub use snapshot::{HallSnapshot, SeatRecord};
pub use store::{JsonFileStore, MemoryStore, SeatStore};
