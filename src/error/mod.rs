//! Error types for seatbook.
//!
//! - [`StoreError`]: persistence failures. Only write failures ever reach the
//!   caller; read failures are recovered inside `Hall::load`.
//! - [`ConfigError`]: grid or viewport settings that cannot produce a board.

mod config;
mod store;

pub use config::ConfigError;
pub use store::{classify_io_error, StoreError};

/// Type alias for results of persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;
