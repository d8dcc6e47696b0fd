//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one seat, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("seat radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("seat gaps must be non-negative, got ({gap_x}, {gap_y})")]
    InvalidGap { gap_x: f64, gap_y: f64 },

    #[error("viewport must have positive size, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
}
