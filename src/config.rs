//! Application configuration.
//!
//! Grid and viewport shape are static; only the data file location can be
//! changed at startup, through `SEATBOOK_DATA_FILE` or `--data`.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::layout::{GridConfig, ViewportConfig};
use crate::store::DATA_FILE_NAME;

/// Environment variable overriding the data file path.
pub const DATA_FILE_ENV: &str = "SEATBOOK_DATA_FILE";

/// Directory under the platform data dir holding our files.
const APP_DIR_NAME: &str = "seatbook";

/// Log file name, written next to the data file.
const LOG_FILE_NAME: &str = "seatbook.log";

/// Configuration for one run of the board.
///
/// # Example
///
/// ```
/// use seatbook::config::AppConfig;
/// use seatbook::layout::GridConfig;
///
/// let config = AppConfig::default()
///     .with_grid(GridConfig::new(4, 6))
///     .with_data_file("/tmp/seats.json");
/// assert_eq!(config.grid.seat_count(), 24);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub viewport: ViewportConfig,
    pub data_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            viewport: ViewportConfig::default(),
            data_file: default_data_file(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_viewport(mut self, viewport: ViewportConfig) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// Defaults, with the data file taken from `SEATBOOK_DATA_FILE` when set.
    pub fn from_env() -> Self {
        match std::env::var_os(DATA_FILE_ENV) {
            Some(path) if !path.is_empty() => Self::default().with_data_file(path),
            _ => Self::default(),
        }
    }

    /// Log file next to the data file.
    pub fn log_file(&self) -> PathBuf {
        self.data_file.with_file_name(LOG_FILE_NAME)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        self.viewport.validate()
    }
}

/// `<data dir>/seatbook/seats.json`, or `./seats.json` when the platform has
/// no data directory.
pub fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(DATA_FILE_NAME))
        .unwrap_or_else(|| Path::new(DATA_FILE_NAME).to_path_buf())
}
