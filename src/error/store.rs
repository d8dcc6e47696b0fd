//! Persistence errors.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure while reading or writing the seat snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Permission denied for a file operation.
    #[error("permission denied: cannot {operation} '{}'", .path.display())]
    PermissionDenied {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    /// Parent directory of the snapshot could not be created.
    #[error("failed to create directory '{}'", .path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure.
    #[error("failed to {operation} '{}'", .path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    /// Snapshot file exists but is not a valid snapshot document.
    #[error("malformed snapshot '{}'", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Snapshot could not be encoded.
    #[error("failed to encode snapshot")]
    Encode(#[source] serde_json::Error),

    /// Injected failure from an in-memory store.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::PermissionDenied { .. } => "STORE_PERMISSION_DENIED",
            StoreError::DirectoryCreationFailed { .. } => "STORE_DIR_CREATE_FAILED",
            StoreError::Io { .. } => "STORE_IO",
            StoreError::Malformed { .. } => "STORE_MALFORMED",
            StoreError::Encode(_) => "STORE_ENCODE",
            StoreError::Unavailable(_) => "STORE_UNAVAILABLE",
        }
    }

    /// Message suitable for the footer line.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::PermissionDenied { path, .. } => {
                format!("Cannot save: permission denied for '{}'", path.display())
            }
            StoreError::DirectoryCreationFailed { path, .. } => {
                format!("Cannot save: unable to create '{}'", path.display())
            }
            StoreError::Io { path, .. } => format!("Cannot save to '{}'", path.display()),
            StoreError::Malformed { path, .. } => {
                format!("Ignored unreadable bookings in '{}'", path.display())
            }
            StoreError::Encode(_) => "Cannot save: encoding failed".to_string(),
            StoreError::Unavailable(msg) => format!("Cannot save: {}", msg),
        }
    }
}

/// Classify an `io::Error` raised while touching `path`.
pub fn classify_io_error(err: io::Error, operation: &'static str, path: &Path) -> StoreError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => StoreError::PermissionDenied {
            path: path.to_path_buf(),
            operation,
            source: err,
        },
        _ => StoreError::Io {
            path: path.to_path_buf(),
            operation,
            source: err,
        },
    }
}
