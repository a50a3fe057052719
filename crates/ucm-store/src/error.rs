//! Store error types.
//!
//! Only the save path errors. Loading is total by contract and falls back
//! to the default configuration instead of reporting problems.

use std::path::PathBuf;
use thiserror::Error;

/// Save-path error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O failure.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload serialization failure.
    #[error("Failed to serialize configuration")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// No platform configuration directory is available.
    #[error("No configuration directory is available on this platform")]
    NoStorePath,
}

impl StoreError {
    /// User-facing message for a status line.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::Serialize { .. } => {
                "An error occurred while saving the configuration.".to_string()
            }
            Self::NoStorePath => {
                "No settings folder is available; changes will not persist.".to_string()
            }
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
