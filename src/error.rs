//! Error types for the catalog pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or writing a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The scan root is missing or not a directory; fatal, nothing is scanned
    #[error("invalid input path {path:?}: {reason}")]
    InvalidInput {
        /// The offending path
        path: PathBuf,
        /// Why it was rejected
        reason: String,
    },

    /// A single file's duration could not be probed; contained per-record
    #[error("probe failed for {path:?}: {message}")]
    Probe {
        /// The file that failed probing
        path: PathBuf,
        /// Prober output or error text
        message: String,
    },

    /// The catalog could not be encoded
    #[error("failed to serialize catalog: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The destination could not be written
    #[error("failed to write catalog: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Reject a scan root that does not exist
    pub fn not_found(path: PathBuf) -> Self {
        Self::InvalidInput {
            path,
            reason: "path does not exist".to_string(),
        }
    }

    /// Reject a scan root that is not a directory
    pub fn not_a_directory(path: PathBuf) -> Self {
        Self::InvalidInput {
            path,
            reason: "path is not a directory".to_string(),
        }
    }

    /// Create a probe failure for a single file
    pub fn probe(path: PathBuf, message: impl Into<String>) -> Self {
        Self::Probe {
            path,
            message: message.into(),
        }
    }
}
