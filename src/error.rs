//! Error types for the tracker-to-dashboard conversion.
//!
//! Recoverable row-level anomalies never surface here: short rows and rows
//! without a name are skipped, unknown statuses and odd department encodings
//! fall back to defaults. Only problems that stop the whole run do.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// Input could not be opened or the output could not be written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed on a record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The export has no column header line (line 2).
    #[error("input has no header row (expected a schema line, then the column headers)")]
    MissingHeader,

    /// Serializing the dashboard document failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TrackerError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
