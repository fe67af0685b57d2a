//! Error types for fixture file output.

use thiserror::Error;

/// Errors that can occur while writing fixture files.
///
/// All of these are fatal to the run: there are no retries and no
/// partial-write cleanup.
#[derive(Error, Debug)]
pub enum FixtureWriterError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
