//! Typed error definitions for batch_move.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoveError {
    #[error("Source path not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Invalid file filter '{pattern}': {source}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to move '{source_path}' to '{dest_path}': {cause}")]
    MoveFailed {
        source_path: PathBuf,
        dest_path: PathBuf,
        cause: String,
    },
}

impl MoveError {
    /// Stable machine-readable code used in structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            MoveError::SourceNotFound(_) => "source_not_found",
            MoveError::InvalidFilter { .. } => "invalid_filter",
            MoveError::MoveFailed { .. } => "move_failed",
        }
    }
}
