//! Caller-supplied description of one move operation.

use std::path::PathBuf;

/// Failure policy applied after every attempted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnError {
    /// The first failed move aborts the operation and surfaces an error.
    #[default]
    Stop,
    /// Failed moves are recorded and the remaining entries still run; the
    /// operation as a whole succeeds.
    Continue,
}

impl OnError {
    /// Map the `continue_on_error` configuration flag onto a policy.
    pub fn from_continue_flag(continue_on_error: bool) -> Self {
        if continue_on_error {
            OnError::Continue
        } else {
            OnError::Stop
        }
    }
}

/// One move operation. Built once per invocation and never mutated.
#[derive(Debug, Clone)]
pub struct MoveRequest {
    /// File or directory to move from. Must exist.
    pub source_path: PathBuf,
    /// Target file path (single-file mode) or existing directory whose
    /// contents receive the entries (directory mode).
    pub dest_path: PathBuf,
    /// Optional whole-name regex applied to directory entries.
    pub file_regex: Option<String>,
    /// Stop or continue when an entry fails.
    pub on_error: OnError,
}

impl MoveRequest {
    pub fn new(source_path: impl Into<PathBuf>, dest_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            dest_path: dest_path.into(),
            file_regex: None,
            on_error: OnError::default(),
        }
    }

    pub fn with_filter(mut self, pattern: impl Into<String>) -> Self {
        self.file_regex = Some(pattern.into());
        self
    }

    pub fn with_policy(mut self, on_error: OnError) -> Self {
        self.on_error = on_error;
        self
    }
}
