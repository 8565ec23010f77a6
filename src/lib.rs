//! Core library for `batch_move`.
//!
//! Moves a single file, or the direct children of a directory, to a
//! destination within the same filesystem namespace. Directory entries can
//! be filtered by a whole-name regex, and a failure policy decides whether
//! one failed move aborts the operation or is recorded and skipped.
//!
//! The library is split into a planner (what to move) and an executor
//! (attempt each rename and account for the outcomes); both talk to the
//! filesystem only through the [`storage::Storage`] trait so callers and
//! tests can substitute their own.

pub mod cli;
pub mod config;
pub mod errors;
pub mod move_ops;
pub mod output;
pub mod storage;

pub use config::{
    default_config_path, default_log_path, load_config_from_xml_path, path_has_symlink_ancestor,
    Config, LoadResult, LogLevel, CONFIG_ENV_VAR,
};
pub use errors::MoveError;
pub use move_ops::{
    execute, plan, run_move, MoveEntry, MoveOutcome, MoveRequest, MoveResult, MoveStatus,
    NameFilter, OnError,
};
pub use storage::{EntryKind, LocalStorage, Storage};
