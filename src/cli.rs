//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - SOURCE_PATH and DEST_PATH are positional and required for a move, but
//!   optional at the clap level so --print-config works without them.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::{Config, LogLevel};

/// CLI wrapper for the batch_move library.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Move a file or the contents of a directory, with filtering and a failure policy"
)]
pub struct Args {
    /// File or directory to move from.
    #[arg(value_name = "SOURCE_PATH", value_hint = ValueHint::AnyPath)]
    pub source_path: Option<PathBuf>,

    /// Target file path (single file) or existing directory (directory contents).
    #[arg(value_name = "DEST_PATH", value_hint = ValueHint::AnyPath)]
    pub dest_path: Option<PathBuf>,

    /// Only move direct children whose whole name matches this regex
    /// (directory mode; ignored when the source is a single file).
    #[arg(
        long,
        value_name = "REGEX",
        help = "Move only entries whose full name matches the regex"
    )]
    pub file_regex: Option<String>,

    /// Record failed moves and keep going instead of aborting on the first failure.
    #[arg(
        long,
        help = "Record failed moves and continue with the remaining entries"
    )]
    pub continue_on_error: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Write logs to this file in addition to stdout.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Write logs to this file as well")]
    pub log_file: Option<PathBuf>,

    /// Print where batch_move will look for the config file, then exit.
    #[arg(
        long,
        help = "Print the config file location used by batch_move and exit"
    )]
    pub print_config: bool,

    /// Dry-run: print the planned moves but do not modify the filesystem.
    #[arg(
        long,
        help = "Show what would be moved, but do not modify files/directories"
    )]
    pub dry_run: bool,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if self.continue_on_error {
            cfg.continue_on_error = true;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
