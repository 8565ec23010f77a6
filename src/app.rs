//! Application orchestrator.
//! Loads/merges config, initializes logging, builds the move request from
//! CLI arguments, runs the operation, and reports the outcome.

use anyhow::{bail, Result};
use tracing::{debug, error, info};

use batch_move::output as out;
use batch_move::{
    default_config_path, plan, run_move, Config, LoadResult, LocalStorage, MoveError,
    MoveRequest, OnError, CONFIG_ENV_VAR,
};

use batch_move::cli::Args;

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        if let Ok(cfg_env) = std::env::var(CONFIG_ENV_VAR) {
            out::print_info(&format!("Using {CONFIG_ENV_VAR} (explicit):\n  {cfg_env}\n"));
            out::print_info(&format!(
                "To override, unset {CONFIG_ENV_VAR} or set it to another file."
            ));
            return Ok(());
        }
        match default_config_path() {
            Ok(p) => {
                out::print_info(&format!("Default batch_move config path:\n  {}\n", p.display()));
                if p.exists() {
                    out::print_info("A config file already exists at that location.");
                } else {
                    out::print_info(
                        "No config file exists there yet. One is created on the first move.",
                    );
                }
            }
            Err(e) => {
                out::print_error(&format!("Could not determine a default config path: {e}"));
            }
        }
        return Ok(());
    }

    // Config file first, then CLI overrides (CLI wins). A freshly created
    // template just means defaults apply to this run.
    let mut cfg = match batch_move::config::load_or_init()? {
        LoadResult::Loaded(cfg) => cfg,
        LoadResult::CreatedTemplate(path) => {
            out::print_info(&format!(
                "Wrote a template batch_move config to: {}",
                path.display()
            ));
            Config::default()
        }
    };
    args.apply_overrides(&mut cfg);

    let (Some(source_path), Some(dest_path)) = (args.source_path.clone(), args.dest_path.clone())
    else {
        bail!("SOURCE_PATH and DEST_PATH are required (see --help)");
    };

    // Guard must live until the end of the run so file logs are flushed.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json)?;

    debug!("Starting batch_move: {:?}", args);

    let request = MoveRequest {
        source_path,
        dest_path,
        file_regex: args.file_regex.clone(),
        on_error: OnError::from_continue_flag(cfg.continue_on_error),
    };
    let storage = LocalStorage;

    if cfg.dry_run {
        let entries = plan(&storage, &request).inspect_err(|e| report_move_error(e))?;
        for entry in &entries {
            out::print_user(&format!(
                "would move '{}' -> '{}'",
                entry.source.display(),
                entry.destination.display()
            ));
        }
        out::print_info(&format!("dry-run: {} planned, nothing modified", entries.len()));
        return Ok(());
    }

    match run_move(&storage, &request) {
        Ok(result) => {
            info!(
                succeeded = result.succeeded(),
                failed = result.failed(),
                "Move completed"
            );
            for failure in result.failures() {
                out::print_warn(&format!(
                    "failed: '{}' -> '{}': {}",
                    failure.entry.source.display(),
                    failure.entry.destination.display(),
                    failure.cause().unwrap_or("unknown cause")
                ));
            }
            out::print_success(&format!(
                "Moved {} entries ({} failed)",
                result.succeeded(),
                result.failed()
            ));
            Ok(())
        }
        Err(e) => {
            report_move_error(&e);
            Err(e)
        }
    }
}

/// Emit a structured error event, with a stable code when the failure is one
/// of our well-known modes.
fn report_move_error(e: &anyhow::Error) {
    if let Some(me) = e.downcast_ref::<MoveError>() {
        let code = me.code();
        match me {
            MoveError::SourceNotFound(path) => {
                error!(code, kind = "source_not_found", path = %path.display(), "Move failed")
            }
            MoveError::InvalidFilter { pattern, .. } => {
                error!(code, kind = "invalid_filter", pattern = %pattern, "Move failed")
            }
            MoveError::MoveFailed {
                source_path,
                dest_path,
                cause,
            } => {
                error!(
                    code,
                    kind = "move_failed",
                    source = %source_path.display(),
                    dest = %dest_path.display(),
                    %cause,
                    "Move failed"
                )
            }
        }
    } else {
        error!(error = ?e, "Move failed");
    }
}
