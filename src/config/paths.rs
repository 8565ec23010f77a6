//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths and detects symlinked
//! ancestors before we write anywhere.

use anyhow::{anyhow, Result};
use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "BATCH_MOVE_CONFIG";

/// Config file path: $BATCH_MOVE_CONFIG when set, else the OS config dir.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(p));
    }
    let base = config_dir().ok_or_else(|| anyhow!("could not determine a config directory"))?;
    Ok(base.join("batch_move").join("config.xml"))
}

/// Default log file path. Colocated with an env-overridden config file so
/// test and sandboxed runs stay self-contained; otherwise the OS data dir.
pub fn default_log_path() -> Result<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV_VAR) {
        let cfg = PathBuf::from(p);
        if let Some(parent) = cfg.parent() {
            return Ok(parent.join("batch_move.log"));
        }
    }
    let base = data_dir().ok_or_else(|| anyhow!("could not determine a data directory"))?;
    Ok(base.join("batch_move").join("batch_move.log"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
