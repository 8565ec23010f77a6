//! XML configuration support.
//! - Loads ambient settings from config.xml (quick_xml).
//! - Creates a template at the default location when none exists.
//!
//! Unknown fields and malformed XML are hard errors so misconfigurations
//! surface instead of being silently ignored.

use anyhow::{bail, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor, CONFIG_ENV_VAR};
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    continue_on_error: Option<bool>,
}

/// What loading the config at startup produced.
#[derive(Debug)]
pub enum LoadResult {
    /// An existing file was read.
    Loaded(Config),
    /// No file existed at the default location; a template was written.
    CreatedTemplate(PathBuf),
}

/// Load the config file named by $BATCH_MOVE_CONFIG or at the default
/// location. When neither exists, write a template at the default location
/// and report its path so the caller can tell the user.
pub fn load_or_init() -> Result<LoadResult> {
    if let Some(p) = env::var_os(CONFIG_ENV_VAR) {
        let path = PathBuf::from(p);
        return Ok(LoadResult::Loaded(load_config_from_xml_path(&path)?));
    }

    let path = default_config_path()?;
    if path.exists() {
        return Ok(LoadResult::Loaded(load_config_from_xml_path(&path)?));
    }

    create_template_config(&path)?;
    Ok(LoadResult::CreatedTemplate(path))
}

/// Load a Config from a specific XML file path (quick_xml).
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig =
        from_xml_str(&contents).with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(s) = parsed.log_level.as_deref()
        && let Some(level) = LogLevel::parse(s.trim())
    {
        cfg.log_level = level;
    }

    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }

    cfg.continue_on_error = parsed.continue_on_error.unwrap_or(false);
    cfg
}

/// Create a template config file and parent directory.
/// Refuses to write through a symlinked ancestor.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "/path/to/batch_move.log".into());

    let content = format!(
        "<!--\n  batch_move configuration (XML)\n\n  Fields:\n    log_level          -> quiet | normal | info | debug\n    log_file           -> path to log file (optional; stdout is always used)\n    continue_on_error  -> true/false: default failure policy; true records\n                          failed moves and keeps going, false aborts on the\n                          first failure\n\n  Notes:\n    - CLI flags override XML values.\n    - Source and destination paths are always given on the command line.\n-->\n<config>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n  <continue_on_error>false</continue_on_error>\n</config>\n",
        suggested_log
    );

    fs::write(path, content)
        .with_context(|| format!("write template config '{}'", path.display()))?;
    info!("Created template config at {}", path.display());
    Ok(())
}
