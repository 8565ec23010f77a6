use serial_test::serial;
use std::fs;
use tempfile::tempdir;

use batch_move::{default_config_path, default_log_path, CONFIG_ENV_VAR};

#[test]
#[serial]
fn config_and_log_follow_env_override() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg = base.join("custom_config.xml");
    fs::write(&cfg, "<config><log_level>normal</log_level></config>").unwrap();

    // Set env for this process; serialize to avoid cross-test interference
    unsafe {
        std::env::set_var(CONFIG_ENV_VAR, &cfg);
    }

    let resolved_cfg = default_config_path().expect("default_config_path");
    assert_eq!(
        resolved_cfg, cfg,
        "config path should equal the env override value"
    );

    // Log path should be colocated with the overridden config (same parent)
    let resolved_log = default_log_path().expect("default_log_path");
    assert_eq!(
        resolved_log.parent(),
        cfg.parent(),
        "log path parent should match config parent"
    );

    unsafe {
        std::env::remove_var(CONFIG_ENV_VAR);
    }
}

#[test]
#[serial]
fn default_paths_resolve_without_env() {
    unsafe {
        std::env::remove_var(CONFIG_ENV_VAR);
    }

    let cfg = default_config_path().expect("default_config_path");
    assert!(cfg.ends_with("batch_move/config.xml") || cfg.ends_with("batch_move\\config.xml"));

    let log = default_log_path().expect("default_log_path");
    assert_eq!(
        log.file_name().and_then(|n| n.to_str()),
        Some("batch_move.log")
    );
}
