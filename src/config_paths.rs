//! Where sourcefilter keeps its user files
//!
//! Everything lives under one directory: `$XDG_CONFIG_HOME/sourcefilter`,
//! falling back to `~/.config/sourcefilter` (or `%APPDATA%\sourcefilter`
//! on Windows).

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};

const APP_DIR: &str = "sourcefilter";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_SUBDIR: &str = "logs";

fn base_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        return env::var_os("APPDATA").map(PathBuf::from);
    }
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

/// Directory holding `config.yaml` and the `logs/` folder
pub fn config_dir() -> Option<PathBuf> {
    base_dir().map(|base| base.join(APP_DIR))
}

/// The YAML file read by [`crate::config::AppConfig::load`]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Daily rolling log files written by [`crate::tracing::init`]
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_SUBDIR))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().context("no home or config directory to put logs in")?;
    fs::create_dir_all(&logs)
        .with_context(|| format!("failed to create log directory {}", logs.display()))?;
    Ok(logs)
}
