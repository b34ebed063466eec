//! Configuration file paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/action-schema/`
//! - macOS: `~/Library/Application Support/action-schema/`
//! - Windows: `%APPDATA%\action-schema\`

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

const APP_NAME: &str = "action-schema";
pub const LOCAL_CONFIG_FILE: &str = ".action-schema.toml";

/// Get the application config directory
///
/// The directory is not created; configuration is only ever read.
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to global config file
pub fn global_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get path to local config file (in CWD)
pub fn local_config_path() -> Result<PathBuf> {
    Ok(env::current_dir()?.join(LOCAL_CONFIG_FILE))
}

/// Get path to the config file in the home directory
///
/// Returns ~/.action-schema.toml if HOME environment variable is set.
pub fn home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(LOCAL_CONFIG_FILE))
}
