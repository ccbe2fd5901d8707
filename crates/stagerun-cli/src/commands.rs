// Rust guideline compliant 2026-10-19

//! Command implementations for the Stagerun CLI.

pub mod formatter_options;
pub mod hooks;
pub mod init;
pub mod plan;

use anyhow::Result;
use stagerun_core::config::CONFIG_DIR;
use stagerun_core::{Config, RuleSet};
use std::path::Path;

/// Loads the configuration from `config_path`, or from `.stagerun/` under `root`.
///
/// # Returns
///
/// The configuration with its compiled rules.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read or is invalid, or if
/// an explicit `config_path` does not exist.
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<(Config, RuleSet)> {
    let loaded = match config_path {
        Some(path) => Config::load_file(path)?,
        None => Config::load(&root.join(CONFIG_DIR))?,
    };
    Ok(loaded)
}
