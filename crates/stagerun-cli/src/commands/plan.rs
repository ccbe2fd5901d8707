// Rust guideline compliant 2026-10-19

//! Implementation of the `stagerun plan` command.

use crate::output::OutputFormatter;
use anyhow::Result;
use stagerun_core::{Config, RuleSet, Task};
use std::path::{Path, PathBuf};

/// Plans the commands for explicitly listed files.
///
/// No Git access happens; `files` are matched as given.
///
/// # Arguments
///
/// * `config` - Loaded configuration
/// * `rules` - Rules compiled from `config`
/// * `cwd` - Directory paths are matched and rendered relative to
/// * `files` - Files to plan for
pub fn plan(config: &Config, rules: &RuleSet, cwd: &Path, files: &[PathBuf]) -> Vec<Task> {
    rules.plan(&config.toolchain(), cwd, files)
}

/// Prints the plan for `files`.
pub fn execute(
    config: &Config,
    rules: &RuleSet,
    cwd: &Path,
    files: &[PathBuf],
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let tasks = plan(config, rules, cwd, files);
    println!("{}", formatter.format_plan(&tasks));
    Ok(())
}
