// Rust guideline compliant 2026-10-19

//! Pre-commit hook implementation.
//!
//! Loads the configuration, collects staged files, plans the tasks and runs
//! their commands from the work tree root.

use crate::runner::{plan_only, run_tasks, HookReport};
use crate::staged::{git_error, staged_files};
use git2::Repository;
use stagerun_core::config::CONFIG_DIR;
use stagerun_core::{Config, Result};
use std::path::{Path, PathBuf};

/// Options for a hook run.
#[derive(Debug, Clone, Default)]
pub struct HookOptions {
    /// Plan the commands without running them.
    pub dry_run: bool,
    /// Configuration file to use instead of `.stagerun/config.toml`.
    pub config_path: Option<PathBuf>,
}

/// Runs the pre-commit hook and reports every command's outcome.
///
/// Failing commands do not make this return an error; inspect the report or
/// call [`HookReport::ensure_success`].
///
/// # Arguments
///
/// * `repo_path` - Path inside the Git repository
/// * `options` - Hook options
///
/// # Errors
///
/// Returns an error if:
/// - The path is not inside a Git repository with a work tree
/// - The configuration cannot be loaded or is invalid
/// - A command cannot be spawned
pub fn run_pre_commit(repo_path: &Path, options: &HookOptions) -> Result<HookReport> {
    let repo = Repository::discover(repo_path).map_err(git_error)?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| stagerun_core::Error::Git("Repository has no work tree".to_string()))?
        .to_path_buf();

    let (config, rules) = match &options.config_path {
        Some(path) => Config::load_file(path)?,
        None => Config::load(&workdir.join(CONFIG_DIR))?,
    };

    let files = staged_files(&repo)?;
    tracing::info!(count = files.len(), "collected staged files");

    let tasks = rules.plan(&config.toolchain(), &workdir, &files);
    if tasks.is_empty() {
        tracing::debug!("no staged file matched any rule");
    }

    let outcomes = if options.dry_run {
        plan_only(&tasks)
    } else {
        run_tasks(&tasks, &workdir, config.parallel)?
    };

    Ok(HookReport {
        files,
        tasks,
        outcomes,
    })
}

/// Runs the pre-commit hook.
///
/// # Arguments
///
/// * `repo_path` - Path inside the Git repository
/// * `options` - Hook options
///
/// # Returns
///
/// The report when every command passed.
///
/// # Errors
///
/// Returns an error if:
/// - [`run_pre_commit`] fails
/// - Any command exited unsuccessfully
pub fn pre_commit_hook(repo_path: &Path, options: &HookOptions) -> Result<HookReport> {
    let report = run_pre_commit(repo_path, options)?;
    report.ensure_success()?;
    Ok(report)
}
