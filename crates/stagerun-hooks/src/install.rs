// Rust guideline compliant 2026-10-19

//! Git hook installation.

use crate::staged::git_error;
use git2::Repository;
use stagerun_core::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Command the installed hook script runs.
pub const HOOK_COMMAND: &str = "stagerun hooks pre-commit";

/// Installs the pre-commit hook script.
///
/// Writes `hooks/pre-commit` inside the repository's Git directory, replacing
/// any existing script, and marks it executable on Unix.
///
/// # Arguments
///
/// * `repo_path` - Path inside the Git repository
///
/// # Returns
///
/// The path of the written hook script.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened or the script cannot
/// be written.
pub fn install_hook(repo_path: &Path) -> Result<PathBuf> {
    let repo = Repository::discover(repo_path).map_err(git_error)?;
    let hooks_dir = repo.path().join("hooks");
    fs::create_dir_all(&hooks_dir)?;

    let hook_path = hooks_dir.join("pre-commit");
    fs::write(&hook_path, format!("#!/bin/sh\n{}\n", HOOK_COMMAND))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    tracing::info!(path = %hook_path.display(), "installed pre-commit hook");
    Ok(hook_path)
}
