// Rust guideline compliant 2026-10-19

//! Staged file discovery.

use git2::{Delta, ErrorCode, Repository, Tree};
use stagerun_core::{Error, Result};
use std::path::PathBuf;

/// Lists the files staged for the next commit.
///
/// Compares the index against `HEAD` (or against nothing on an unborn branch)
/// and keeps added, modified, renamed, copied and type-changed entries.
/// Deleted files are left out since there is nothing to lint or format.
///
/// # Arguments
///
/// * `repo` - The Git repository to inspect
///
/// # Returns
///
/// Absolute paths under the work tree, in index order.
///
/// # Errors
///
/// Returns an error if the repository is bare or the index cannot be read.
pub fn staged_files(repo: &Repository) -> Result<Vec<PathBuf>> {
    let workdir = repo
        .workdir()
        .ok_or_else(|| Error::Git("Repository has no work tree".to_string()))?;

    let head_tree = head_tree(repo)?;
    let index = repo.index().map_err(git_error)?;
    let diff = repo
        .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)
        .map_err(git_error)?;

    let files = diff
        .deltas()
        .filter(|delta| {
            matches!(
                delta.status(),
                Delta::Added | Delta::Modified | Delta::Renamed | Delta::Copied | Delta::Typechange
            )
        })
        .filter_map(|delta| delta.new_file().path().map(|path| workdir.join(path)))
        .collect();

    Ok(files)
}

fn head_tree(repo: &Repository) -> Result<Option<Tree<'_>>> {
    match repo.head() {
        Ok(head) => head.peel_to_tree().map(Some).map_err(git_error),
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => Ok(None),
        Err(e) => Err(git_error(e)),
    }
}

pub(crate) fn git_error(err: git2::Error) -> Error {
    Error::Git(err.message().to_string())
}
