// Rust guideline compliant 2026-10-19

//! Hook command wrappers for invoking Stagerun Git hooks from the CLI.

use crate::output::OutputFormatter;
use anyhow::Result;
use stagerun_hooks::HookOptions;
use std::path::{Path, PathBuf};

/// Runs the requested hook action.
///
/// # Arguments
///
/// * `action` - Hook action
/// * `root` - Directory inside the repository
/// * `config_path` - Optional explicit configuration file
/// * `formatter` - Output formatter for the report
///
/// # Errors
///
/// Returns an error if the hook cannot run or any command failed.
pub fn execute(
    action: HookAction,
    root: &Path,
    config_path: Option<PathBuf>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    match action {
        HookAction::PreCommit { dry_run } => {
            let options = HookOptions {
                dry_run,
                config_path,
            };
            let report = stagerun_hooks::run_pre_commit(root, &options)?;
            println!("{}", formatter.format_report(&report));
            report.ensure_success()?;
            Ok(())
        }
    }
}

/// Supported hook actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::Subcommand)]
pub enum HookAction {
    /// Run the pre-commit hook
    PreCommit {
        /// Print the commands without running them
        #[arg(long)]
        dry_run: bool,
    },
}
