// Rust guideline compliant 2026-10-19

//! Stagerun Git Hooks
//!
//! This crate runs the configured commands against staged files:
//! - Staged file discovery from the Git index
//! - Task execution without a shell, one argument per path
//! - Pre-commit hook entry point and hook installation

pub mod install;
pub mod pre_commit;
pub mod runner;
pub mod staged;

pub use install::{install_hook, HOOK_COMMAND};
pub use pre_commit::{pre_commit_hook, run_pre_commit, HookOptions};
pub use runner::{run_tasks, CommandOutcome, HookReport, Outcome};
pub use staged::staged_files;
