// Rust guideline compliant 2026-10-19

//! CLI entry point for the Stagerun pre-commit hook.

use stagerun_hooks::HookOptions;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let repo_path = std::env::current_dir()?;
    stagerun_hooks::pre_commit_hook(&repo_path, &HookOptions::default())?;
    Ok(())
}
