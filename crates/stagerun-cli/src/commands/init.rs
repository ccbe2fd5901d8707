// Rust guideline compliant 2026-10-19

//! Implementation of the `stagerun init` command.
//!
//! Writes the default configuration and the formatter options file at the
//! work tree root, then installs the pre-commit hook.

use anyhow::Result;
use git2::Repository;
use stagerun_core::config::{CONFIG_DIR, CONFIG_FILE};
use stagerun_core::formatter::FORMATTER_CONFIG_FILE;
use stagerun_core::Config;
use std::fs;
use std::path::Path;

/// Initializes Stagerun in the repository containing `start`.
///
/// Nothing is written unless `start` is inside a Git repository with a work
/// tree. Existing configuration and formatter files are left untouched; the
/// hook script is always rewritten.
///
/// # Arguments
///
/// * `start` - Any path inside the repository
///
/// # Returns
///
/// Ok if initialization was successful, Err otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - `start` is not inside a Git repository, or the repository is bare
/// - The `.stagerun` directory cannot be created
/// - The configuration or formatter file cannot be written
pub fn execute(start: &Path) -> Result<()> {
    let repo = Repository::discover(start)
        .map_err(|_| anyhow::anyhow!("Not a git repository. Run 'git init' first."))?;
    let root = repo
        .workdir()
        .ok_or_else(|| anyhow::anyhow!("Repository has no work tree"))?;

    let config_dir = root.join(CONFIG_DIR);
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    let config_path = config_dir.join(CONFIG_FILE);
    let config = if config_path.exists() {
        Config::load(&config_dir)?.0
    } else {
        let config = Config::default();
        config.save(&config_dir)?;
        config
    };

    let formatter_path = root.join(FORMATTER_CONFIG_FILE);
    if !formatter_path.exists() {
        config.formatter.write_to(&formatter_path)?;
    }

    let hook_path = stagerun_hooks::install_hook(root)?;

    println!("✓ Stagerun initialized in {}", root.display());
    println!("  - Config at {}/{}", CONFIG_DIR, CONFIG_FILE);
    println!("  - Formatter options at {}", FORMATTER_CONFIG_FILE);
    println!("  - Hook at {}", hook_path.display());

    Ok(())
}
