// Rust guideline compliant 2026-10-19

//! Implementation of the `stagerun formatter-options` command.

use crate::terminal::print_success;
use anyhow::Result;
use stagerun_core::Config;
use std::path::Path;

/// Prints the formatter options as JSON, or writes them to `write`.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn execute(config: &Config, write: Option<&Path>, use_color: bool) -> Result<()> {
    match write {
        Some(path) => {
            config.formatter.write_to(path)?;
            print_success(
                &format!("Wrote formatter options to {}", path.display()),
                use_color,
            );
        }
        None => print!("{}", config.formatter.to_json_pretty()?),
    }
    Ok(())
}
