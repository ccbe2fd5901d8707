// Rust guideline compliant 2026-10-19

//! Tracing setup for the CLI.

use anyhow::Result;
use tracing::Level;

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error for anything other than error, warn, info or debug.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => anyhow::bail!("Invalid log level: {}", other),
    }
}

/// Installs a stderr fmt subscriber at `level`.
///
/// A subscriber that is already installed is left in place.
///
/// # Errors
///
/// Returns an error if the level name is invalid.
pub fn init_tracing(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}
