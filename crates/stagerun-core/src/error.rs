// Rust guideline compliant 2026-10-19

//! Error types for the Stagerun core library.

use thiserror::Error;

/// Result type alias for Stagerun operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Stagerun operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value or file.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Glob pattern that cannot be compiled.
    #[error("Invalid glob pattern {pattern}: {source}")]
    Glob {
        /// The offending pattern.
        pattern: String,
        /// Underlying compile error.
        #[source]
        source: globset::Error,
    },

    /// Git operation error.
    #[error("Git error: {0}")]
    Git(String),

    /// A command could not be started.
    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        /// The command line.
        command: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// One or more commands exited unsuccessfully.
    #[error("Commands failed: {0:?}")]
    CommandFailed(Vec<String>),
}
