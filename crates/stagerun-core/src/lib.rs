// Rust guideline compliant 2026-10-19

//! Stagerun Core Library
//!
//! This crate provides the configuration side of the Stagerun pre-commit runner:
//! - Command builders (lint, format, arbitrary programs)
//! - Pattern rules and task planning over staged files
//! - The formatter option set
//! - Layered configuration loading
//! - Error types and result handling

pub mod builder;
pub mod config;
pub mod error;
pub mod formatter;
pub mod paths;
pub mod rules;

pub use builder::{build_format_command, build_lint_command, CommandBuilder, Toolchain};
pub use config::Config;
pub use error::{Error, Result};
pub use formatter::{FormatterOptions, TrailingComma};
pub use paths::relative_to;
pub use rules::{default_rules, PatternRule, PlannedCommand, RuleSet, Task};
