// Rust guideline compliant 2026-10-19

//! Configuration management for Stagerun.

use crate::builder::{Toolchain, DEFAULT_FORMATTER_TOOL, DEFAULT_LINT_TOOL};
use crate::formatter::FormatterOptions;
use crate::rules::{default_rules, PatternRule, RuleSet};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Directory holding the configuration file, relative to the repository root.
pub const CONFIG_DIR: &str = ".stagerun";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Configuration for Stagerun behavior.
///
/// Loaded once per process and passed by reference to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Lint runner invoked as `<lint_tool> run lint`.
    #[serde(default = "default_lint_tool")]
    pub lint_tool: String,

    /// Formatter executable.
    #[serde(default = "default_formatter_tool")]
    pub formatter_tool: String,

    /// Whether the format command keeps its trailing space.
    #[serde(default = "default_true")]
    pub format_trailing_space: bool,

    /// Whether tasks from different rules run concurrently.
    #[serde(default)]
    pub parallel: bool,

    /// Pattern rules in evaluation order.
    #[serde(default = "default_rules")]
    pub rules: Vec<PatternRule>,

    /// Options written to the formatter configuration file.
    #[serde(default)]
    pub formatter: FormatterOptions,
}

fn default_lint_tool() -> String {
    DEFAULT_LINT_TOOL.to_string()
}

fn default_formatter_tool() -> String {
    DEFAULT_FORMATTER_TOOL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lint_tool: default_lint_tool(),
            formatter_tool: default_formatter_tool(),
            format_trailing_space: true,
            parallel: false,
            rules: default_rules(),
            formatter: FormatterOptions::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.stagerun/config.toml`
    /// 3. Environment variables with `STAGERUN_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Path to the `.stagerun` directory
    ///
    /// # Returns
    ///
    /// The configuration and its compiled rules.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - An environment override has an invalid value
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<(Self, RuleSet)> {
        let config_path = config_dir.join(CONFIG_FILE);
        let config = if config_path.exists() {
            Self::read(&config_path)?
        } else {
            Self::default()
        };
        config.finish()
    }

    /// Loads configuration from an explicit file path.
    ///
    /// Unlike [`Config::load`], the file must exist. Environment overrides
    /// and validation apply as in [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, and otherwise as
    /// [`Config::load`].
    pub fn load_file(path: &Path) -> Result<(Self, RuleSet)> {
        if !path.exists() {
            return Err(Error::InvalidConfig(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Self::read(path)?.finish()
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    fn finish(mut self) -> Result<(Self, RuleSet)> {
        self.apply_env_overrides(|key| std::env::var(key).ok())?;
        let rules = self.validate()?;
        Ok((self, rules))
    }

    /// Parses configuration from TOML text without validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration TOML.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `STAGERUN_LINT_TOOL` - Lint runner name
    /// - `STAGERUN_FORMATTER_TOOL` - Formatter executable
    /// - `STAGERUN_FORMAT_TRAILING_SPACE` - Keep the format command's trailing space (true/false)
    /// - `STAGERUN_PARALLEL` - Run rule tasks concurrently (true/false)
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value of an environment variable, if set
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean variable is not `true` or `false`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("STAGERUN_LINT_TOOL") {
            self.lint_tool = val;
        }

        if let Some(val) = lookup("STAGERUN_FORMATTER_TOOL") {
            self.formatter_tool = val;
        }

        if let Some(val) = lookup("STAGERUN_FORMAT_TRAILING_SPACE") {
            self.format_trailing_space = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "STAGERUN_FORMAT_TRAILING_SPACE must be true or false".to_string(),
                )
            })?;
        }

        if let Some(val) = lookup("STAGERUN_PARALLEL") {
            self.parallel = val.parse().map_err(|_| {
                Error::InvalidConfig("STAGERUN_PARALLEL must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Returns
    ///
    /// The compiled rules, so callers do not compile them a second time.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a tool name is empty
    /// - a rule is invalid (see [`RuleSet::compile`])
    /// - the formatter options are invalid
    pub fn validate(&self) -> Result<RuleSet> {
        if self.lint_tool.trim().is_empty() {
            return Err(Error::InvalidConfig("lint_tool must not be empty".to_string()));
        }

        if self.formatter_tool.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "formatter_tool must not be empty".to_string(),
            ));
        }

        self.formatter.validate()?;
        RuleSet::compile(&self.rules)
    }

    /// Borrowed view of the tool settings the builders read.
    pub fn toolchain(&self) -> Toolchain<'_> {
        Toolchain {
            lint_tool: &self.lint_tool,
            formatter_tool: &self.formatter_tool,
            format_trailing_space: self.format_trailing_space,
        }
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Path to the `.stagerun` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
