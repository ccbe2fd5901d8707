// Rust guideline compliant 2026-10-19

//! Command builders.
//!
//! A builder turns an ordered list of file paths into one command line.
//! Builders are pure: the same tools, working directory and paths always give
//! the same string, and the input slice is never modified. Paths are not
//! quoted, so the command line is byte-compatible with what the lint and
//! format tools have always been invoked with.
//!
//! The string is for display and reports. Execution uses [`CommandBuilder::args`],
//! which keeps every path a single argument no matter what characters it holds.

use crate::paths::relative_all;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default lint runner.
pub const DEFAULT_LINT_TOOL: &str = "yarn";

/// Default formatter executable.
pub const DEFAULT_FORMATTER_TOOL: &str = "prettier";

/// Kind of command produced for a set of matched files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandBuilder {
    /// `<lint-tool> run lint <paths>`
    Lint,
    /// `<formatter-tool> <paths> `
    Format,
    /// `<program> <paths>`
    Exec(String),
}

/// Tool names and switches the builders read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toolchain<'a> {
    /// Lint runner invoked as `<lint_tool> run lint`.
    pub lint_tool: &'a str,
    /// Formatter executable.
    pub formatter_tool: &'a str,
    /// Whether the format command keeps its trailing space.
    pub format_trailing_space: bool,
}

impl Default for Toolchain<'static> {
    fn default() -> Self {
        Self {
            lint_tool: DEFAULT_LINT_TOOL,
            formatter_tool: DEFAULT_FORMATTER_TOOL,
            format_trailing_space: true,
        }
    }
}

impl CommandBuilder {
    /// Builds the command line for `filenames`.
    ///
    /// # Arguments
    ///
    /// * `tools` - Tool names to substitute
    /// * `cwd` - Directory the paths are made relative to
    /// * `filenames` - Matched files, in staging order
    ///
    /// # Returns
    ///
    /// The command string. Never fails; an empty list yields a command
    /// with no path arguments.
    pub fn build<P: AsRef<Path>>(
        &self,
        tools: &Toolchain<'_>,
        cwd: &Path,
        filenames: &[P],
    ) -> String {
        match self {
            CommandBuilder::Lint => build_lint_command(tools.lint_tool, cwd, filenames),
            CommandBuilder::Format => build_format_command(
                tools.formatter_tool,
                cwd,
                filenames,
                tools.format_trailing_space,
            ),
            CommandBuilder::Exec(program) => build_exec_command(program, cwd, filenames),
        }
    }

    /// Builds the argument vector for `filenames`.
    ///
    /// The tool or program string is split on whitespace; each relative path
    /// follows as one argument. Joining the result with spaces gives the
    /// [`CommandBuilder::build`] string, minus the format command's trailing
    /// space.
    ///
    /// # Arguments
    ///
    /// * `tools` - Tool names to substitute
    /// * `cwd` - Directory the paths are made relative to
    /// * `filenames` - Matched files, in staging order
    pub fn args<P: AsRef<Path>>(
        &self,
        tools: &Toolchain<'_>,
        cwd: &Path,
        filenames: &[P],
    ) -> Vec<String> {
        let mut args: Vec<String> = match self {
            CommandBuilder::Lint => split_words(tools.lint_tool)
                .chain(["run".to_string(), "lint".to_string()])
                .collect(),
            CommandBuilder::Format => split_words(tools.formatter_tool).collect(),
            CommandBuilder::Exec(program) => split_words(program).collect(),
        };
        args.extend(relative_all(cwd, filenames));
        args
    }

    /// Short label used in logs and reports.
    pub fn label(&self) -> &str {
        match self {
            CommandBuilder::Lint => "lint",
            CommandBuilder::Format => "format",
            CommandBuilder::Exec(program) => program,
        }
    }
}

fn split_words(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split_whitespace().map(str::to_string)
}

/// Builds `"<lint_tool> run lint <relative paths>"`.
///
/// With no paths the result still ends in a space, e.g. `"yarn run lint "`.
pub fn build_lint_command<P: AsRef<Path>>(lint_tool: &str, cwd: &Path, filenames: &[P]) -> String {
    format!(
        "{} run lint {}",
        lint_tool,
        relative_all(cwd, filenames).join(" ")
    )
}

/// Builds `"<formatter_tool> <relative paths> "`.
///
/// The trailing space is kept when `trailing_space` is set.
pub fn build_format_command<P: AsRef<Path>>(
    formatter_tool: &str,
    cwd: &Path,
    filenames: &[P],
    trailing_space: bool,
) -> String {
    let joined = relative_all(cwd, filenames).join(" ");
    if trailing_space {
        format!("{} {} ", formatter_tool, joined)
    } else {
        format!("{} {}", formatter_tool, joined)
    }
}

/// Builds `"<program> <relative paths>"`, or just `program` with no paths.
pub fn build_exec_command<P: AsRef<Path>>(program: &str, cwd: &Path, filenames: &[P]) -> String {
    if filenames.is_empty() {
        return program.to_string();
    }
    format!("{} {}", program, relative_all(cwd, filenames).join(" "))
}
