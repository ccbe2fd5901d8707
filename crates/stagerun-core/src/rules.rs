// Rust guideline compliant 2026-10-19

//! Pattern rules and task planning.
//!
//! Rules are kept in insertion order and evaluated independently, so one file
//! can land in several tasks.

use crate::builder::{CommandBuilder, Toolchain};
use crate::paths::relative_to;
use crate::{Error, Result};
use globset::{GlobBuilder, GlobMatcher};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Glob for files the lint command runs on.
pub const LINT_PATTERN: &str = "**/*.{js,jsx,ts,tsx}";

/// Glob for files the format command runs on.
pub const FORMAT_PATTERN: &str = "**/*.{js,jsx,ts,tsx,json,md}";

/// A glob pattern and the commands to build for the files it matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    /// Glob matched against paths relative to the working directory.
    pub pattern: String,
    /// Builders run in order for the matched files.
    pub commands: Vec<CommandBuilder>,
}

impl PatternRule {
    /// Creates a rule.
    pub fn new(pattern: impl Into<String>, commands: Vec<CommandBuilder>) -> Self {
        Self {
            pattern: pattern.into(),
            commands,
        }
    }
}

/// The lint rule followed by the format rule.
pub fn default_rules() -> Vec<PatternRule> {
    vec![
        PatternRule::new(LINT_PATTERN, vec![CommandBuilder::Lint]),
        PatternRule::new(FORMAT_PATTERN, vec![CommandBuilder::Format]),
    ]
}

/// One command planned for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedCommand {
    /// Builder label (`lint`, `format` or the exec program).
    pub label: String,
    /// Complete command line, as shown to users.
    pub command: String,
    /// Program followed by its arguments; what actually gets spawned.
    pub args: Vec<String>,
}

/// The commands one rule produces for the files it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Pattern of the originating rule.
    pub pattern: String,
    /// Matched files, in input order.
    pub files: Vec<PathBuf>,
    /// Commands to run in order.
    pub commands: Vec<PlannedCommand>,
}

/// Compiled, validated rule list.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<(PatternRule, GlobMatcher)>,
}

impl RuleSet {
    /// Compiles and validates `rules`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a pattern appears more than once
    /// - a rule has no commands
    /// - an exec command is blank
    /// - a pattern is not a valid glob
    pub fn compile(rules: &[PatternRule]) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut compiled = Vec::with_capacity(rules.len());

        for rule in rules {
            if !seen.insert(rule.pattern.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate rule pattern: {}",
                    rule.pattern
                )));
            }
            if rule.commands.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "rule {} has no commands",
                    rule.pattern
                )));
            }
            if rule
                .commands
                .iter()
                .any(|c| matches!(c, CommandBuilder::Exec(program) if program.trim().is_empty()))
            {
                return Err(Error::InvalidConfig(format!(
                    "rule {} has an empty exec command",
                    rule.pattern
                )));
            }
            compiled.push((rule.clone(), compile_glob(&rule.pattern)?));
        }

        Ok(Self { rules: compiled })
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter().map(|(rule, _)| rule)
    }

    /// Returns whether `path` matches `pattern`'s rule.
    ///
    /// `path` is made relative to `cwd` first. Paths outside `cwd` never match.
    pub fn is_match(&self, pattern: &str, cwd: &Path, path: &Path) -> bool {
        self.rules
            .iter()
            .find(|(rule, _)| rule.pattern == pattern)
            .map(|(_, matcher)| matches_relative(matcher, cwd, path))
            .unwrap_or(false)
    }

    /// Plans the tasks for `files`.
    ///
    /// Every rule is evaluated in order against every file; rules that match
    /// nothing are left out.
    ///
    /// # Arguments
    ///
    /// * `tools` - Tool names the builders substitute
    /// * `cwd` - Directory globs are matched and paths rendered relative to
    /// * `files` - Staged files, absolute or `cwd`-relative
    ///
    /// # Returns
    ///
    /// One task per rule with at least one matched file.
    pub fn plan<P: AsRef<Path>>(
        &self,
        tools: &Toolchain<'_>,
        cwd: &Path,
        files: &[P],
    ) -> Vec<Task> {
        self.rules
            .iter()
            .filter_map(|(rule, matcher)| {
                let matched: Vec<PathBuf> = files
                    .iter()
                    .map(AsRef::<Path>::as_ref)
                    .filter(|path| matches_relative(matcher, cwd, path))
                    .map(Path::to_path_buf)
                    .collect();

                if matched.is_empty() {
                    return None;
                }

                let commands = rule
                    .commands
                    .iter()
                    .map(|builder| PlannedCommand {
                        label: builder.label().to_string(),
                        command: builder.build(tools, cwd, &matched),
                        args: builder.args(tools, cwd, &matched),
                    })
                    .collect();

                Some(Task {
                    pattern: rule.pattern.clone(),
                    files: matched,
                    commands,
                })
            })
            .collect()
    }
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| Error::Glob {
            pattern: pattern.to_string(),
            source,
        })
}

fn matches_relative(matcher: &GlobMatcher, cwd: &Path, path: &Path) -> bool {
    let relative = relative_to(cwd, path);
    if relative.is_empty() || relative == ".." || relative.starts_with("../") {
        return false;
    }
    matcher.is_match(&relative)
}
