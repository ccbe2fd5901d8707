// Rust guideline compliant 2026-10-19

//! Task execution.
//!
//! Commands of one task run in order and stop at the first failure. Tasks
//! themselves run one after another, or on the rayon pool when parallel
//! execution is enabled.
//!
//! Programs are spawned directly from their argument vectors. No shell sees
//! the staged paths, so quotes, spaces and `$(...)` in file names stay literal.

use rayon::prelude::*;
use serde::Serialize;
use stagerun_core::{Error, Result, Task};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// How a planned command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Exited with status zero.
    Passed,
    /// Exited non-zero or was killed by a signal.
    Failed,
    /// Not run because an earlier command of the same task failed.
    Skipped,
    /// Not run because this was a dry run.
    Planned,
}

/// Result of one planned command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    /// Pattern of the task the command belongs to.
    pub pattern: String,
    /// Builder label.
    pub label: String,
    /// Command line, as shown to users.
    pub command: String,
    /// How the command ended.
    pub outcome: Outcome,
    /// Exit code, when the process exited normally.
    pub exit_code: Option<i32>,
}

/// Everything a hook run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookReport {
    /// Staged files the rules were evaluated against.
    pub files: Vec<PathBuf>,
    /// Planned tasks.
    pub tasks: Vec<Task>,
    /// Per-command results, in plan order.
    pub outcomes: Vec<CommandOutcome>,
}

impl HookReport {
    /// Commands that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CommandOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.outcome == Outcome::Failed)
    }

    /// Returns whether no command failed.
    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Converts failed commands into an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandFailed`] listing every failed command line.
    pub fn ensure_success(&self) -> Result<()> {
        let failed: Vec<String> = self.failures().map(|o| o.command.clone()).collect();
        if failed.is_empty() {
            Ok(())
        } else {
            Err(Error::CommandFailed(failed))
        }
    }
}

/// Runs every task's commands in `cwd`.
///
/// # Arguments
///
/// * `tasks` - Planned tasks, in rule order
/// * `cwd` - Working directory for the spawned programs
/// * `parallel` - Whether tasks may run concurrently
///
/// # Returns
///
/// One outcome per planned command, in plan order regardless of `parallel`.
///
/// # Errors
///
/// Returns an error if a program cannot be spawned. A command exiting non-zero
/// is reported as [`Outcome::Failed`], not as an error.
pub fn run_tasks(tasks: &[Task], cwd: &Path, parallel: bool) -> Result<Vec<CommandOutcome>> {
    let per_task: Vec<Vec<CommandOutcome>> = if parallel {
        tasks
            .par_iter()
            .map(|task| run_task(task, cwd))
            .collect::<Result<_>>()?
    } else {
        tasks
            .iter()
            .map(|task| run_task(task, cwd))
            .collect::<Result<_>>()?
    };

    Ok(per_task.into_iter().flatten().collect())
}

/// Outcomes for a dry run: every command marked [`Outcome::Planned`].
pub fn plan_only(tasks: &[Task]) -> Vec<CommandOutcome> {
    tasks
        .iter()
        .flat_map(|task| {
            task.commands.iter().map(move |planned| CommandOutcome {
                pattern: task.pattern.clone(),
                label: planned.label.clone(),
                command: planned.command.clone(),
                outcome: Outcome::Planned,
                exit_code: None,
            })
        })
        .collect()
}

fn run_task(task: &Task, cwd: &Path) -> Result<Vec<CommandOutcome>> {
    let mut outcomes = Vec::with_capacity(task.commands.len());
    let mut failed = false;

    for planned in &task.commands {
        let mut outcome = CommandOutcome {
            pattern: task.pattern.clone(),
            label: planned.label.clone(),
            command: planned.command.clone(),
            outcome: Outcome::Skipped,
            exit_code: None,
        };

        if failed {
            tracing::debug!(command = %planned.command, "skipped after earlier failure");
            outcomes.push(outcome);
            continue;
        }

        tracing::info!(pattern = %task.pattern, command = %planned.command, "running");
        let status = spawn_and_wait(&planned.args, cwd).map_err(|source| Error::Spawn {
            command: planned.command.clone(),
            source,
        })?;

        outcome.exit_code = status.code();
        if status.success() {
            outcome.outcome = Outcome::Passed;
        } else {
            tracing::warn!(
                command = %planned.command,
                exit_code = ?status.code(),
                "command failed"
            );
            outcome.outcome = Outcome::Failed;
            failed = true;
        }
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

fn spawn_and_wait(args: &[String], cwd: &Path) -> io::Result<ExitStatus> {
    let (program, rest) = args
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;
    Command::new(program).args(rest).current_dir(cwd).status()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagerun_core::PlannedCommand;
    use tempfile::TempDir;

    fn task(pattern: &str, commands: &[&str]) -> Task {
        Task {
            pattern: pattern.to_string(),
            files: Vec::new(),
            commands: commands
                .iter()
                .map(|c| PlannedCommand {
                    label: "exec".to_string(),
                    command: c.to_string(),
                    args: c.split_whitespace().map(str::to_string).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_plan_only_marks_everything_planned() {
        let tasks = vec![task("*.js", &["a", "b"]), task("*.md", &["c"])];
        let outcomes = plan_only(&tasks);
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| o.outcome == Outcome::Planned));
        assert_eq!(outcomes[2].pattern, "*.md");
    }

    #[test]
    fn test_report_success_and_failure() {
        let mut report = HookReport {
            files: Vec::new(),
            tasks: Vec::new(),
            outcomes: plan_only(&[task("*.js", &["a"])]),
        };
        assert!(report.is_success());
        assert!(report.ensure_success().is_ok());

        report.outcomes[0].outcome = Outcome::Failed;
        assert!(!report.is_success());
        match report.ensure_success() {
            Err(Error::CommandFailed(commands)) => assert_eq!(commands, vec!["a".to_string()]),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_skips_rest_of_task_only() {
        let temp_dir = TempDir::new().unwrap();
        let tasks = vec![
            task("*.js", &["false", "true"]),
            task("*.md", &["true"]),
        ];
        let outcomes = run_tasks(&tasks, temp_dir.path(), false).unwrap();
        assert_eq!(outcomes[0].outcome, Outcome::Failed);
        assert_eq!(outcomes[0].exit_code, Some(1));
        assert_eq!(outcomes[1].outcome, Outcome::Skipped);
        assert_eq!(outcomes[2].outcome, Outcome::Passed);
    }

    #[cfg(unix)]
    #[test]
    fn test_parallel_keeps_plan_order() {
        let temp_dir = TempDir::new().unwrap();
        let tasks = vec![
            task("a", &["true"]),
            task("b", &["false"]),
            task("c", &["true"]),
        ];
        let outcomes = run_tasks(&tasks, temp_dir.path(), true).unwrap();
        let patterns: Vec<&str> = outcomes.iter().map(|o| o.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["a", "b", "c"]);
        assert_eq!(outcomes[1].outcome, Outcome::Failed);
    }

    #[cfg(unix)]
    #[test]
    fn test_commands_run_in_cwd() {
        let temp_dir = TempDir::new().unwrap();
        let tasks = vec![task("*", &["touch marker.txt"])];
        run_tasks(&tasks, temp_dir.path(), false).unwrap();
        assert!(temp_dir.path().join("marker.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_arguments_are_not_shell_expanded() {
        let temp_dir = TempDir::new().unwrap();
        let mut tasks = vec![task("*", &["touch"])];
        tasks[0].commands[0]
            .args
            .extend(["$(touch pwned)".to_string(), "a b.txt".to_string()]);
        let outcomes = run_tasks(&tasks, temp_dir.path(), false).unwrap();
        assert_eq!(outcomes[0].outcome, Outcome::Passed);
        assert!(temp_dir.path().join("$(touch pwned)").exists());
        assert!(temp_dir.path().join("a b.txt").exists());
        assert!(!temp_dir.path().join("pwned").exists());
    }

    #[test]
    fn test_empty_argument_vector_is_a_spawn_error() {
        let temp_dir = TempDir::new().unwrap();
        let tasks = vec![task("*", &[""])];
        match run_tasks(&tasks, temp_dir.path(), false) {
            Err(Error::Spawn { source, .. }) => {
                assert_eq!(source.kind(), io::ErrorKind::InvalidInput)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
