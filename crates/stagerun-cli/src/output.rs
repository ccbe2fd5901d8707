// Rust guideline compliant 2026-10-19

//! Output formatting module for the Stagerun CLI.
//!
//! Plans and hook reports are rendered either as JSON for machine
//! consumption or as plain text for people.

use serde_json::json;
use stagerun_core::Task;
use stagerun_hooks::{HookReport, Outcome};
use std::io::Write;
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
pub trait OutputFormatter {
    /// Formats planned tasks.
    ///
    /// # Arguments
    /// * `tasks` - The tasks to format
    fn format_plan(&self, tasks: &[Task]) -> String;

    /// Formats a hook run report.
    ///
    /// # Arguments
    /// * `report` - The report to format
    fn format_report(&self, report: &HookReport) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_plan(&self, tasks: &[Task]) -> String {
        let output = json!({
            "tasks": tasks,
            "total": tasks.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize plan" }).to_string())
    }

    fn format_report(&self, report: &HookReport) -> String {
        let output = json!({
            "files": report.files,
            "outcomes": report.outcomes,
            "success": report.is_success(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize report" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Plain text output formatter.
pub struct PlainFormatter {
    use_color: bool,
}

impl PlainFormatter {
    /// Creates a new plain formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to emit ANSI color codes
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn buffer(&self) -> Buffer {
        if self.use_color {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        }
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_plan(&self, tasks: &[Task]) -> String {
        if tasks.is_empty() {
            return "No files matched any rule.".to_string();
        }

        let mut output = String::new();
        for task in tasks {
            let noun = if task.files.len() == 1 { "file" } else { "files" };
            output.push_str(&format!("{} ({} {})\n", task.pattern, task.files.len(), noun));
            for planned in &task.commands {
                output.push_str(&format!("  {}\n", planned.command));
            }
        }
        output
    }

    fn format_report(&self, report: &HookReport) -> String {
        if report.outcomes.is_empty() {
            return "No files matched any rule.".to_string();
        }

        let mut buffer = self.buffer();
        for outcome in &report.outcomes {
            let (marker, color) = match outcome.outcome {
                Outcome::Passed => ("passed ", Color::Green),
                Outcome::Failed => ("failed ", Color::Red),
                Outcome::Skipped => ("skipped", Color::Yellow),
                Outcome::Planned => ("planned", Color::Cyan),
            };
            let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
            let _ = write!(buffer, "{}", marker);
            let _ = buffer.reset();
            let _ = writeln!(buffer, " {}", outcome.command);
        }
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    fn format_error(&self, error: &str) -> String {
        let mut buffer = self.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error:");
        let _ = buffer.reset();
        let _ = write!(buffer, " {}", error);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `json` - Whether JSON output was requested
/// * `use_color` - Whether plain output may use color
pub fn create_formatter(json: bool, use_color: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(PlainFormatter::new(use_color))
    }
}
