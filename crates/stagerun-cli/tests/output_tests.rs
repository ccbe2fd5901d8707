// Rust guideline compliant 2026-10-19

//! Unit tests for output formatting module.

use stagerun_cli::create_formatter;
use stagerun_core::{PlannedCommand, Task};
use stagerun_hooks::{CommandOutcome, HookReport, Outcome};
use std::path::PathBuf;

fn create_test_task() -> Task {
    Task {
        pattern: "**/*.{js,jsx,ts,tsx}".to_string(),
        files: vec![PathBuf::from("/repo/src/a.ts")],
        commands: vec![PlannedCommand {
            label: "lint".to_string(),
            command: "yarn run lint src/a.ts".to_string(),
            args: vec![
                "yarn".to_string(),
                "run".to_string(),
                "lint".to_string(),
                "src/a.ts".to_string(),
            ],
        }],
    }
}

fn create_test_report(outcome: Outcome) -> HookReport {
    HookReport {
        files: vec![PathBuf::from("/repo/src/a.ts")],
        tasks: vec![create_test_task()],
        outcomes: vec![CommandOutcome {
            pattern: "**/*.{js,jsx,ts,tsx}".to_string(),
            label: "lint".to_string(),
            command: "yarn run lint src/a.ts".to_string(),
            outcome,
            exit_code: Some(0),
        }],
    }
}

#[test]
fn test_json_formatter_plan() {
    let formatter = create_formatter(true, false);
    let output = formatter.format_plan(&[create_test_task()]);
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value["total"], 1);
    assert_eq!(value["tasks"][0]["commands"][0]["command"], "yarn run lint src/a.ts");
}

#[test]
fn test_json_formatter_report() {
    let formatter = create_formatter(true, false);
    let output = formatter.format_report(&create_test_report(Outcome::Failed));
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value["success"], false);
    assert_eq!(value["outcomes"][0]["outcome"], "failed");
}

#[test]
fn test_json_formatter_error() {
    let formatter = create_formatter(true, false);
    let output = formatter.format_error("Test error message");
    assert!(output.contains("Test error message"));
    assert!(serde_json::from_str::<serde_json::Value>(&output).is_ok());
}

#[test]
fn test_plain_formatter_plan() {
    let formatter = create_formatter(false, false);
    let output = formatter.format_plan(&[create_test_task()]);
    assert!(output.contains("**/*.{js,jsx,ts,tsx} (1 file)"));
    assert!(output.contains("  yarn run lint src/a.ts"));
}

#[test]
fn test_plain_formatter_empty_plan() {
    let formatter = create_formatter(false, false);
    assert_eq!(formatter.format_plan(&[]), "No files matched any rule.");
}

#[test]
fn test_plain_formatter_report_without_color() {
    let formatter = create_formatter(false, false);
    let output = formatter.format_report(&create_test_report(Outcome::Passed));
    assert_eq!(output, "passed  yarn run lint src/a.ts\n");
}

#[test]
fn test_plain_formatter_report_with_color() {
    let formatter = create_formatter(false, true);
    let output = formatter.format_report(&create_test_report(Outcome::Failed));
    assert!(output.contains("\u{1b}["));
    assert!(output.contains("yarn run lint src/a.ts"));
}

#[test]
fn test_plain_formatter_error() {
    let formatter = create_formatter(false, false);
    assert_eq!(formatter.format_error("boom"), "Error: boom");
}
