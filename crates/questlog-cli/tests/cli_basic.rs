//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. The dev
//! data directory is used so test data stays out of the real profile.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "questlog-cli", "--"])
        .args(args)
        .env("QUESTLOG_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_task_create() {
    let (stdout, _, code) = run_cli(&["task", "create", "Test Task", "--difficulty", "hard"]);
    assert_eq!(code, 0, "Task create failed");
    assert!(stdout.contains("Task created:"));
    assert!(stdout.contains("100 XP"));
}

#[test]
fn test_task_create_empty_title_fails() {
    let (_, stderr, code) = run_cli(&["task", "create", "   "]);
    assert_ne!(code, 0, "Blank title should be rejected");
    assert!(stderr.contains("error:"));
}

#[test]
fn test_task_list() {
    let _ = run_cli(&["task", "create", "List Test"]);
    let (_, _, code) = run_cli(&["task", "list"]);
    assert_eq!(code, 0, "Task list failed");
}

#[test]
fn test_task_list_json() {
    let _ = run_cli(&["task", "create", "List JSON Test"]);
    let (stdout, _, code) = run_cli(&["task", "list", "--json", "--all"]);
    assert_eq!(code, 0, "Task list JSON failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert!(parsed.is_array());
}

#[test]
fn test_task_complete_awards_xp() {
    let _ = run_cli(&["task", "create", "Complete Test"]);
    let (stdout, _, _) = run_cli(&["task", "list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    let tasks = parsed.as_array().expect("expected array");
    if let Some(task) = tasks.iter().find(|t| t["title"] == "Complete Test") {
        let task_id = task["id"].as_str().unwrap();
        let (stdout, _, code) = run_cli(&["task", "complete", task_id]);
        assert_eq!(code, 0, "Task complete failed");
        assert!(stdout.contains("+50 XP"));
    }
}

#[test]
fn test_task_complete_unknown_id_fails() {
    let (_, stderr, code) = run_cli(&["task", "complete", "no-such-task"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_checkin_sprint_banner() {
    let (stdout, _, code) = run_cli(&[
        "checkin",
        "--energy",
        "5",
        "--sleep",
        "excellent",
        "--mood",
        "energized",
    ]);
    assert_eq!(code, 0, "Checkin failed");
    assert!(stdout.contains("Sprint mode"));
}

#[test]
fn test_checkin_rest_banner() {
    let (stdout, _, code) = run_cli(&[
        "checkin",
        "--energy",
        "1",
        "--sleep",
        "poor",
        "--mood",
        "stressed",
    ]);
    assert_eq!(code, 0, "Checkin failed");
    assert!(stdout.contains("Rest mode"));
}

#[test]
fn test_checkin_rejects_out_of_range_energy() {
    let (_, stderr, code) = run_cli(&[
        "checkin",
        "--energy",
        "9",
        "--sleep",
        "good",
        "--mood",
        "neutral",
    ]);
    assert_ne!(code, 0, "Energy 9 should be rejected");
    assert!(stderr.contains("error:"));
}

#[test]
fn test_checkin_json_output() {
    let (stdout, _, code) = run_cli(&[
        "checkin",
        "--energy",
        "3",
        "--sleep",
        "good",
        "--mood",
        "neutral",
        "--json",
    ]);
    assert_eq!(code, 0, "Checkin JSON failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert!(parsed.is_array());
}

#[test]
fn test_stats_show() {
    let (_, _, code) = run_cli(&["stats", "show"]);
    assert_eq!(code, 0, "Stats show failed");
}

#[test]
fn test_stats_show_json() {
    let (stdout, _, code) = run_cli(&["stats", "show", "--json"]);
    assert_eq!(code, 0, "Stats show JSON failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert!(parsed["level"].is_number());
}

#[test]
fn test_stats_next() {
    let (stdout, _, code) = run_cli(&["stats", "next"]);
    assert_eq!(code, 0, "Stats next failed");
    assert!(stdout.contains("XP to reach level"));
}

#[test]
fn test_config_get() {
    let (stdout, _, code) = run_cli(&["config", "get", "energy.strategy"]);
    assert_eq!(code, 0, "Config get failed");
    assert!(stdout.contains("additive") || stdout.contains("averaged"));
}

#[test]
fn test_config_set_strategy() {
    let (_, _, code) = run_cli(&["config", "set", "energy.strategy", "averaged"]);
    assert_eq!(code, 0, "Config set failed");
    let _ = run_cli(&["config", "set", "energy.strategy", "additive"]);
}

#[test]
fn test_config_set_unknown_key_fails() {
    let (_, _, code) = run_cli(&["config", "set", "nope.nope", "1"]);
    assert_ne!(code, 0, "Unknown key should fail");
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "Config list failed");
    assert!(stdout.contains("profile"));
}
