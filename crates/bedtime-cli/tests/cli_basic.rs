//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "bedtime-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_estimate_with_flags() {
    let (stdout, _stderr, code) = run_cli(&[
        "estimate", "--wake", "07:00", "--sleep", "8", "--coffee", "1",
    ]);
    assert_eq!(code, 0, "estimate failed");
    assert!(stdout.contains("Your ideal bedtime is..."));
}

#[test]
fn test_estimate_json() {
    let (stdout, _stderr, code) = run_cli(&[
        "estimate", "--wake", "07:00", "--sleep", "8", "--coffee", "1", "--json",
    ]);
    assert_eq!(code, 0, "estimate --json failed");
    assert!(stdout.contains("\"bedtime\""));
    assert!(stdout.contains("\"estimated_sleep_secs\""));
}

#[test]
fn test_estimate_rejects_unparseable_wake_time() {
    let (_stdout, stderr, code) = run_cli(&["estimate", "--wake", "not-a-time"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_estimate_out_of_range_sleep_reports_generic_alert() {
    let (_stdout, stderr, code) = run_cli(&["estimate", "--wake", "07:00", "--sleep", "20"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Failed to calculate bedtime."));
}

#[test]
fn test_model_show() {
    let (stdout, _stderr, code) = run_cli(&["model", "show"]);
    assert_eq!(code, 0, "model show failed");
    assert!(stdout.contains("kind:"));
}

#[test]
fn test_model_check() {
    let (stdout, _stderr, code) = run_cli(&["model", "check"]);
    assert_eq!(code, 0, "model check failed");
    assert!(stdout.contains("ok"));
}

#[test]
fn test_completions_bash() {
    let (stdout, _stderr, code) = run_cli(&["completions", "bash"]);
    assert_eq!(code, 0, "completions failed");
    assert!(!stdout.is_empty());
}
