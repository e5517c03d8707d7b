//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against an isolated data
//! directory and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "-p", "dayplan-cli", "--"])
        .args(args)
        .env("DAYPLAN_DATA_DIR", data_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn category_list_seeds_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(dir.path(), &["category", "list"]);
    assert_eq!(code, 0, "category list failed: {stderr}");
    assert!(stdout.contains("Work"));
    assert!(stdout.contains("Overtime"));
    assert_eq!(stdout.lines().count(), 9);
}

#[test]
fn block_add_and_day_show() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(
        dir.path(),
        &[
            "block", "add", "Work", "--start", "09:00", "--end", "17:30", "--title", "Deep work",
            "--date", "2026-08-07",
        ],
    );
    assert_eq!(code, 0, "block add failed: {stderr}");
    assert!(stdout.contains("block added:"));

    let (stdout, _, code) = run_cli(dir.path(), &["day", "show", "2026-08-07"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("9:00 - 17:30"));
    assert!(stdout.contains("[Work]"));
    assert!(stdout.contains("free: 15h30m"));
}

#[test]
fn block_add_rejects_inverted_range() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(
        dir.path(),
        &[
            "block", "add", "Work", "--start", "10:00", "--end", "09:00", "--date", "2026-08-07",
        ],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid time range"));
}

#[test]
fn stats_week_reports_both_overtime_paths() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(
        dir.path(),
        &[
            "block", "add", "Overtime", "--start", "17:30", "--end", "19:00", "--date",
            "2026-08-03",
        ],
    );
    run_cli(
        dir.path(),
        &[
            "track", "set", "Overtime", "--planned", "120", "--actual", "90", "--date",
            "2026-08-04",
        ],
    );

    let (stdout, stderr, code) =
        run_cli(dir.path(), &["stats", "week", "2026-08-05", "--json"]);
    assert_eq!(code, 0, "stats week failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["overtime_minutes_by_label"], 90);
    assert_eq!(parsed["tracking"][0]["planned_minutes"], 120);
    assert_eq!(parsed["tracking"][0]["actual_minutes"], 90);
}

#[test]
fn quote_today_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let (first, _, code) = run_cli(dir.path(), &["quote", "today", "2026-08-07"]);
    assert_eq!(code, 0);
    let (second, _, _) = run_cli(dir.path(), &["quote", "today", "2026-08-07"]);
    assert_eq!(first, second);
    assert!(first.contains("--"));
}

#[test]
fn day_paste_copies_blocks_with_fresh_ids() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(
        dir.path(),
        &[
            "block", "add", "Work", "--start", "09:00", "--end", "17:00", "--date", "2026-08-07",
        ],
    );
    let (stdout, stderr, code) = run_cli(
        dir.path(),
        &["day", "paste", "--from", "2026-08-07", "2026-08-10", "2026-08-11"],
    );
    assert_eq!(code, 0, "paste failed: {stderr}");
    assert!(stdout.contains("2 date(s)"));

    let (source, _, _) = run_cli(dir.path(), &["block", "list", "2026-08-07", "--json"]);
    let (pasted, _, _) = run_cli(dir.path(), &["block", "list", "2026-08-10", "--json"]);
    let source: serde_json::Value = serde_json::from_str(&source).unwrap();
    let pasted: serde_json::Value = serde_json::from_str(&pasted).unwrap();
    assert_eq!(source[0]["start_hour"], pasted[0]["start_hour"]);
    assert_ne!(source[0]["id"], pasted[0]["id"]);
}
