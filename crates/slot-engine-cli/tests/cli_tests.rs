//! Integration tests for the `slots` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to run the week, day and check
//! subcommands through the actual binary, covering file and stdin input,
//! JSON output and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the events.json fixture.
fn events_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/events.json")
}

/// Helper: path to a fixture with a repeated opening.
fn duplicate_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/duplicate_opening.json")
}

fn events_json() -> String {
    std::fs::read_to_string(events_path()).expect("events.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// week
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn week_text_output() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["week", "--date", "2014-08-10", "-i", events_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2014-08-10: 13:30\n"))
        .stdout(predicate::str::contains("2014-08-11: 9:30, 10:00, 11:30, 12:00\n"))
        .stdout(predicate::str::contains("2014-08-12: -\n"))
        .stdout(predicate::str::contains("2014-08-16: -\n"));
}

#[test]
fn week_prints_seven_lines() {
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args(["week", "--date", "2014-08-10", "-i", events_path()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 7);
}

#[test]
fn week_json_from_stdin() {
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args(["week", "--date", "2014-08-10", "--json"])
        .write_stdin(events_json())
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let days = report.as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[1]["date"], "2014-08-11");
    assert_eq!(
        days[1]["slots"],
        serde_json::json!(["9:30", "10:00", "11:30", "12:00"])
    );
}

#[test]
fn week_custom_horizon() {
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args(["week", "--date", "2014-08-10", "--days", "3", "-i", events_path()])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 3);
}

#[test]
fn week_rejects_zero_slot_minutes() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["week", "--date", "2014-08-10", "--slot-minutes", "0", "-i", events_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid slot settings"));
}

// ─────────────────────────────────────────────────────────────────────────────
// day
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn day_single_view() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["day", "--date", "2014-08-10", "-i", events_path()])
        .assert()
        .success()
        .stdout("2014-08-10: 13:30\n");
}

#[test]
fn day_json_output() {
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args(["day", "--date", "2014-08-11", "--json", "-i", events_path()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let slots: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(slots, ["9:30", "10:00", "11:30", "12:00"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// check and errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_counts_events() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["check", "-i", events_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Openings:      3 (2 weekly)"))
        .stdout(predicate::str::contains("Appointments:  3"));
}

#[test]
fn duplicate_opening_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["check", "-i", duplicate_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("opening already exists"));
}

#[test]
fn malformed_json_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["week", "--date", "2014-08-10"])
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load events"));
}

#[test]
fn missing_file_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["check", "-i", "/nonexistent/events.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn invalid_date_rejected_by_parser() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["week", "--date", "10/08/2014", "-i", events_path()])
        .assert()
        .failure();
}
