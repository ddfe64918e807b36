// End-to-end tests for the non-interactive commands. Each test gets its own
// data directory, so the real SQLite store is exercised without touching
// the user's history.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stint(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stint").unwrap();
    cmd.env("STINT_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("STINT_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn json(home: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = stint(home).args(args).args(["-o", "json"]).output().unwrap();
    assert!(output.status.success(), "{output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn log_then_history_newest_first() {
    let home = TempDir::new().unwrap();

    stint(&home)
        .args(["log", "Write", "25m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded 25m 0s on Write"));
    stint(&home).args(["log", "Read", "90s"]).assert().success();

    let history = json(&home, &["history"]);
    assert_eq!(history["total"], 2);
    assert_eq!(history["items"][0]["task"], "Read");
    assert_eq!(history["items"][0]["duration"], 90_000);
    assert_eq!(history["items"][1]["task"], "Write");
    assert!(history["items"][0]["id"].as_i64() > history["items"][1]["id"].as_i64());
}

#[test]
fn history_limit() {
    let home = TempDir::new().unwrap();
    for task in ["A", "B", "C"] {
        stint(&home).args(["log", task, "1"]).assert().success();
    }

    let history = json(&home, &["history", "--limit", "2"]);
    assert_eq!(history["count"], 2);
    assert_eq!(history["total"], 3);
    assert_eq!(history["items"][0]["task"], "C");
}

#[test]
fn stats_sum_durations() {
    let home = TempDir::new().unwrap();
    stint(&home).args(["log", "Write", "1h"]).assert().success();
    stint(&home).args(["log", "Write", "2m"]).assert().success();

    stint(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total time: 1h 2m"))
        .stdout(predicate::str::contains("Sessions: 2"));

    let stats = json(&home, &["stats"]);
    assert_eq!(stats["totalMs"], 3_720_000);
    assert_eq!(stats["tasks"].as_array().unwrap().len(), 1);
}

#[test]
fn empty_store_shows_sample_chart() {
    let home = TempDir::new().unwrap();

    stint(&home)
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Email"))
        .stdout(predicate::str::contains("sample data"));

    let stats = json(&home, &["stats"]);
    assert_eq!(stats["count"], 0);
    assert!(stats["tasks"].as_array().unwrap().is_empty());
}

#[test]
fn chart_groups_by_trimmed_task() {
    let home = TempDir::new().unwrap();
    stint(&home).args(["log", "Write", "3"]).assert().success();
    stint(&home).args(["log", " Write ", "2"]).assert().success();
    stint(&home).args(["log", "write", "1"]).assert().success();

    let chart = json(&home, &["chart"]);
    assert_eq!(chart["placeholder"], false);
    let bars = chart["bars"].as_array().unwrap();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0]["label"], "write");
    assert_eq!(bars[1]["label"], "Write");
    assert_eq!(bars[1]["minutes"], 5.0);
}

#[test]
fn clear_force_empties_store() {
    let home = TempDir::new().unwrap();
    stint(&home).args(["log", "Write", "5"]).assert().success();

    stint(&home)
        .args(["clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 session(s)"));

    assert_eq!(json(&home, &["stats"])["count"], 0);
}

#[test]
fn clear_prompt_declined_keeps_sessions() {
    let home = TempDir::new().unwrap();
    stint(&home).args(["log", "Write", "5"]).assert().success();

    stint(&home)
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing cleared"));
    assert_eq!(json(&home, &["stats"])["count"], 1);

    stint(&home).arg("clear").write_stdin("y\n").assert().success();
    assert_eq!(json(&home, &["stats"])["count"], 0);
}

#[test]
fn blank_task_is_rejected() {
    let home = TempDir::new().unwrap();

    stint(&home)
        .args(["log", "   ", "5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Task name cannot be empty"));

    assert_eq!(json(&home, &["stats"])["count"], 0);
}

#[test]
fn corrupt_history_reads_as_empty() {
    let home = TempDir::new().unwrap();
    stint(&home).args(["log", "Write", "5"]).assert().success();

    let conn = rusqlite::Connection::open(home.path().join("stint.db")).unwrap();
    conn.execute(
        "UPDATE kv_store SET value = 'not json' WHERE key = 'focusSessions'",
        [],
    )
    .unwrap();
    drop(conn);

    assert_eq!(json(&home, &["stats"])["count"], 0);

    // The next write replaces the unreadable value
    stint(&home).args(["log", "Read", "1"]).assert().success();
    assert_eq!(json(&home, &["history"])["total"], 1);
}

#[test]
fn config_file_changes_defaults() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "general:\n  default_output: json\nchart:\n  placeholder_when_empty: false\n",
    )
    .unwrap();

    let output = stint(&home).arg("chart").output().unwrap();
    assert!(output.status.success());
    let chart: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(chart["placeholder"], false);
    assert!(chart["bars"].as_array().unwrap().is_empty());
}

#[test]
fn unreadable_database_is_not_fatal() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("stint.db"), b"this is not a sqlite file at all").unwrap();

    assert_eq!(json(&home, &["stats"])["count"], 0);

    stint(&home)
        .args(["log", "Write", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded 5m 0s on Write"));
}
