//! CLI smoke tests for the `pb` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pb(store: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pb").expect("binary builds");
    cmd.arg("--store").arg(store.path());
    cmd
}

#[test]
fn test_add_and_show() {
    let store = TempDir::new().unwrap();

    pb(&store)
        .args(["add", "staging", "--text", "first task"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added item"));

    pb(&store)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("first task"));
}

#[test]
fn test_export_is_valid_json() {
    let store = TempDir::new().unwrap();

    pb(&store).args(["add", "committed"]).assert().success();

    let output = pb(&store).arg("export").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).expect("export must be valid JSON");
    assert!(value.get("items").is_some());
    assert!(value["items"].get("willNotDo").is_some());
}

#[test]
fn test_import_rejects_invalid_json() {
    let store = TempDir::new().unwrap();

    pb(&store)
        .args(["import", "--yes"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON format"));
}

#[test]
fn test_stats_reports_capacity() {
    let store = TempDir::new().unwrap();

    pb(&store).args(["velocity", "10"]).assert().success();
    pb(&store)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total capacity: 60")); // 6 starter sprints x 10
}

#[test]
fn test_drag_between_groups() {
    let store = TempDir::new().unwrap();

    pb(&store).args(["add", "staging", "--text", "movable"]).assert().success();

    let output = pb(&store).arg("export").assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let id = value["items"]["staging"][0]["id"].as_str().unwrap().to_string();

    pb(&store)
        .args(["drag", &id, "committed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drop applied"));

    let output = pb(&store).arg("export").assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["items"]["staging"].as_array().unwrap().len(), 0);
    assert_eq!(value["items"]["committed"][0]["id"].as_str().unwrap(), id);
}
