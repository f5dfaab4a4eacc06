use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn questlog(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("questlog").expect("binary");
    cmd.arg("--store").arg(store);
    cmd
}

fn json_output(store: &Path, args: &[&str]) -> serde_json::Value {
    let output = questlog(store)
        .args(args)
        .arg("--json")
        .output()
        .expect("run questlog");
    assert!(
        output.status.success(),
        "command {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("json output")
}

#[test]
fn add_and_complete_earns_points() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("goal_data.json");

    questlog(&store)
        .args(["task", "add", "write report", "--hardcore"])
        .assert()
        .success()
        .stdout(contains("hardcore mission"));

    questlog(&store)
        .args(["task", "done", "write report"])
        .assert()
        .success()
        .stdout(contains("+5 points"));

    let progress = json_output(&store, &["progress"]);
    assert_eq!(progress["data"]["score"], 5);
    assert_eq!(progress["data"]["progress"], 0.1);
    assert_eq!(progress["data"]["goal_reached"], false);
}

#[test]
fn completing_twice_reports_already_completed() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("goal_data.json");

    questlog(&store).args(["task", "add", "once"]).assert().success();
    questlog(&store).args(["task", "done", "once"]).assert().success();

    // Expected outcome, not an error: exit code 0.
    questlog(&store)
        .args(["task", "done", "once"])
        .assert()
        .success()
        .stdout(contains("already completed"));

    let report = json_output(&store, &["task", "done", "once"]);
    assert_eq!(report["data"]["outcome"], "already_completed");
}

#[test]
fn completing_unknown_mission_reports_not_found() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("goal_data.json");

    questlog(&store)
        .args(["task", "done", "ghost"])
        .assert()
        .success()
        .stdout(contains("No such mission"));

    let report = json_output(&store, &["task", "done", "ghost"]);
    assert_eq!(report["data"]["outcome"], "not_found");
}

#[test]
fn readding_a_mission_downgrades_its_weight() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("goal_data.json");

    questlog(&store)
        .args(["task", "add", "x", "--hardcore"])
        .assert()
        .success();
    questlog(&store)
        .args(["task", "add", "x"])
        .assert()
        .success()
        .stdout(contains("replaced existing mission"));
    questlog(&store).args(["task", "done", "x"]).assert().success();

    let progress = json_output(&store, &["progress"]);
    assert_eq!(progress["data"]["score"], 1);
}

#[test]
fn list_splits_pending_and_completed() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("goal_data.json");

    questlog(&store)
        .args(["task", "add", "open", "--hardcore"])
        .assert()
        .success();
    questlog(&store).args(["task", "add", "finished"]).assert().success();
    questlog(&store).args(["task", "done", "finished"]).assert().success();

    let pending = json_output(&store, &["task", "list"]);
    let entries = pending["data"]["pending"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "open");
    assert_eq!(entries[0]["hardcore"], true);

    let completed = json_output(&store, &["task", "list", "--completed"]);
    let entries = completed["data"]["completed"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "finished");
    assert!(entries[0]["time"].as_str().unwrap().len() == 19);
}

#[test]
fn reaching_the_target_celebrates() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("goal_data.json");

    for i in 0..10 {
        let name = format!("h-{i}");
        questlog(&store)
            .args(["task", "add", &name, "--hardcore"])
            .assert()
            .success();
    }
    for i in 0..9 {
        let name = format!("h-{i}");
        questlog(&store).args(["task", "done", &name]).assert().success();
    }

    let progress = json_output(&store, &["progress"]);
    assert_eq!(progress["data"]["goal_reached"], false);

    questlog(&store)
        .args(["task", "done", "h-9"])
        .assert()
        .success()
        .stdout(contains("Congratulations"));

    let progress = json_output(&store, &["progress"]);
    assert_eq!(progress["data"]["goal_reached"], true);
    assert_eq!(progress["data"]["progress"], 1.0);
}

#[test]
fn empty_mission_name_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("goal_data.json");

    questlog(&store)
        .args(["task", "add", "  "])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("mission name cannot be empty"));
}

#[test]
fn json_envelope_carries_schema_and_command() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("goal_data.json");

    let report = json_output(&store, &["task", "add", "enveloped"]);
    assert_eq!(report["schema_version"], "questlog.v1");
    assert_eq!(report["command"], "task add");
    assert_eq!(report["status"], "success");
}
