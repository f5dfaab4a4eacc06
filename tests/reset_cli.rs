use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn questlog(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("questlog").expect("binary");
    cmd.arg("--store").arg(store);
    cmd
}

#[test]
fn reset_without_yes_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("goal_data.json");

    questlog(&store).args(["goal", "set", "keep me"]).assert().success();
    questlog(&store).args(["task", "add", "survivor"]).assert().success();

    questlog(&store)
        .args(["reset"])
        .assert()
        .success()
        .stdout(contains("nothing was changed"))
        .stdout(contains("reset --yes"));

    questlog(&store)
        .args(["goal", "show"])
        .assert()
        .success()
        .stdout(contains("Current goal: keep me"));
}

#[test]
fn reset_with_yes_clears_everything() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("goal_data.json");

    questlog(&store).args(["goal", "set", "gone"]).assert().success();
    questlog(&store)
        .args(["task", "add", "doomed", "--hardcore"])
        .assert()
        .success();
    questlog(&store).args(["task", "done", "doomed"]).assert().success();

    questlog(&store)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("cleared"));

    let content = std::fs::read_to_string(&store).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(doc["goal"].is_null());
    assert!(doc["tasks"].as_object().unwrap().is_empty());
    assert!(doc["completed_tasks"].as_array().unwrap().is_empty());
}

#[test]
fn init_creates_config_and_store_once() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("goal_data.json");
    let config = temp.path().join(".questlog.toml");

    let mut cmd = Command::cargo_bin("questlog").expect("binary");
    cmd.arg("--store")
        .arg(&store)
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("initialized"));

    assert!(store.is_file());
    assert!(config.is_file());

    // Second run is a no-op.
    let mut cmd = Command::cargo_bin("questlog").expect("binary");
    cmd.arg("--store")
        .arg(&store)
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("nothing to do"));
}

#[test]
fn store_path_comes_from_config_when_flag_absent() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("nested").join("data.json");
    let config = temp.path().join(".questlog.toml");
    std::fs::write(
        &config,
        format!("[store]\npath = {:?}\n", store.display().to_string()),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("questlog").expect("binary");
    cmd.arg("--config")
        .arg(&config)
        .args(["task", "add", "from-config"])
        .assert()
        .success();

    assert!(store.is_file());
    let content = std::fs::read_to_string(&store).unwrap();
    assert!(content.contains("from-config"));
}
