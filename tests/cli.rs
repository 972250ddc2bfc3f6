use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn allot(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("allot").unwrap();
    cmd.env("ALLOT_CLI_DATA_DIR", dir.path());
    cmd
}

#[test]
fn simulate_redistributes_and_reports_all_allotted() {
    let dir = TempDir::new().unwrap();

    allot(&dir)
        .args(["simulate", "--total", "100", "cpu=60", "gpu=50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GPU set to 50 (redistributed: cpu -10)"))
        .stdout(predicate::str::contains("All budget allotted"));
}

#[test]
fn simulate_shows_remaining_budget() {
    let dir = TempDir::new().unwrap();

    allot(&dir)
        .args(["simulate", "cpu=30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining: 70 USD"));
}

#[test]
fn simulate_invalid_total_falls_back_to_one() {
    let dir = TempDir::new().unwrap();

    allot(&dir)
        .args(["simulate", "total=abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total budget set to 1 USD"));
}

#[test]
fn simulate_cancel_with_yes_resets() {
    let dir = TempDir::new().unwrap();

    allot(&dir)
        .args(["simulate", "--yes", "cpu=40", "cancel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Allocations reset"))
        .stdout(predicate::str::contains("Remaining: 100 USD"));
}

#[test]
fn simulate_cancel_with_no_keeps_allocations() {
    let dir = TempDir::new().unwrap();

    allot(&dir)
        .args(["simulate", "--no", "cpu=40", "cancel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancel declined, allocations kept"))
        .stdout(predicate::str::contains("Remaining: 60 USD"));
}

#[test]
fn simulate_allot_without_allocation_warns() {
    let dir = TempDir::new().unwrap();

    allot(&dir)
        .args(["simulate", "allot"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: Please allocate some budget before allotting.",
        ));
}

#[test]
fn simulate_unknown_category_fails() {
    let dir = TempDir::new().unwrap();

    allot(&dir)
        .args(["simulate", "disk=10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("disk"));
}

#[test]
fn simulate_rejects_malformed_step() {
    let dir = TempDir::new().unwrap();

    allot(&dir)
        .args(["simulate", "finish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid step"));
}

#[test]
fn categories_lists_defaults() {
    let dir = TempDir::new().unwrap();

    allot(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("cpu"))
        .stdout(predicate::str::contains("Default total budget: 100 USD"));
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();

    allot(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn log_shows_simulated_activity() {
    let dir = TempDir::new().unwrap();

    allot(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("No activity recorded yet."));

    allot(&dir)
        .args(["simulate", "cpu=25", "allot"])
        .assert()
        .success();

    allot(&dir)
        .args(["log", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ADJUST"))
        .stdout(predicate::str::contains("ALLOT"));
}

#[test]
fn config_prints_paths() {
    let dir = TempDir::new().unwrap();

    allot(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings file:"))
        .stdout(predicate::str::contains("config.json"));
}

#[test]
fn simulate_maximum_total_stays_within_budget() {
    let dir = TempDir::new().unwrap();

    allot(&dir)
        .args([
            "simulate",
            "total=18446744073709551615",
            "cpu=18446744073709551615",
            "gpu=5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("GPU set to 5 (redistributed: cpu -5)"))
        .stdout(predicate::str::contains("All budget allotted"));
}
