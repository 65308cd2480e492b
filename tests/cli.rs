//! End-to-end tests for the `budget` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_TRACKER_DATA_DIR", dir.path());
    cmd
}

#[test]
fn status_shows_default_limit() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Limit:"))
        .stdout(predicate::str::contains("$4000.00"));
}

#[test]
fn add_income_and_expense_updates_total() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["income", "add", "PAC Freelance", "2500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added income 'PAC Freelance'"));

    budget(&dir)
        .args(["expense", "add", "Oil Change", "1200.00"])
        .assert()
        .success();

    budget(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("$1300.00"))
        .stdout(predicate::str::contains("$2800.00"));

    budget(&dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PAC Freelance"))
        .stdout(predicate::str::contains("inc-"));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["expense", "add", "Coffee", "a lot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    budget(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense entries found."));
}

#[test]
fn oversized_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    for _ in 0..2 {
        budget(&dir)
            .args(["income", "add", "Windfall", "92233720368547758"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Amount too large"));
    }

    budget(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 entries)"));
}

#[test]
fn unknown_id_is_reported() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["income", "remove", "inc-deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Income not found"));
}

#[test]
fn reset_keeps_limit_and_is_audited() {
    let dir = TempDir::new().unwrap();

    budget(&dir).args(["limit", "5000"]).assert().success();
    budget(&dir)
        .args(["expense", "add", "Rent", "1500"])
        .assert()
        .success();

    budget(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget limit kept at $5000.00"));

    budget(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("$5000.00"))
        .stdout(predicate::str::contains("(0 entries)"));

    budget(&dir)
        .args(["history", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Expense"))
        .stdout(predicate::str::contains("RESET Budget"));
}

#[test]
fn reset_without_confirmation_does_nothing() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["income", "add", "Salary", "3000"])
        .assert()
        .success();

    budget(&dir)
        .arg("reset")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset cancelled."));

    budget(&dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"));
}

#[test]
fn config_save_writes_settings_file() {
    let dir = TempDir::new().unwrap();
    let settings_file = dir.path().join("config.json");

    budget(&dir).arg("config").assert().success();
    assert!(!settings_file.exists());

    budget(&dir)
        .args(["config", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved settings to"));

    let contents = std::fs::read_to_string(&settings_file).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["default_budget_limit"], 400000);

    value["currency_symbol"] = "€".into();
    std::fs::write(&settings_file, value.to_string()).unwrap();

    budget(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("€4000.00"));
}
