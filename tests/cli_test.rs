//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary data directory via
//! the PAISA_CLI_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn paisa(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("paisa").unwrap();
    cmd.env("PAISA_CLI_DATA_DIR", dir.path());
    cmd
}

#[test]
fn budget_add_and_list() {
    let dir = TempDir::new().unwrap();

    paisa(&dir)
        .args(["budget", "add", "Food", "5000", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created budget bud-1"))
        .stdout(predicate::str::contains("Rs. 5000"));

    paisa(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Rs. 5000"));
}

#[test]
fn budget_list_empty() {
    let dir = TempDir::new().unwrap();

    paisa(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budgets found"));
}

#[test]
fn budget_add_rejects_bad_amount() {
    let dir = TempDir::new().unwrap();

    paisa(&dir)
        .args(["budget", "add", "Food", "abc", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget Amount must be a number"));

    // Nothing was stored
    paisa(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budgets found"));
}

#[test]
fn budget_show_missing() {
    let dir = TempDir::new().unwrap();

    paisa(&dir)
        .args(["budget", "show", "bud-99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget not found"));
}

#[test]
fn expense_add_and_edit() {
    let dir = TempDir::new().unwrap();

    paisa(&dir)
        .args(["expense", "add", "Lunch", "300", "Food", "2025-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded expense exp-1"));

    paisa(&dir)
        .args([
            "expense", "edit", "exp-1", "--name", "Dinner", "--amount", "450", "--category",
            "Food", "--date", "2025-01-16",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dinner"))
        .stdout(predicate::str::contains("2025-01-16"));
}

#[test]
fn expense_date_is_validated() {
    let dir = TempDir::new().unwrap();

    paisa(&dir)
        .args(["expense", "add", "Lunch", "300", "Food", "15/01/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Expense Date must be a valid date (YYYY-MM-DD)",
        ));
}

#[test]
fn category_created_on_demand_and_duplicates_rejected() {
    let dir = TempDir::new().unwrap();

    // Adding a budget creates its category
    paisa(&dir)
        .args(["budget", "add", "Food", "5000", "Food"])
        .assert()
        .success();

    paisa(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"));

    // Same name under different casing is a duplicate
    paisa(&dir)
        .args(["category", "add", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category already exists"));
}

#[test]
fn category_reuses_existing_casing() {
    let dir = TempDir::new().unwrap();

    paisa(&dir)
        .args(["category", "add", "Food"])
        .assert()
        .success();

    // A budget referencing "FOOD" resolves to the existing entry
    paisa(&dir)
        .args(["budget", "add", "Groceries", "5000", "FOOD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"));

    paisa(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food").count(1));
}

#[test]
fn analysis_pair() {
    let dir = TempDir::new().unwrap();

    paisa(&dir)
        .args(["budget", "add", "Food", "5000", "Food"])
        .assert()
        .success();
    paisa(&dir)
        .args(["expense", "add", "Lunch", "300", "Food", "2025-01-15"])
        .assert()
        .success();

    paisa(&dir)
        .args(["analysis", "pair", "--budget", "bud-1", "--expense", "exp-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected Items"))
        .stdout(predicate::str::contains("Rs. 5000"))
        .stdout(predicate::str::contains("Rs. 300"));
}

#[test]
fn analysis_pair_requires_both_sides() {
    let dir = TempDir::new().unwrap();

    paisa(&dir)
        .args(["budget", "add", "Food", "5000", "Food"])
        .assert()
        .success();

    paisa(&dir)
        .args(["analysis", "pair", "--budget", "bud-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please select both a budget and an expense to show the analysis.",
        ));
}

#[test]
fn analysis_multi_pads_missing_side() {
    let dir = TempDir::new().unwrap();

    paisa(&dir)
        .args(["budget", "add", "Food", "5000", "Food"])
        .assert()
        .success();
    paisa(&dir)
        .args(["budget", "add", "Transport", "2000", "Transport"])
        .assert()
        .success();
    paisa(&dir)
        .args(["expense", "add", "Lunch", "300", "Food", "2025-01-15"])
        .assert()
        .success();

    paisa(&dir)
        .args([
            "analysis", "multi", "--budgets", "bud-1,bud-2", "--expenses", "exp-1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transport"))
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("-"));
}

#[test]
fn analysis_multi_rejects_lone_item() {
    let dir = TempDir::new().unwrap();

    paisa(&dir)
        .args(["budget", "add", "Food", "5000", "Food"])
        .assert()
        .success();

    paisa(&dir)
        .args(["analysis", "multi", "--budgets", "bud-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please select at least one budget and expense to show the analysis.",
        ));
}

#[test]
fn audit_records_mutations() {
    let dir = TempDir::new().unwrap();

    paisa(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries yet"));

    paisa(&dir)
        .args(["budget", "add", "Food", "5000", "Food"])
        .assert()
        .success();
    paisa(&dir)
        .args(["budget", "delete", "bud-1"])
        .assert()
        .success();

    paisa(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Budget bud-1 (Food)"))
        .stdout(predicate::str::contains("DELETE Budget bud-1 (Food)"));
}

#[test]
fn init_and_config() {
    let dir = TempDir::new().unwrap();

    paisa(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized data directory"));

    paisa(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));

    paisa(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rs."))
        .stdout(predicate::str::contains("Setup completed: true"));
}

#[test]
fn data_survives_between_runs() {
    let dir = TempDir::new().unwrap();

    paisa(&dir)
        .args(["budget", "add", "Food", "5000", "Food"])
        .assert()
        .success();
    paisa(&dir)
        .args(["budget", "add", "Transport", "2000", "Transport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created budget bud-2"));

    paisa(&dir)
        .args(["budget", "delete", "bud-1"])
        .assert()
        .success();

    // bud-2 survives the delete; the next ID continues past it
    paisa(&dir)
        .args(["budget", "add", "Rent", "15000", "Housing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created budget bud-3"));

    paisa(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transport"))
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Food").not());
}
