use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", dir.path()).env_remove("FINTRACK_LOG");
    cmd
}

#[test]
fn test_no_command_prints_usage_hint() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("fintrack --help"));
}

#[test]
fn test_transactions_update_overview() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["tx", "add", "income", "1000", "Salary", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income of $1000.00 added"));

    fintrack(&dir)
        .args(["tx", "add", "expense", "50", "Food", "--date", "2024-03-02", "--id", "t-food"])
        .assert()
        .success();

    fintrack(&dir)
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:   $1000.00"))
        .stdout(predicate::str::contains("Expenses: $50.00"))
        .stdout(predicate::str::contains("Balance:  $950.00"));

    fintrack(&dir)
        .args(["tx", "delete", "t-food"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["tx", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("t-food").not());
}

#[test]
fn test_invalid_amount_is_an_error_notification() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["tx", "add", "expense", "abc", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[x] Error: Validation error"));
}

#[test]
fn test_goal_contributions_cap_displayed_progress() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["goal", "add", "Bike", "500", "2030-01-01"])
        .assert()
        .success();

    let store = std::fs::read_to_string(dir.path().join("data").join("finance.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&store).unwrap();
    let id = json["saving_goals"][0]["id"].as_str().unwrap().to_string();

    for _ in 0..5 {
        fintrack(&dir).args(["goal", "contribute", &id]).assert().success();
    }
    fintrack(&dir)
        .args(["goal", "contribute", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("$600.00 / $500.00"))
        .stdout(predicate::str::contains("100%"));
}

#[test]
fn test_contribute_to_unknown_goal_fails() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["goal", "contribute", "goal-missing", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Saving goal not found: goal-missing"));
}

#[test]
fn test_budget_over_limit_warns() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["budget", "set", "Food", "200", "--spent", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("over your total budget"));

    fintrack(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("125% OVER"));
}

#[test]
fn test_currency_changes_symbol() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["settings", "currency", "eur"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["tx", "add", "expense", "12.5", "Coffee", "--date", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€12.50"));
}

#[test]
fn test_clear_needs_confirmation() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["tx", "add", "income", "10", "Gift", "--date", "2024-01-01"])
        .assert()
        .success();

    fintrack(&dir).args(["settings", "clear"]).assert().failure();

    fintrack(&dir)
        .args(["settings", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared"));

    fintrack(&dir)
        .args(["tx", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn test_logout_gates_data_commands() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local User"));

    fintrack(&dir).arg("logout").assert().success();

    fintrack(&dir)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));

    fintrack(&dir)
        .args(["login", "Robin", "--email", "robin@example.com"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["dashboard", "--tab", "settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as Robin <robin@example.com>"))
        .stdout(predicate::str::contains("== Settings =="));
}

#[test]
fn test_export_json() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("export.json");

    fintrack(&dir)
        .args(["tx", "add", "income", "20", "Gift", "--date", "2024-02-02"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["export", "json"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transaction(s)"));

    let text = std::fs::read_to_string(&output).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["metadata"]["transaction_count"], 1);
    assert_eq!(json["transactions"][0]["category"], "Gift");
}

#[test]
fn test_analytics_weekly() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["analytics", "--timeframe", "weekly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly Expenses"));
}

#[test]
fn test_history_lists_latest_change_first() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes recorded yet."));

    fintrack(&dir)
        .args(["tx", "add", "income", "30", "Gift", "--date", "2024-02-02", "--id", "t-gift"])
        .assert()
        .success();
    fintrack(&dir)
        .args(["budget", "set", "Food", "200"])
        .assert()
        .success();

    let output = fintrack(&dir).args(["history", "--limit", "5"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("created budget Food"));
    assert!(lines[1].contains("created transaction t-gift (Gift)"));
}

#[test]
fn test_oversized_amount_is_rejected_without_crashing() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["tx", "add", "income", "92233720368547758.07", "Salary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("larger than the maximum"))
        .stderr(predicate::str::contains("panicked").not());

    fintrack(&dir)
        .args(["goal", "add", "Moon", "1000", "2030-01-01"])
        .assert()
        .success();
    let store = std::fs::read_to_string(dir.path().join("data").join("finance.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&store).unwrap();
    let id = json["saving_goals"][0]["id"].as_str().unwrap().to_string();

    fintrack(&dir)
        .args(["goal", "contribute", &id, "5000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[x] Error"));
}
