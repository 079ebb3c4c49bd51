use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn budget(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_PROJECTOR_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn setup_budget(data_dir: &TempDir) {
    budget(data_dir)
        .args(["income", "set", "3000"])
        .assert()
        .success();
    budget(data_dir)
        .args(["expense", "add", "Rent", "1000", "-d", "Downtown flat"])
        .assert()
        .success();
}

#[test]
fn test_income_set_and_show() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No income set."));

    budget(&data_dir)
        .args(["income", "set", "$3,250.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly income set to $3,250.50"));

    budget(&data_dir)
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly income: $3,250.50"));
}

#[test]
fn test_invalid_income_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .args(["income", "set", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_expense_add_and_list() {
    let data_dir = TempDir::new().unwrap();
    setup_budget(&data_dir);

    budget(&data_dir)
        .args(["expense", "add", "Gym", "45.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense: Gym ($45.50)"));

    budget(&data_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Downtown flat"))
        .stdout(predicate::str::contains("$1,045.50"));
}

#[test]
fn test_expense_edit_and_remove_by_position() {
    let data_dir = TempDir::new().unwrap();
    setup_budget(&data_dir);

    budget(&data_dir)
        .args(["expense", "edit", "1", "--cost", "1100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated expense: Rent ($1,100.00)"));

    budget(&data_dir)
        .args(["expense", "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed expense: Rent"));

    budget(&data_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn test_unknown_expense_is_not_found() {
    let data_dir = TempDir::new().unwrap();
    setup_budget(&data_dir);

    budget(&data_dir)
        .args(["expense", "remove", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: #7"));
}

#[test]
fn test_project_table() {
    let data_dir = TempDir::new().unwrap();
    setup_budget(&data_dir);

    budget(&data_dir)
        .args(["project", "--calendar", "-i", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jan"))
        .stdout(predicate::str::contains("Dec"))
        .stdout(predicate::str::contains("$12,000.00"))
        .stdout(predicate::str::contains("$24,000.00"));
}

#[test]
fn test_project_chart() {
    let data_dir = TempDir::new().unwrap();
    setup_budget(&data_dir);

    budget(&data_dir)
        .args(["project", "--chart", "-i", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Balance"))
        .stdout(predicate::str::contains("Investment Growth (8% Annual)"));
}

#[test]
fn test_invest_out_of_range_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .args(["project", "-i", "150"])
        .assert()
        .failure();
}

#[test]
fn test_summary_and_breakdown() {
    let data_dir = TempDir::new().unwrap();
    setup_budget(&data_dir);

    budget(&data_dir)
        .args(["summary", "-i", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$2,000.00"))
        .stdout(predicate::str::contains("$24,000.00"));

    budget(&data_dir)
        .arg("breakdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("100%"));
}

#[test]
fn test_export_csv() {
    let data_dir = TempDir::new().unwrap();
    setup_budget(&data_dir);
    let output = data_dir.path().join("projection.csv");

    budget(&data_dir)
        .args(["export", "--calendar", "-i", "0"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Projection exported to"));

    let contents = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(
        lines[0],
        "Month,Total Expenses,Savings Balance,Investment Balance"
    );
    assert_eq!(lines[1], "Jan,1000.00,2000.00,0.00");
    assert_eq!(lines[12], "Dec,12000.00,24000.00,0.00");
}

#[test]
fn test_export_json() {
    let data_dir = TempDir::new().unwrap();
    setup_budget(&data_dir);
    let output = data_dir.path().join("projection.json");

    budget(&data_dir)
        .args(["export", "--pretty", "-i", "25"])
        .arg(&output)
        .assert()
        .success();

    let contents = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["income"], 3000.0);
    assert_eq!(value["investment_percentage"], 25.0);
    assert_eq!(value["total_monthly_expenses"], 1000.0);
    assert_eq!(value["months"].as_array().unwrap().len(), 12);
}

#[test]
fn test_project_from_input_file_with_fallback() {
    let data_dir = TempDir::new().unwrap();
    setup_budget(&data_dir);

    let input = data_dir.path().join("other.json");
    fs::write(
        &input,
        r#"{"income": 5000, "expenses": [{"name": "Mortgage", "cost": "2000"}]}"#,
    )
    .unwrap();

    budget(&data_dir)
        .args(["project", "--calendar", "-i", "0", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("$36,000.00"));

    // unreadable input falls back to the saved budget
    budget(&data_dir)
        .args(["project", "--calendar", "-i", "0", "--input"])
        .arg(data_dir.path().join("missing.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("$24,000.00"))
        .stderr(predicate::str::contains("using fallback"));
}

#[test]
fn test_clear_and_history() {
    let data_dir = TempDir::new().unwrap();
    setup_budget(&data_dir);

    budget(&data_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Income"))
        .stdout(predicate::str::contains("CREATE Expense"));

    budget(&data_dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared saved data"));

    budget(&data_dir)
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No income set."));

    budget(&data_dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to clear."));
}

#[test]
fn test_config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("store.json"))
        .stdout(predicate::str::contains("Default investment:     0%"));
}

#[test]
fn test_config_set_changes_defaults() {
    let data_dir = TempDir::new().unwrap();
    setup_budget(&data_dir);

    budget(&data_dir)
        .args(["config", "set", "--default-invest", "50", "--currency", "€"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."));

    budget(&data_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default investment:     50%"))
        .stdout(predicate::str::contains("Currency symbol:        €"));

    // the saved default applies when --invest is omitted
    budget(&data_dir)
        .args(["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€1,000.00"))
        .stdout(predicate::str::contains("Invested ( 50%)"));

    budget(&data_dir)
        .args(["config", "set", "--default-invest", "150"])
        .assert()
        .failure();
}
