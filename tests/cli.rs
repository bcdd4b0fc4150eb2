use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LEDGER: &str = "categoría,monto\nFood,10.00\nFood,\"5,50\"\nTransport,20\nFun,abc\n";

fn command(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-report").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("EXPENSE_CATEGORY_COLUMN")
        .env_remove("EXPENSE_AMOUNT_COLUMN");
    cmd
}

#[test]
fn test_report_with_flags() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("file.csv"), LEDGER).unwrap();

    command(&dir)
        .args(["--budget", "100", "--export", "no", "--currency", "$"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EXPENSE REPORT"))
        .stdout(predicate::str::contains("$35.50"))
        .stdout(predicate::str::contains("within your budget"))
        .stderr(predicate::str::contains("'abc'"));

    assert!(!dir.path().join("expense_report.csv").exists());
}

#[test]
fn test_interactive_prompts_and_export() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("file.csv"), LEDGER).unwrap();

    command(&dir)
        .write_stdin("nope\n30,5\ncsv\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ALERT"))
        .stdout(predicate::str::contains("Report exported to expense_report.csv"))
        .stderr(predicate::str::contains("Invalid budget"));

    let exported = fs::read_to_string(dir.path().join("expense_report.csv")).unwrap();
    assert_eq!(exported, "Category,Amount\nFood,15.50\nTransport,20.00\nFun,0.00\nTotal,35.50\n");
}

#[test]
fn test_unsupported_export_format() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("file.csv"), LEDGER).unwrap();

    command(&dir)
        .args(["--budget", "10", "--export", "pdf", "--output", "out.pdf"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unsupported export format 'pdf'"));

    assert!(!dir.path().join("out.pdf").exists());
}

#[test]
fn test_filtered_txt_export() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("gastos.csv"), "categoría,monto,mes\nFood,1,enero\nFun,2,febrero\n").unwrap();

    command(&dir)
        .args(["gastos.csv", "--filter-column", "mes", "--filter-value", "enero"])
        .args(["--budget", "5", "--export", "txt", "--output", "report.txt"])
        .assert()
        .success();

    let exported = fs::read_to_string(dir.path().join("report.txt")).unwrap();
    assert!(exported.contains("Food"));
    assert!(!exported.contains("Fun"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    command(&dir)
        .args(["missing.csv", "--budget", "10", "--export", "no"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_missing_columns_fail() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("file.csv"), "fecha,total\n2024-01-01,3\n").unwrap();

    command(&dir)
        .args(["--budget", "10", "--export", "no"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required columns: categoría, monto"));
}
