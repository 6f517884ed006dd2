//! End-to-end tests for the sort command
//!
//! Each test builds a small Discover-style statement workbook in a
//! temp folder, runs the binary against it, and checks the artifacts.

use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

const BIN_NAME: &str = "statement-sorter";

/// Write a statement workbook the loader will accept: eleven rows of
/// account metadata, a header row, then the transaction rows.
fn write_statement(path: &Path, rows: &[(&str, &str, &str, f64, &str)]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for row in 0..11u32 {
        sheet.write_string(row, 0, "Account metadata").unwrap();
    }
    let header = ["Trans. date", "Post date", "Description", "Amount", "Category"];
    for (col, title) in header.iter().enumerate() {
        sheet.write_string(11, col as u16, *title).unwrap();
    }
    for (i, (trans, post, desc, amount, category)) in rows.iter().enumerate() {
        let row = 12 + i as u32;
        sheet.write_string(row, 0, *trans).unwrap();
        sheet.write_string(row, 1, *post).unwrap();
        sheet.write_string(row, 2, *desc).unwrap();
        sheet.write_number(row, 3, *amount).unwrap();
        sheet.write_string(row, 4, *category).unwrap();
    }
    workbook.save(path).unwrap();
}

fn fixture_folder() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_statement(
        &dir.path().join("Discover-Statement-20250201.xlsx"),
        &[
            ("01/05/2025", "01/06/2025", "GROCERY MART", -82.50, "Supermarkets"),
            ("01/12/2025", "01/13/2025", "FUEL STOP", -40.00, "Gasoline"),
            ("01/20/2025", "01/21/2025", "INTERNET PAYMENT - THANK YOU", 150.00, "Payments and Credits"),
            ("02/03/2025", "02/04/2025", "GROCERY MART", -61.25, "Supermarkets"),
        ],
    );
    dir
}

/// Command with config state redirected into its own temp dir
fn sorter_command(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("STATEMENT_SORTER_DATA_DIR", config_dir.path());
    cmd
}

#[test]
fn sort_writes_csv_files_per_period() {
    let statements = fixture_folder();
    let config = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    sorter_command(&config)
        .args(["sort", "--format", "csv"])
        .arg("--folder")
        .arg(statements.path())
        .args(["--start", "2025-01-01", "--end", "2025-02-28"])
        .arg("--output")
        .arg(output.path())
        .assert()
        .success()
        .stdout(contains("Sorted statements written to"));

    let january = output
        .path()
        .join("Sorted_2025-01-01_to_2025-02-28_monthly_January_2025.csv");
    let february = output
        .path()
        .join("Sorted_2025-01-01_to_2025-02-28_monthly_February_2025.csv");
    assert!(january.exists());
    assert!(february.exists());

    let contents = std::fs::read_to_string(&january).unwrap();
    assert!(contents.contains("Category: Supermarkets"));
    assert!(contents.contains("Category: Payments and Credits"));
    assert!(contents.contains("GROCERY MART"));
    assert!(contents.contains("Subtotal:"));
}

#[test]
fn sort_never_overwrites_an_existing_workbook() {
    let statements = fixture_folder();
    let config = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    for _ in 0..2 {
        sorter_command(&config)
            .args(["sort", "--format", "xlsx", "--chart", "none"])
            .arg("--folder")
            .arg(statements.path())
            .args(["--start", "2025-01-01", "--end", "2025-01-31"])
            .arg("--output")
            .arg(output.path())
            .assert()
            .success();
    }

    let base = "Sorted_2025-01-01_to_2025-01-31_monthly";
    assert!(output.path().join(format!("{base}.xlsx")).exists());
    assert!(output.path().join(format!("{base}_copy1.xlsx")).exists());
}

#[test]
fn sort_reports_an_empty_range() {
    let statements = fixture_folder();
    let config = TempDir::new().unwrap();

    sorter_command(&config)
        .arg("sort")
        .arg("--folder")
        .arg(statements.path())
        .args(["--start", "2030-01-01", "--end", "2030-01-31"])
        .assert()
        .failure()
        .stderr(contains("No transactions found"));
}

#[test]
fn sort_remembers_the_previous_run() {
    let statements = fixture_folder();
    let config = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    sorter_command(&config)
        .args(["sort", "--format", "csv"])
        .arg("--folder")
        .arg(statements.path())
        .args(["--start", "2025-01-01", "--end", "2025-01-31"])
        .arg("--output")
        .arg(output.path())
        .assert()
        .success();

    // Same run again with every argument omitted; the saved settings
    // fill them in, and the csv emitter picks a _copy name.
    sorter_command(&config).arg("sort").assert().success();

    let base = "Sorted_2025-01-01_to_2025-01-31_monthly_January_2025";
    assert!(output.path().join(format!("{base}.csv")).exists());
    assert!(output.path().join(format!("{base}_copy1.csv")).exists());
}

#[test]
fn missing_folder_without_saved_settings_fails() {
    let config = TempDir::new().unwrap();

    sorter_command(&config)
        .args(["sort", "--start", "2025-01-01", "--end", "2025-01-31"])
        .assert()
        .failure()
        .stderr(contains("No statement folder given"));
}

#[test]
fn config_command_shows_paths() {
    let config = TempDir::new().unwrap();

    sorter_command(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Config directory"));
}
