//! End-to-end tests for the reporting commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const RECORDS: &str = r#"[
    {"proyecto": "Alpha", "fecha": "2024-01-05", "monto": "100", "descripcion": "Cement"},
    {"proyecto": "Alpha", "fecha": "2024-01-20", "monto": 50},
    {"proyecto": "Beta", "fecha": "2024-02-01", "monto": "200"},
    {"proyecto": "Beta", "fecha": "not a date", "monto": "10"}
]"#;

fn write_source(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("gastos.json");
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

fn dash(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense-dash").unwrap();
    cmd.env("EXPENSE_DASH_HOME", home)
        .env_remove("EXPENSE_DASH_SOURCE")
        .env("RUST_LOG", "error");
    cmd
}

#[test]
fn summary_prints_statistics_and_table() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, RECORDS);

    dash(dir.path())
        .args(["--source", &source, "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Projects"))
        .stdout(predicate::str::contains(
            "Summary: Showing 2 monthly aggregations from 2 project(s), representing 3 individual records with a total value of $350.",
        ))
        .stdout(predicate::str::contains("January 2024"))
        .stdout(predicate::str::contains("February 2024"));
}

#[test]
fn summary_respects_project_filter() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, RECORDS);

    dash(dir.path())
        .args(["--source", &source, "summary", "--project", "Beta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from 1 project(s)"))
        .stdout(predicate::str::contains("January 2024").not());
}

#[test]
fn source_can_come_from_environment() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, RECORDS);

    dash(dir.path())
        .env("EXPENSE_DASH_SOURCE", &source)
        .args(["series"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("Jan 2024"));
}

#[test]
fn empty_dataset_fails() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "[]");

    dash(dir.path())
        .args(["--source", &source, "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No expense records"));
}

#[test]
fn unknown_project_fails() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, RECORDS);

    dash(dir.path())
        .args(["--source", &source, "summary", "--project", "Gamma"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown project: Gamma"));
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    dash(dir.path())
        .args(["--source", missing.to_str().unwrap(), "projects"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn export_csv_writes_rows() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, RECORDS);
    let output = dir.path().join("rows.csv");

    dash(dir.path())
        .args(["--source", &source, "export"])
        .arg(&output)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rows exported"));

    let csv = fs::read_to_string(&output).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Project,Month,Label,Records,Total Amount,Average Amount")
    );
    assert_eq!(lines.next(), Some("Alpha,2024-01,January 2024,2,150,75.00"));
    assert_eq!(lines.next(), Some("Beta,2024-02,February 2024,1,200,200.00"));
}

#[test]
fn export_json_contains_projection() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, RECORDS);
    let output = dir.path().join("dash.json");

    dash(dir.path())
        .args(["--source", &source, "export"])
        .arg(&output)
        .args(["--exclude", "Alpha"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["schema_version"], "1.0.0");
    assert_eq!(value["active_projects"], serde_json::json!(["Beta"]));
    assert_eq!(value["rows"].as_array().unwrap().len(), 1);
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();

    dash(dir.path()).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    dash(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://127.0.0.1:8000/api/gastos"));
}
