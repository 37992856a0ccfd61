use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{name}")
}

/// Helper to create a Command for the tablecheck binary
fn tablecheck() -> Command {
    Command::cargo_bin("tablecheck").expect("Failed to find tablecheck binary")
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_valid_contract() {
    tablecheck()
        .arg("check")
        .arg(fixture_path("contract.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("purchase_sessions"))
        .stdout(predicate::str::contains("data-quality"))
        .stdout(predicate::str::contains("Contract is consistent"));
}

#[test]
fn test_check_contract_details() {
    tablecheck()
        .arg("check")
        .arg(fixture_path("contract.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Columns:     5"))
        .stdout(predicate::str::contains("Session_ID (global)"))
        .stdout(predicate::str::contains("Session_ID (unique within Day)"))
        .stdout(predicate::str::contains("Price: [0, 10000]"))
        .stdout(predicate::str::contains("Identifier: id"));
}

#[test]
fn test_check_toml_contract() {
    tablecheck()
        .arg("check")
        .arg(fixture_path("contract.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("purchase_sessions_toml"));
}

#[test]
fn test_check_inconsistent_contract() {
    tablecheck()
        .arg("check")
        .arg(fixture_path("invalid_contract.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_check_missing_file() {
    tablecheck()
        .arg("check")
        .arg("nonexistent.yml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

// ============================================================================
// validate command tests
// ============================================================================

#[test]
fn test_validate_clean_dataset_passes() {
    let out_dir = TempDir::new().unwrap();

    tablecheck()
        .arg("validate")
        .arg("--contract")
        .arg(fixture_path("contract.yml"))
        .arg("--data")
        .arg(fixture_path("clean.csv"))
        .arg("--out-dir")
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"));

    // All three artifacts are written even for a passing run.
    let ledger = fs::read_to_string(out_dir.path().join("schema_key_violations.csv")).unwrap();
    assert_eq!(ledger.lines().count(), 1, "ledger should be header-only");

    let overview = fs::read_to_string(out_dir.path().join("nulls_overview.csv")).unwrap();
    assert!(overview.starts_with("column,null_count,null_fraction,allow_null,status"));

    let summary =
        fs::read_to_string(out_dir.path().join("schema_validation_summary.md")).unwrap();
    assert!(summary.contains("**PASSED**"));
}

#[test]
fn test_validate_dirty_dataset_fails_with_exit_code() {
    let out_dir = TempDir::new().unwrap();

    tablecheck()
        .arg("validate")
        .arg("--contract")
        .arg(fixture_path("contract.yml"))
        .arg("--data")
        .arg(fixture_path("dirty.csv"))
        .arg("--out-dir")
        .arg(out_dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Validation FAILED"));

    let ledger = fs::read_to_string(out_dir.path().join("schema_key_violations.csv")).unwrap();
    assert!(ledger.contains("primary_key_global,Session_ID,1"));
    assert!(ledger.contains("primary_key_within_group,Session_ID,1"));
    assert!(ledger.contains("range,Price,2"));
    assert!(ledger.contains("domain,Time_of_Day,1"));

    // Ledger order is the fixed category order.
    let categories: Vec<&str> = ledger
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(
        categories,
        vec![
            "primary_key_global",
            "primary_key_within_group",
            "range",
            "domain"
        ]
    );
}

#[test]
fn test_validate_run_tag_labels_summary() {
    let out_dir = TempDir::new().unwrap();

    tablecheck()
        .arg("validate")
        .arg("--contract")
        .arg(fixture_path("contract.yml"))
        .arg("--data")
        .arg(fixture_path("clean.csv"))
        .arg("--out-dir")
        .arg(out_dir.path())
        .arg("--tag")
        .arg("interim")
        .assert()
        .success();

    let summary =
        fs::read_to_string(out_dir.path().join("schema_validation_summary.md")).unwrap();
    assert!(summary.contains("- Run: interim"));
}

#[test]
fn test_validate_json_format() {
    let out_dir = TempDir::new().unwrap();

    tablecheck()
        .arg("validate")
        .arg("--contract")
        .arg(fixture_path("contract.yml"))
        .arg("--data")
        .arg(fixture_path("clean.csv"))
        .arg("--out-dir")
        .arg(out_dir.path())
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"passed\": true"))
        .stdout(predicate::str::contains("\"row_count\": 3"));
}

#[test]
fn test_validate_missing_data_file() {
    let out_dir = TempDir::new().unwrap();

    tablecheck()
        .arg("validate")
        .arg("--contract")
        .arg(fixture_path("contract.yml"))
        .arg("--data")
        .arg("nonexistent.csv")
        .arg("--out-dir")
        .arg(out_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));

    // Fatal before validation: no partial reports.
    assert!(!out_dir.path().join("schema_key_violations.csv").exists());
}

#[test]
fn test_validate_inconsistent_contract_writes_nothing() {
    let out_dir = TempDir::new().unwrap();

    tablecheck()
        .arg("validate")
        .arg("--contract")
        .arg(fixture_path("invalid_contract.yml"))
        .arg("--data")
        .arg(fixture_path("clean.csv"))
        .arg("--out-dir")
        .arg(out_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));

    assert!(!out_dir.path().join("schema_key_violations.csv").exists());
    assert!(!out_dir.path().join("nulls_overview.csv").exists());
    assert!(!out_dir.path().join("schema_validation_summary.md").exists());
}
