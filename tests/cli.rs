//! End-to-end tests for the ledgerboard binary
//!
//! Drives the compiled binary against temporary ledger files and checks the
//! rendered dashboard and the export outputs.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const SAMPLE_LEDGER: &str = "Data,Projeto,Tipo_Despesa,Valor Total\n\
                             05/01/2024,Alpha,CUSTO,\"100,00\"\n\
                             20/01/2024,Alpha,RECEITA,\"300,00\"\n\
                             03/02/2024,Beta,RECEITA,\"50,00\"\n";

fn sample_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_LEDGER.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("ledgerboard").unwrap();
    // Keep the test isolated from any real user configuration
    cmd.env("LEDGERBOARD_DATA_DIR", TempDir::new().unwrap().into_path());
    cmd
}

#[test]
fn show_renders_all_sections() {
    cmd()
        .arg("show")
        .arg(sample_file().path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Totals"))
        .stdout(predicate::str::contains("Cash Flow"))
        .stdout(predicate::str::contains("Total Revenue"))
        .stdout(predicate::str::contains("Net Result"));
}

#[test]
fn show_computes_expected_totals() {
    // Net result: -100 + 300 + 50 = 250; revenue total: 350
    cmd()
        .arg("show")
        .arg(sample_file().path())
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 250,00"))
        .stdout(predicate::str::contains("R$ 350,00"));
}

#[test]
fn month_filter_narrows_filtered_views_only() {
    cmd()
        .arg("show")
        .arg(sample_file().path())
        .args(["--month", "2024-02"])
        .assert()
        .success()
        // Only Beta's February revenue survives the filter
        .stdout(predicate::str::contains("R$ 50,00"))
        // The ledger-wide revenue total still sees January
        .stdout(predicate::str::contains("R$ 350,00"));
}

#[test]
fn missing_file_fails_with_single_error() {
    cmd()
        .arg("show")
        .arg("/nonexistent/dados.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn missing_column_fails_with_column_name() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Data,Projeto,Valor Total\n05/01/2024,Alpha,\"1,00\"\n")
        .unwrap();
    file.flush().unwrap();

    cmd()
        .arg("show")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tipo_Despesa"));
}

#[test]
fn export_json_writes_payload() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("dashboard.json");

    cmd()
        .arg("export")
        .arg(sample_file().path())
        .args(["--format", "json", "--output"])
        .arg(&output)
        .assert()
        .success();

    let payload: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(payload["revenue"]["grand_total"], 35_000);
    assert_eq!(payload["project_totals"]["net_result"], 25_000);
}

#[test]
fn export_csv_writes_one_file_per_view() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("views");

    cmd()
        .arg("export")
        .arg(sample_file().path())
        .args(["--format", "csv", "--output"])
        .arg(&output)
        .assert()
        .success();

    let monthly = std::fs::read_to_string(output.join("monthly_totals.csv")).unwrap();
    assert_eq!(monthly, "Month,Total\n2024-01,200.00\n2024-02,50.00\n");
    assert!(output.join("cash_flow.csv").exists());
    assert!(output.join("revenue_by_project.csv").exists());
}

#[test]
fn semicolon_delimited_export_loads_with_flag() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        b"Data;Projeto;Tipo_Despesa;Valor Total\n05/01/2024;Alpha;RECEITA;1.000,00\n",
    )
    .unwrap();
    file.flush().unwrap();

    cmd()
        .arg("show")
        .arg(file.path())
        .args(["--delimiter", ";"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 1.000,00"));
}
