//! CLI integration tests
//!
//! Exercise the salesboard binary end to end with assert_cmd: help output,
//! report rendering on a fixture ledger, and the error exits.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::TempDir;

const HEADER: &str = "NF,Descricao_produto,Linha,Vendedor,Mes,Ano,situacao,\
Qtd_Produto,Valor_Total_Item,Total_Custo_Compra,Total_Lucro_Venda_Item";

fn fixture(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("vendas.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        "{HEADER}\n\
         101,Dipirona 500mg,Farmacia,Ana,1,2024,Faturado,2,50.00,30.00,20.00\n\
         102,Luva Nitrilica,Hospitalar,Bruno,2,2024,Faturado,5,75.00,50.00,25.00\n"
    )
    .unwrap();
    path
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("salesboard").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("salesboard"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("salesboard").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("salesboard"));
}

#[test]
fn test_report_help() {
    let mut cmd = Command::cargo_bin("salesboard").unwrap();
    cmd.args(["report", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Render the full dashboard"));
}

#[test]
fn test_breakdown_help() {
    let mut cmd = Command::cargo_bin("salesboard").unwrap();
    cmd.args(["breakdown", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("product-line"));
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORT TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_report_renders_metrics_and_charts() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir);

    let mut cmd = Command::cargo_bin("salesboard").unwrap();
    cmd.args(["report", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Faturamento Total"))
        .stdout(predicate::str::contains("R$ 125,00"))
        .stdout(predicate::str::contains("Vendas por Linha de Produto"))
        .stdout(predicate::str::contains("Vendas por Vendedor"))
        .stdout(predicate::str::contains("Top 10 Produtos Mais Vendidos"));
}

#[test]
fn test_report_filter_narrows_output() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir);

    let mut cmd = Command::cargo_bin("salesboard").unwrap();
    cmd.args(["report", "--salesperson", "Ana", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 50,00"))
        .stdout(predicate::str::contains("R$ 125,00").not());
}

#[test]
fn test_report_empty_ledger_warns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{HEADER}").unwrap();

    let mut cmd = Command::cargo_bin("salesboard").unwrap();
    cmd.args(["report", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("no data rows"))
        .stdout(predicate::str::contains("R$ 0,00"));
}

// ═══════════════════════════════════════════════════════════════════════════
// OTHER COMMAND TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_metrics_shows_invoice_count() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir);

    let mut cmd = Command::cargo_bin("salesboard").unwrap();
    cmd.args(["metrics", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total de Notas"));
}

#[test]
fn test_breakdown_by_salesperson() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir);

    let mut cmd = Command::cargo_bin("salesboard").unwrap();
    cmd.args(["breakdown", "salesperson", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana"))
        .stdout(predicate::str::contains("Bruno"));
}

#[test]
fn test_top_respects_limit() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir);

    let mut cmd = Command::cargo_bin("salesboard").unwrap();
    cmd.args(["top", "--limit", "1", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Luva Nitrilica"))
        .stdout(predicate::str::contains("Dipirona 500mg").not());
}

#[test]
fn test_filters_lists_domain_values() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir);

    let mut cmd = Command::cargo_bin("salesboard").unwrap();
    cmd.args(["filters", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Vendedor"))
        .stdout(predicate::str::contains("Ana"))
        .stdout(predicate::str::contains("2024"));
}

// ═══════════════════════════════════════════════════════════════════════════
// ERROR TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_file_fails() {
    let mut cmd = Command::cargo_bin("salesboard").unwrap();
    cmd.args(["report", "--data", "/definitely/not/here.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not/here.csv"));
}

#[test]
fn test_unknown_breakdown_column_fails() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir);

    let mut cmd = Command::cargo_bin("salesboard").unwrap();
    cmd.args(["breakdown", "flavor", "--data"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("flavor"));
}

#[test]
fn test_schema_error_names_missing_columns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "NF,Vendedor\n101,Ana").unwrap();

    let mut cmd = Command::cargo_bin("salesboard").unwrap();
    cmd.args(["report", "--data"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valor_Total_Item"));
}
