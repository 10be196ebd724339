//! End-to-end runs of the `renta` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_data(dir: &Path) {
    fs::write(
        dir.join("bonds.csv"),
        "ticker,issue_date,maturity,coupon,index,offset,day_count_conv\n\
         AM26,2024-03-15,2026-03-15,0.10,,,1\n\
         ZC25,2024-01-01,2025-12-31,0,,,1\n\
         IX26,2024-03-15,2026-03-15,0.10,CER,0,1\n",
    )
    .unwrap();
    fs::write(
        dir.join("cashflows.csv"),
        "ticker,seq,date,rate,amort,residual,amount\n\
         AM26,1,2024-09-15,0.10,25,75,30\n\
         AM26,2,2025-03-15,0.10,25,50,28.75\n\
         AM26,3,2025-09-15,0.10,25,25,27.5\n\
         AM26,4,2026-03-15,0.10,25,0,26.25\n\
         ZC25,1,2025-12-31,0,100,0,100\n\
         IX26,1,2025-03-15,0.10,50,50,55\n\
         IX26,2,2026-03-15,0.10,50,0,52.5\n",
    )
    .unwrap();
    fs::write(
        dir.join("cer.csv"),
        "date,value\n2024-03-15,100\n2025-01-02,150\n",
    )
    .unwrap();
    fs::write(
        dir.join("renta.toml"),
        "[data]\n\
         bonds_csv = \"bonds.csv\"\n\
         cashflows_csv = \"cashflows.csv\"\n\
         index_csv = \"cer.csv\"\n\
         \n\
         [reload]\n\
         max_attempts = 1\n",
    )
    .unwrap();
}

fn renta(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("renta").unwrap();
    cmd.current_dir(dir).env_remove("RENTA_CONFIG").env("RUST_LOG", "error");
    cmd
}

#[test]
fn test_yield_minimal() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path());

    let output = renta(dir.path())
        .args(["-f", "minimal", "yield", "ZC25", "--price", "90", "-s", "2025-01-02"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: f64 = String::from_utf8(output.stdout).unwrap().trim().parse().unwrap();
    // 100/90 - 1 over 359/360 years
    assert!((value - (100.0 / 90.0 - 1.0) / (359.0 / 360.0)).abs() < 1e-6);
}

#[test]
fn test_price_json_report() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path());

    renta(dir.path())
        .args(["-f", "json", "price", "AM26", "--rate", "0.12", "-s", "2025-01-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ticker\": \"AM26\""))
        .stdout(predicate::str::contains("\"shape\": \"amortizing\""));
}

#[test]
fn test_indexed_yield_uses_series() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path());

    renta(dir.path())
        .args(["-f", "json", "yield", "IX26", "--price", "150", "-s", "2025-01-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ratio\": 1.5"));
}

#[test]
fn test_bonds_list() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path());

    renta(dir.path())
        .args(["-f", "minimal", "bonds", "--indexed"])
        .assert()
        .success()
        .stdout("IX26\n");
}

#[test]
fn test_schedule_export() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path());

    renta(dir.path())
        .args(["-q", "schedule", "--export", "out", "-s", "2025-03-15"])
        .assert()
        .success();

    let flows = fs::read_to_string(dir.path().join("out/cashflows.csv")).unwrap();
    assert!(flows.starts_with("ticker,seq,date,rate,amort,residual,amount"));
    assert!(flows.contains("AM26,1,2025-03-15,"));
    assert!(!flows.contains("2024-09-15"));
}

#[test]
fn test_index_extrapolation() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path());

    renta(dir.path())
        .args(["-f", "minimal", "index", "--date", "2025-01-02"])
        .assert()
        .success()
        .stdout("150.000000\n");
}

#[test]
fn test_unknown_ticker_fails() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path());

    renta(dir.path())
        .args(["yield", "NOPE", "--price", "90", "-s", "2025-01-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOPE"));
}

#[test]
fn test_missing_data_files() {
    let dir = TempDir::new().unwrap();

    renta(dir.path())
        .args(["bonds"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bonds-csv"));
}
