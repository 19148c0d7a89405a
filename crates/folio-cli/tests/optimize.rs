//! End-to-end tests for the optimize command.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_catalog(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn optimize_reports_expected_selection() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(
        &dir,
        "id,name,price,growth_rate,sector,market_cap\n\
         A,Alpha Tech,100,10,tech,1000000000\n\
         B,Beta Bank,50,20,bank,500000000\n",
    );

    // B leads the ranking and absorbs the whole budget: 200 lots at
    // 50 x 100 = 1,000,000 invested, projecting 1,200,000.
    Command::cargo_bin("folio")
        .unwrap()
        .args([
            "optimize",
            "--catalog",
            catalog.to_str().unwrap(),
            "--cash",
            "1000000",
            "--max-allocation",
            "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Beta Bank"))
        .stdout(predicate::str::contains("200"))
        .stdout(predicate::str::contains("Projected value: 1,200,000"))
        .stdout(predicate::str::contains("20.00%"));
}

#[test]
fn optimize_with_infeasible_budget_prints_empty_report() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(
        &dir,
        "id,name,price,growth_rate,sector,market_cap\n\
         A,Alpha Tech,100,10,tech,1000000000\n",
    );

    Command::cargo_bin("folio")
        .unwrap()
        .args([
            "optimize",
            "--catalog",
            catalog.to_str().unwrap(),
            "--cash",
            "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results."))
        .stdout(predicate::str::contains("Projected value: 0"));
}

#[test]
fn optimize_fails_on_malformed_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(
        &dir,
        "id,name,price,growth_rate,sector,market_cap\n\
         A,Alpha Tech,not-a-price,10,tech,1000000000\n",
    );

    Command::cargo_bin("folio")
        .unwrap()
        .args([
            "optimize",
            "--catalog",
            catalog.to_str().unwrap(),
            "--cash",
            "1000000",
        ])
        .assert()
        .failure();
}
