//! E2E tests for the report, mortgage and schema commands

use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Test the table output for a complete scenario
#[test]
fn report_table() {
    let output = run(&["report", "-i", "tests/data/scenario.json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Total investment cost"));
    assert!(stdout.contains("168000"));
    assert!(stdout.contains("811"));
    assert!(stdout.contains("194640"));
    assert!(stdout.contains("5.71"));
    assert!(stdout.contains("4.88"));
}

/// Test JSON output structure
#[test]
fn report_json_output() {
    let output = run(&["report", "-i", "tests/data/scenario.json", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["report"]["totalPurchasePrice"], "168000");
    assert_eq!(json["report"]["downPayment"], "0");
    assert_eq!(json["report"]["monthlyMortgagePayment"], "811");
    assert_eq!(json["report"]["totalMortgageInterest"], "26640");
    assert_eq!(json["report"]["netMonthlyIncome"], "683");
    assert_eq!(json["report"]["grossYield"], "5.71");
    assert_eq!(json["warnings"].as_array().map(Vec::len), Some(0));
}

/// Test CSV header and rows
#[test]
fn report_csv_output() {
    let output = run(&["report", "-i", "tests/data/scenario.json", "--csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("section,metric,value,unit"));
    assert!(stdout.contains("Loan,Monthly payment,811,€"));
    assert!(stdout.contains("Rental,Gross yield,5.71,%"));
}

/// Flags override values read from the input file
#[test]
fn report_flag_overrides_file() {
    let output = run(&[
        "report",
        "-i",
        "tests/data/scenario.json",
        "--bank-loan",
        "200000",
        "--json",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["report"]["downPayment"], "-32000");
}

/// Report built from flags only
#[test]
fn report_from_flags() {
    let output = run(&[
        "report",
        "--rent",
        "0",
        "--rental-charges",
        "600",
        "--property-tax",
        "800",
        "--json",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["report"]["netMonthlyIncome"], "-117");
    assert_eq!(json["report"]["grossYield"], "0");
}

/// Invalid fields fall back to 0 and are reported as warnings
#[test]
fn report_invalid_input_warns() {
    let output = run(&["report", "-i", "tests/data/invalid_rate.json", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stderr.contains("bankRate"));

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["report"]["monthlyMortgagePayment"], "0");
    assert_eq!(json["report"]["totalPurchasePrice"], "168000");
    assert_eq!(json["warnings"].as_array().map(Vec::len), Some(1));
}

/// Missing input file is an error
#[test]
fn report_missing_file_fails() {
    let output = run(&["report", "-i", "tests/data/does_not_exist.json"]);
    assert!(!output.status.success());
}

/// Test the mortgage command
#[test]
fn mortgage_summary() {
    let output = run(&["mortgage", "-p", "200000", "-r", "3.5", "-y", "20"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("MORTGAGE"));
    assert!(stdout.contains("Months: 240"));
    assert!(stdout.contains("Monthly payment: 1160"));
}

/// Zero rate spreads the principal evenly
#[test]
fn mortgage_zero_rate_json() {
    let output = run(&["mortgage", "-p", "120000", "-r", "0", "-y", "10", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["monthly_payment"], "1000");
    assert_eq!(json["total_interest"], "0");
    assert_eq!(json["total_cost"], "120000");
}

/// The mortgage command rejects input the report would silently replace
#[test]
fn mortgage_rejects_invalid_input() {
    let output = run(&["mortgage", "-p", "invalid", "-r", "3.5", "-y", "20"]);
    assert!(!output.status.success());

    let output = run(&["mortgage", "-p", "100000", "-r", "3.5", "-y", "0"]);
    assert!(!output.status.success());
}

/// Test the schema command
#[test]
fn schema_formats() {
    let output = run(&["schema"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("\"housingPrice\""));
    assert!(stdout.contains("\"bankLoanPeriod\""));

    let output = run(&["schema", "fields"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Scenario Input Format"));
    assert!(stdout.contains("propertyTax"));
}

/// Precision flags change the rendered decimals
#[test]
fn report_with_decimals() {
    let output = run(&[
        "report",
        "-i",
        "tests/data/scenario.json",
        "--amount-decimals",
        "2",
        "--yield-decimals",
        "3",
        "--json",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["report"]["monthlyMortgagePayment"], "810.68");
    assert_eq!(json["report"]["totalMortgageInterest"], "26563.20");
    assert_eq!(json["report"]["grossYield"], "5.714");
}

/// Scientific notation below the decimal precision is a tiny number, not an error
#[test]
fn report_tiny_scientific_input() {
    let output = run(&[
        "report",
        "--housing-price",
        "1e-30",
        "--notary-fees",
        "5",
        "--house-works",
        "0",
        "--json",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["report"]["totalPurchasePrice"], "5");
}
