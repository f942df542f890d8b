//! Integration tests for the dtcq CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd
//! against a fixture data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get a dtcq command with a clean environment
fn dtcq() -> Command {
    let mut cmd = Command::cargo_bin("dtcq").unwrap();
    cmd.env_remove("DTCQ_DATA").env_remove("DTCQ_FORMAT");
    cmd
}

/// Helper to create a fixture data directory
fn setup_data_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();

    fs::write(
        tmp.path().join("CarMake.json"),
        r#"[
            {"CarMakeId": 1, "Name": "ford", "Description": "Ford"},
            {"CarMakeId": 2, "Name": "toyota", "Description": "Toyota"}
        ]"#,
    )
    .unwrap();

    fs::write(
        tmp.path().join("CodeType.json"),
        r#"[{"CodeTypeId": 1, "Name": "Generic"}]"#,
    )
    .unwrap();

    fs::write(
        tmp.path().join("PartType.json"),
        r#"[{"PartTypeId": 1, "PartType": "Sensor"}]"#,
    )
    .unwrap();

    fs::write(
        tmp.path().join("SystemCategory.json"),
        r#"[{"SystemCategoryId": 1, "Name": "Ignition"}]"#,
    )
    .unwrap();

    fs::write(
        tmp.path().join("Code.json"),
        r#"[
            {
                "DiagnosticCode": "P0300",
                "Description": "Random/Multiple Cylinder Misfire Detected",
                "CodeTypeId": 1,
                "PartTypeId": 1,
                "SystemCategoryId": 1,
                "CarMakeId": 1,
                "DetailsUrl": "https://example.com/p0300",
                "causes": ["Worn spark plugs"]
            },
            {
                "DiagnosticCode": "P0171",
                "Description": "System Too Lean (Bank 1)",
                "CodeTypeId": 1,
                "PartTypeId": 1,
                "SystemCategoryId": 1
            },
            {
                "DiagnosticCode": "B1342",
                "Description": "ECU Is Faulted",
                "CodeTypeId": 9,
                "PartTypeId": 9,
                "SystemCategoryId": 9,
                "CarMakeId": 2
            }
        ]"#,
    )
    .unwrap();

    fs::write(
        tmp.path().join("site.json"),
        r#"{
            "Title": "DTC Reference",
            "Version": "2.1.0",
            "Branch": "main",
            "Revision": "deadbeef",
            "BuiltOn": "2026-08-01T12:30:00+00:00"
        }"#,
    )
    .unwrap();

    let dict_dir = tmp.path().join("ManufacturerSpecificCodes");
    fs::create_dir(&dict_dir).unwrap();
    fs::write(
        dict_dir.join("ford.json"),
        r#"{
            "P1101": {
                "Description": "MAF Sensor Out of Self-Test Range",
                "causes": ["Dirty MAF sensor"]
            }
        }"#,
    )
    .unwrap();

    tmp
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    dtcq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "querying diagnostic trouble code",
        ));
}

#[test]
fn test_version_displays() {
    dtcq()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dtcq"));
}

#[test]
fn test_unknown_command_fails() {
    dtcq()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_missing_data_dir_fails() {
    dtcq()
        .args(["list", "--data", "/nonexistent/data"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("data directory not found"));
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_shows_all_codes() {
    let data = setup_data_dir();

    dtcq()
        .args(["list", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("P0300"))
        .stdout(predicate::str::contains("P0171"))
        .stdout(predicate::str::contains("B1342"))
        .stdout(predicate::str::contains("3 code(s) found"));
}

#[test]
fn test_list_resolves_dimension_labels() {
    let data = setup_data_dir();

    dtcq()
        .args(["list", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generic"))
        .stdout(predicate::str::contains("Sensor"))
        .stdout(predicate::str::contains("Ignition"))
        .stdout(predicate::str::contains("Ford"));
}

#[test]
fn test_list_defaults_for_missing_foreign_keys() {
    let data = setup_data_dir();

    // P0171 has no make; B1342 has dangling dimension ids
    dtcq()
        .args(["list", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Universal"))
        .stdout(predicate::str::contains("Unknown"));
}

#[test]
fn test_list_filters_by_make() {
    let data = setup_data_dir();

    dtcq()
        .args(["list", "--make", "ford", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("P0300"))
        .stdout(predicate::str::contains("P0171").not())
        .stdout(predicate::str::contains("B1342").not())
        .stdout(predicate::str::contains("1 code(s) found"));
}

#[test]
fn test_list_make_filter_case_insensitive() {
    let data = setup_data_dir();

    dtcq()
        .args(["list", "--make", "FORD", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("P0300"));
}

#[test]
fn test_list_unknown_make_matches_nothing() {
    let data = setup_data_dir();

    dtcq()
        .args(["list", "--make", "fiat", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 code(s) found"));
}

#[test]
fn test_list_limit() {
    let data = setup_data_dir();

    dtcq()
        .args(["list", "--limit", "1", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("P0300"))
        .stdout(predicate::str::contains("P0171").not());
}

#[test]
fn test_list_id_format() {
    let data = setup_data_dir();

    let output = dtcq()
        .args(["list", "-f", "id", "--data"])
        .arg(data.path())
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["P0300", "P0171", "B1342"]
    );
}

#[test]
fn test_list_quiet_suppresses_summary() {
    let data = setup_data_dir();

    dtcq()
        .args(["list", "--quiet", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("code(s) found").not());
}

// ============================================================================
// Lookup Command Tests
// ============================================================================

#[test]
fn test_lookup_single_code() {
    let data = setup_data_dir();

    dtcq()
        .args(["lookup", "P0300", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("P0300"))
        .stdout(predicate::str::contains("Misfire"))
        .stdout(predicate::str::contains("Ford"));
}

#[test]
fn test_lookup_code_case_insensitive() {
    let data = setup_data_dir();

    dtcq()
        .args(["lookup", "p0300", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("P0300"));
}

#[test]
fn test_lookup_comma_separated_codes() {
    let data = setup_data_dir();

    dtcq()
        .args(["lookup", "P0300,P0171", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("P0300"))
        .stdout(predicate::str::contains("P0171"))
        .stdout(predicate::str::contains("2 code(s) found"));
}

#[test]
fn test_lookup_unknown_code_not_found() {
    let data = setup_data_dir();

    dtcq()
        .args(["lookup", "P9999", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No information found for 'P9999'"))
        .stdout(predicate::str::contains("0 code(s) found"));
}

#[test]
fn test_lookup_shows_causes() {
    let data = setup_data_dir();

    dtcq()
        .args(["lookup", "P0300", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Possible causes for P0300"))
        .stdout(predicate::str::contains("Worn spark plugs"));
}

#[test]
fn test_lookup_make_restricts_results() {
    let data = setup_data_dir();

    // P0300 is a Ford code; filtering by Toyota should miss it
    dtcq()
        .args(["lookup", "P0300", "--make", "toyota", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No information found for 'P0300'"));
}

#[test]
fn test_lookup_manufacturer_specific_code() {
    let data = setup_data_dir();

    // P1101 only exists in the ford per-make dictionary
    dtcq()
        .args(["lookup", "P1101", "--make", "ford", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("P1101"))
        .stdout(predicate::str::contains("MAF Sensor Out of Self-Test Range"))
        .stdout(predicate::str::contains("Manufacturer Specific"));
}

#[test]
fn test_lookup_dictionary_accepts_display_name() {
    let data = setup_data_dir();

    // "Ford" resolves to the short key "ford" for the dictionary file
    dtcq()
        .args(["lookup", "P1101", "--make", "Ford", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("P1101"));
}

#[test]
fn test_lookup_corrupt_dictionary_warns_and_continues() {
    let data = setup_data_dir();
    fs::write(
        data.path().join("ManufacturerSpecificCodes/ford.json"),
        "{broken",
    )
    .unwrap();

    dtcq()
        .args(["lookup", "P1101", "--make", "ford", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("could not load make dictionary"))
        .stderr(predicate::str::contains("No information found for 'P1101'"));
}

#[test]
fn test_lookup_missing_dictionary_warns_and_continues() {
    let data = setup_data_dir();

    dtcq()
        .args(["lookup", "P9998", "--make", "toyota", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("could not load make dictionary"))
        .stderr(predicate::str::contains("No information found for 'P9998'"));
}

#[test]
fn test_lookup_empty_input_returns_all() {
    let data = setup_data_dir();

    dtcq()
        .args(["lookup", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3 code(s) found"));
}

// ============================================================================
// Output Format Tests
// ============================================================================

#[test]
fn test_json_format() {
    let data = setup_data_dir();

    let output = dtcq()
        .args(["lookup", "P0300", "-f", "json", "--data"])
        .arg(data.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(parsed[0]["DiagnosticCode"], "P0300");
    assert_eq!(parsed[0]["CarMake"], "Ford");
    assert_eq!(parsed[0]["CodeType"], "Generic");
}

#[test]
fn test_csv_format() {
    let data = setup_data_dir();

    dtcq()
        .args(["list", "-f", "csv", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "code,description,code_type,part_type,system_category,make,details_url",
        ))
        .stdout(predicate::str::contains("P0300"));
}

#[test]
fn test_csv_quotes_commas() {
    let data = setup_data_dir();

    // "System Too Lean (Bank 1)" has no comma, but the misfire causes
    // description does not end up in CSV; check a description cell with a
    // comma round-trips quoted
    fs::write(
        data.path().join("Code.json"),
        r#"[{"DiagnosticCode": "P0001", "Description": "Fuel Volume Regulator, Control Circuit/Open"}]"#,
    )
    .unwrap();

    dtcq()
        .args(["list", "-f", "csv", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"Fuel Volume Regulator, Control Circuit/Open\"",
        ));
}

#[test]
fn test_md_format() {
    let data = setup_data_dir();

    dtcq()
        .args(["lookup", "P0300", "-f", "md", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("| Code | Description | Details |"))
        .stdout(predicate::str::contains(
            "Generic - Sensor - Ignition - Ford",
        ));
}

#[test]
fn test_html_format_links_details_url() {
    let data = setup_data_dir();

    dtcq()
        .args(["lookup", "P0300", "-f", "html", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("<table>"))
        .stdout(predicate::str::contains("<strong>P0300</strong>"))
        .stdout(predicate::str::contains(
            "href=\"https://example.com/p0300\"",
        ))
        .stdout(predicate::str::contains("View Details"));
}

#[test]
fn test_html_format_plain_without_url() {
    let data = setup_data_dir();

    dtcq()
        .args(["lookup", "P0171", "-f", "html", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("<td>P0171</td>"))
        .stdout(predicate::str::contains("View Details").not());
}

#[test]
fn test_format_env_variable() {
    let data = setup_data_dir();

    let output = dtcq()
        .env("DTCQ_FORMAT", "id")
        .args(["list", "--data"])
        .arg(data.path())
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|l| l == "P0300"));
    assert!(!stdout.contains("DESCRIPTION"));
}

// ============================================================================
// Makes Command Tests
// ============================================================================

#[test]
fn test_makes_lists_all() {
    let data = setup_data_dir();

    dtcq()
        .args(["makes", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Ford"))
        .stdout(predicate::str::contains("Toyota"))
        .stdout(predicate::str::contains("2 make(s) found"));
}

#[test]
fn test_makes_shows_dictionary_availability() {
    let data = setup_data_dir();

    let output = dtcq()
        .args(["makes", "-f", "json", "--data"])
        .arg(data.path())
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["Name"], "ford");
    assert_eq!(parsed[0]["HasDictionary"], true);
    assert_eq!(parsed[0]["Codes"], 1);
    assert_eq!(parsed[1]["HasDictionary"], false);
}

#[test]
fn test_makes_id_format() {
    let data = setup_data_dir();

    let output = dtcq()
        .args(["makes", "-f", "id", "--data"])
        .arg(data.path())
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["ford", "toyota"]);
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[test]
fn test_info_displays_site_metadata() {
    let data = setup_data_dir();

    dtcq()
        .args(["info", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DTC Reference"))
        .stdout(predicate::str::contains("2.1.0"))
        .stdout(predicate::str::contains("main"))
        .stdout(predicate::str::contains("deadbeef"))
        .stdout(predicate::str::contains("2026-08-01"));
}

#[test]
fn test_info_missing_site_json_warns() {
    let data = setup_data_dir();
    fs::remove_file(data.path().join("site.json")).unwrap();

    dtcq()
        .args(["info", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("no site.json"));
}

#[test]
fn test_info_malformed_site_json_warns() {
    let data = setup_data_dir();
    fs::write(data.path().join("site.json"), "][").unwrap();

    dtcq()
        .args(["info", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("failed to load site.json"));
}

#[test]
fn test_info_json_format() {
    let data = setup_data_dir();

    let output = dtcq()
        .args(["info", "-f", "json", "--data"])
        .arg(data.path())
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["Title"], "DTC Reference");
    assert_eq!(parsed["Version"], "2.1.0");
}

// ============================================================================
// Error Path Tests
// ============================================================================

#[test]
fn test_malformed_code_table_fails() {
    let data = setup_data_dir();
    fs::write(data.path().join("Code.json"), "{not valid").unwrap();

    dtcq()
        .args(["list", "--data"])
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Code.json"));
}

#[test]
fn test_missing_dimension_table_fails() {
    let data = setup_data_dir();
    fs::remove_file(data.path().join("CodeType.json")).unwrap();

    dtcq()
        .args(["list", "--data"])
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("CodeType.json"));
}

#[test]
fn test_plural_make_table_spelling() {
    let data = setup_data_dir();
    fs::rename(
        data.path().join("CarMake.json"),
        data.path().join("CarMakes.json"),
    )
    .unwrap();

    dtcq()
        .args(["list", "--make", "ford", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("P0300"));
}

// ============================================================================
// Completions Command Tests
// ============================================================================

#[test]
fn test_completions_bash() {
    dtcq()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dtcq"));
}
