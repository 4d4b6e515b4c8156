//! CLI integration tests
//!
//! These tests run the lintmeta binary with various subcommands and options.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn lintmeta() -> Command {
    let mut cmd = Command::cargo_bin("lintmeta").unwrap();
    // Keep the developer's config files out of the way
    cmd.current_dir(std::env::temp_dir());
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    lintmeta()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("constraint"))
        .stdout(predicate::str::contains("plurals"))
        .stdout(predicate::str::contains("desugar"))
        .stdout(predicate::str::contains("manifest"));
}

#[test]
fn test_cli_version() {
    lintmeta()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lintmeta"));
}

// ============================================================================
// Constraint Tests
// ============================================================================

#[test]
fn test_constraint_decode() {
    lintmeta()
        .args(["constraint", "decode", "e000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API level ≥ 26 and API level < 29"));
}

#[test]
fn test_constraint_decode_invalid() {
    lintmeta()
        .args(["constraint", "decode", "not-a-constraint"])
        .assert()
        .failure();
}

#[test]
fn test_constraint_describe_json() {
    let output = lintmeta()
        .args(["--format", "json", "constraint", "describe", "0:33,30:2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["version"], "1.0");
    assert_eq!(json["kind"], "constraint");
    assert_eq!(json["descriptor"], "0:33,30:2");
    assert_eq!(json["rendered"], "API level ≥ 33 or R Extensions: version ≥ 2");
    assert_eq!(json["sdks"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_constraint_check() {
    lintmeta()
        .args(["constraint", "check", "--have", "0:31", "--need", "0:28"])
        .assert()
        .success()
        .stdout(predicate::str::contains("satisfied"));

    lintmeta()
        .args(["constraint", "check", "--have", "0:33", "--need", "0:30,30:4"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("R Extensions: version ≥ 4"));
}

#[test]
fn test_constraint_check_any_of() {
    lintmeta()
        .args([
            "--format", "json", "constraint", "check", "--have", "30:5", "--need", "0:34,30:4", "--any-of",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"satisfied\": true"));
}

// ============================================================================
// Plurals Tests
// ============================================================================

#[test]
fn test_plurals() {
    lintmeta()
        .args(["plurals", "ru"])
        .assert()
        .success()
        .stdout(predicate::str::contains("few"))
        .stdout(predicate::str::contains("1, 21, 31"));
}

#[test]
fn test_plurals_unknown_language() {
    lintmeta()
        .args(["plurals", "xx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plural rules known"));
}

// ============================================================================
// Desugar Tests
// ============================================================================

#[test]
fn test_desugar_builtin() {
    lintmeta()
        .args(["desugar", "java/lang/Character", "compare", "(CC)I"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is desugared"));

    lintmeta()
        .args(["--format", "json", "desugar", "java.time.Duration", "ofDays", "(J)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"desugared\": false"))
        .stdout(predicate::str::contains("\"can_be_desugared_later\": true"));
}

#[test]
fn test_desugar_descriptor_without_parameter_list() {
    lintmeta()
        .args(["desugar", "java/lang/Character", "compare", "CC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is not desugared"));
}

#[test]
fn test_desugar_with_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("desugar.txt");
    fs::write(&file, "java/time/Duration\n").unwrap();

    lintmeta()
        .args(["--format", "json", "desugar", "java/time/Duration", "ofDays", "(J)"])
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"desugared\": true"))
        .stdout(predicate::str::contains("\"descriptor_count\": 1"));
}

#[test]
fn test_desugar_missing_file() {
    lintmeta()
        .args(["desugar", "java/lang/Character", "compare", "(CC)", "--file", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/definitely/not/here.txt"));
}

// ============================================================================
// Manifest Tests
// ============================================================================

#[test]
fn test_manifest_scan() {
    let dir = TempDir::new().unwrap();
    let main = dir.path().join("app/src/main");
    fs::create_dir_all(&main).unwrap();
    fs::write(
        main.join("AndroidManifest.xml"),
        r#"<manifest xmlns:android="http://schemas.android.com/apk/res/android" package="com.example">
    <uses-sdk android:minSdkVersion="26" />
</manifest>"#,
    )
    .unwrap();

    let output = lintmeta()
        .args(["--format", "json", "--quiet", "manifest"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "manifests");
    let manifests = json["manifests"].as_array().unwrap();
    assert_eq!(manifests.len(), 1);
    assert_eq!(manifests[0]["package"], "com.example");
    assert_eq!(manifests[0]["kind"], "main");
    assert_eq!(manifests[0]["requirement"], "API level ≥ 26");
}

#[test]
fn test_manifest_missing_path() {
    lintmeta()
        .args(["manifest", "/definitely/not/here"])
        .assert()
        .failure();
}

#[test]
fn test_json_output_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("report.json");

    lintmeta()
        .args(["--format", "json", "constraint", "decode", "e000000", "--output"])
        .arg(&output)
        .assert()
        .success();

    let contents = fs::read_to_string(&output).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["min_api"], 26);
    assert_eq!(json["max_api"], 29);
}
