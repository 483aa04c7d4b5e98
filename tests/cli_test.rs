//! Integration tests for CLI argument parsing and report output.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

mod common;

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a small synthetic NTUSER.DAT with one modern record and one
/// session marker into a fresh temp dir.
fn setup_hive() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let image = common::userassist_hive(
        "{CEBFF5CD-ACE2-4F4F-9178-9926F41749EA}",
        &[
            (
                r"{1AC14E77-02E7-4E5D-B744-2EB1AE5198B7}\cmd.exe",
                common::modern_record(3, 14, 9, 2500, 128930364000000000),
            ),
            ("UEME_CTLSESSION", vec![0u8; 8]),
        ],
    );
    let path = temp.path().join("NTUSER.DAT");
    fs::write(&path, image).unwrap();
    (temp, path)
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.arg("--help");
    cmd.assert().success().stdout(predicate::str::contains(
        "UserAssist execution-history parser",
    ));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_without_terminal_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No hive file given"));
    Ok(())
}

#[test]
fn cli_parse_missing_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.arg("parse");
    cmd.arg(temp.path().join("missing.dat"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

#[test]
fn cli_parse_json_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, hive) = setup_hive();
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.arg("parse").arg(&hive).args(["--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(parsed["record_count"], 1);
    assert_eq!(
        parsed["records"][0]["program"],
        r"C:\Windows\System32\cmd.exe"
    );
    assert_eq!(parsed["records"][0]["used_count"], 14);
    Ok(())
}

#[test]
fn cli_parse_default_output_is_text() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, hive) = setup_hive();
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.arg("parse").arg(&hive);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("UserAssist execution history"))
        .stdout(predicate::str::contains(r"C:\Windows\System32\cmd.exe"));
    Ok(())
}

#[test]
fn cli_parse_writes_yaml_file() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, hive) = setup_hive();
    let report = temp.path().join("report.yaml");
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.arg("parse").arg(&hive).arg("--output").arg(&report);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Report written to"));

    let contents = fs::read_to_string(&report)?;
    assert!(contents.contains("os_generation: win7"));
    assert!(contents.contains("cmd.exe"));
    Ok(())
}

#[test]
fn cli_parse_accepts_xp_alias() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, hive) = setup_hive();
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.arg("parse")
        .arg(&hive)
        .args(["--os", "xp", "--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(parsed["os_generation"], "winxp");
    Ok(())
}

#[test]
fn cli_parse_extensionless_output_defaults_to_json() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, hive) = setup_hive();
    let report = temp.path().join("report");
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.arg("parse").arg(&hive).arg("--output").arg(&report);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No file extension given"));

    assert!(temp.path().join("report.json").exists());
    Ok(())
}

#[test]
fn cli_parse_unknown_extension_fails() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, hive) = setup_hive();
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.arg("parse")
        .arg(&hive)
        .arg("--output")
        .arg(temp.path().join("report.xml"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cannot infer report format"));
    Ok(())
}

#[test]
fn cli_quiet_hides_progress() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, hive) = setup_hive();
    let report = temp.path().join("out.json");
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.arg("--quiet")
        .arg("parse")
        .arg(&hive)
        .arg("--output")
        .arg(&report);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Parsing").not())
        .stderr(predicate::str::contains("Report written to"));
    Ok(())
}

#[test]
fn cli_folders_lists_desktop() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.arg("folders");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "{B4BFCC3A-DB2C-424C-B029-7FE99A87C641}",
        ))
        .stdout(predicate::str::contains(r"%USERPROFILE%\Desktop"));
    Ok(())
}

#[test]
fn cli_folders_json_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.args(["folders", "--json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    let rows = parsed.as_array().unwrap();
    assert!(rows.len() > 10);
    assert!(rows
        .iter()
        .any(|row| row["guid"] == "{B4BFCC3A-DB2C-424C-B029-7FE99A87C641}"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("runtrail"));
    Ok(())
}

#[test]
fn cli_debug_flag_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, hive) = setup_hive();
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.arg("--debug").arg("parse").arg(&hive);
    cmd.assert().success();
    Ok(())
}

#[test]
fn cli_invalid_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("runtrail"));
    cmd.arg("invalid-command");
    cmd.assert().failure();
    Ok(())
}
