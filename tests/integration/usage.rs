// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests of the command-line surface that don't need a measurement set.

use tempfile::TempDir;

use crate::*;

#[test]
fn test_help() {
    let cmd = ms2csv().arg("--help").ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stdout.contains("--inputms"), "{stderr}");
    assert!(stdout.contains("--outputcsv"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_version() {
    let cmd = ms2csv().arg("--version").ok();
    assert!(cmd.is_ok());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_input_is_an_error() {
    let tmp_dir = TempDir::new().unwrap();
    ms2csv()
        .current_dir(tmp_dir.path())
        .arg("--no-progress-bars")
        .assert()
        .failure()
        .code(1);
    // Nothing is written, not even a default output.
    assert_eq!(std::fs::read_dir(tmp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_empty_input_is_an_error() {
    let tmp_dir = TempDir::new().unwrap();
    let output = tmp_dir.path().join("out.csv");
    let cmd = ms2csv()
        .args(["-i", "", "-o"])
        .arg(&output)
        .arg("--no-progress-bars")
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.starts_with("Error: "), "{stderr}");
    assert!(!output.exists());
}

#[test]
fn test_nonexistent_input_is_an_error() {
    let tmp_dir = TempDir::new().unwrap();
    let input = tmp_dir.path().join("nothing_here.ms");
    let output = tmp_dir.path().join("out.csv");
    ms2csv()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--no-progress-bars")
        .assert()
        .failure()
        .code(1);
    assert!(!output.exists());
}

#[test]
fn test_unknown_flag_exits_with_1() {
    ms2csv()
        .arg("--not-a-real-flag")
        .assert()
        .failure()
        .code(1);
}
