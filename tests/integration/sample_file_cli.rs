//! End-to-end tests for the `varo-sample-file` binary
//!
//! These rely on `HOME` controlling home-directory lookup, so they are unix-only.

#![cfg(unix)]

use super::common::home::TestHome;
use predicates::prelude::*;
use std::fs;

const BIN: &str = "varo-sample-file";

#[test]
fn test_writes_args_to_documents() {
    let home = TestHome::new();

    home.command(BIN)
        .args(["hello", "world"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"ARGS >>> ["hello", "world"]"#))
        .stdout(predicate::str::contains(format!(
            "OUTPUT >>> {}",
            home.sample_file().display()
        )));

    assert_eq!(
        fs::read_to_string(home.sample_file()).unwrap(),
        "python\nvaro-sample-file\nhello\nworld\n"
    );
}

#[test]
fn test_no_args_writes_manual_test() {
    let home = TestHome::new();

    home.command(BIN)
        .assert()
        .success()
        .stdout(predicate::str::contains("ARGS >>> []"));

    assert_eq!(
        fs::read_to_string(home.sample_file()).unwrap(),
        "python\nvaro-sample-file\nManual test\n"
    );
}

#[test]
fn test_option_like_args_are_written_literally() {
    let home = TestHome::new();

    home.command(BIN)
        .args(["-h", "--", "--no-open"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(home.sample_file()).unwrap(),
        "python\nvaro-sample-file\n-h\n--\n--no-open\n"
    );
}

#[test]
fn test_version_and_output_dir_words_are_data() {
    let home = TestHome::new();

    home.command(BIN)
        .args(["--version", "--output-dir", "z"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(home.sample_file()).unwrap(),
        "python\nvaro-sample-file\n--version\n--output-dir\nz\n"
    );
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_unicode_arg_is_written_lossily() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let home = TestHome::new();

    home.command(BIN)
        .arg(OsStr::from_bytes(b"caf\xe9"))
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(home.sample_file()).unwrap(),
        "python\nvaro-sample-file\ncaf\u{FFFD}\n"
    );
}

#[test]
fn test_second_run_overwrites() {
    let home = TestHome::new();

    home.command(BIN)
        .args(["one", "two", "three"])
        .assert()
        .success();
    home.command(BIN).arg("one").assert().success();
    let first = fs::read_to_string(home.sample_file()).unwrap();
    home.command(BIN).arg("one").assert().success();

    assert_eq!(first, "python\nvaro-sample-file\none\n");
    assert_eq!(fs::read_to_string(home.sample_file()).unwrap(), first);
}

#[test]
fn test_missing_documents_fails() {
    let home = TestHome::without_documents();

    home.command(BIN)
        .arg("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output directory does not exist"));

    assert!(!home.sample_file().exists());
}

#[test]
fn test_config_disables_open() {
    let home = TestHome::new();
    home.write_config("[writer]\nopen_after_write = false\n");

    home.command(BIN)
        .env_remove("VARO_FIXTURES_NO_OPEN")
        .arg("x")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(home.sample_file()).unwrap(),
        "python\nvaro-sample-file\nx\n"
    );
}

#[test]
fn test_output_dir_from_environment() {
    let home = TestHome::without_documents();
    let target = home.path().join("elsewhere");
    fs::create_dir(&target).unwrap();

    home.command(BIN)
        .env("VARO_FIXTURES_OUTPUT_DIR", &target)
        .arg("x")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "OUTPUT >>> {}",
            target.join("python_sample.txt").display()
        )));

    assert_eq!(
        fs::read_to_string(target.join("python_sample.txt")).unwrap(),
        "python\nvaro-sample-file\nx\n"
    );
}

#[test]
fn test_logs_go_to_data_dir_not_stdout() {
    let home = TestHome::new();

    home.command(BIN)
        .arg("a")
        .env("RUST_LOG", "varo_fixtures=info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote sample file").not());

    let log = fs::read_to_string(home.data_dir().join("logs/varo-sample-file.log")).unwrap();
    assert!(log.contains("Wrote sample file"));
}
