// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use file_times_infra::platform;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{Fixture, MODIFIED};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_file_times"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("file_times"))
        .stdout(predicate::str::contains("dd/mm/yyyy hh:mm:ss"));
}

#[test]
fn show_prints_both_fields() {
    let fixture = Fixture::new("show.txt");
    bin()
        .args(["show"])
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:"))
        .stdout(predicate::str::is_match(r"Modified:  \d{2}/\d{2}/\d{4} \d{2}:\d{2}:\d{2}").unwrap());
}

#[test]
fn show_json_is_parseable() {
    let fixture = Fixture::new("show.json.txt");
    let output = bin().args(["show", "--format", "json"]).arg(fixture.path()).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert!(value["modified"].is_string());
    assert!(value["path"].as_str().unwrap().ends_with("show.json.txt"));
}

#[test]
fn show_missing_file_marks_fields_unavailable() {
    let fixture = Fixture::new("present.txt");
    bin()
        .arg("show")
        .arg(fixture.missing("absent.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:   unavailable"))
        .stdout(predicate::str::contains("Modified:  unavailable"));
}

#[test]
fn set_rejects_bad_dates() {
    let fixture = Fixture::new("bad.txt");
    bin()
        .arg("set")
        .arg(fixture.path())
        .args(["--created", "31/02/2023 10:00:00", "--modified", "01/01/2023 00:00:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Check date format"));
}

#[test]
fn set_modified_only_keeps_creation() {
    let fixture = Fixture::new("mtime.txt");
    let assert = bin().arg("set").arg(fixture.path()).args(["--modified", MODIFIED]).assert();

    if platform::creation_time_readable(fixture.path()) {
        assert.success().stdout(predicate::str::contains("File was updated successfully."));
        bin()
            .arg("show")
            .arg(fixture.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("Modified:  {MODIFIED}")));
    } else {
        assert.failure().stderr(predicate::str::contains("unavailable"));
    }
}

#[test]
fn interactive_apply_without_file() {
    bin()
        .arg("interactive")
        .write_stdin("apply\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No file selected."));
}

#[test]
fn interactive_open_and_show() {
    let fixture = Fixture::new("session.txt");
    let script = format!("open {}\nshow\nquit\n", fixture.path().display());
    bin()
        .arg("interactive")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("opened session.txt"))
        .stdout(predicate::str::contains("modified:  "));
}
