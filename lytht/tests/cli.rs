//! End-to-end CLI tests: drives the built `lytht` binary directly and
//! checks its stdout/exit code, rather than calling into its modules.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn lytht_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lytht"))
}

#[test]
fn version_flag_prints_the_crate_version() {
    let mut cmd = Command::new(lytht_bin());
    cmd.arg("--version");

    cmd.assert().success().stdout(predicate::str::contains("lytht"));
}

#[test]
fn one_cycle_evaluates_a_single_expression() {
    let mut cmd = Command::new(lytht_bin());
    cmd.args(["-c", "cycle=0"]).write_stdin("1 + 2\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3").and(predicate::str::contains("Goodbye.")));
}

#[test]
fn reassigning_an_immutable_name_reports_a_diagnostic_and_keeps_going() {
    let mut cmd = Command::new(lytht_bin());
    cmd.args(["-c", "cycle=1"]).write_stdin("7 + 4 -> b\n12 -> b\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Reassignment of an immutable variable"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn eof_with_no_cycle_limit_exits_cleanly() {
    let mut cmd = Command::new(lytht_bin());
    cmd.write_stdin("");

    cmd.assert().success().stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn malformed_cycle_argument_is_rejected_before_the_repl_starts() {
    let mut cmd = Command::new(lytht_bin());
    cmd.args(["-c", "5"]);

    cmd.assert().failure();
}
