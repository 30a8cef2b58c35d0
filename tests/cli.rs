// CLI argument handling: every invalid invocation prints the usage line on
// stdout and exits with status 1 before any workload is allocated.

use assert_cmd::Command;
use predicates::prelude::*;

fn bench() -> Command {
    Command::cargo_bin("transform_reduce").expect("binary built")
}

fn usage() -> impl Predicate<str> {
    predicate::str::contains("Usage: ").and(predicate::str::contains("<seq|par|par_unseq|unseq"))
}

#[test]
fn test_no_arguments() {
    bench().assert().code(1).stdout(usage());
}

#[test]
fn test_two_positionals() {
    bench().args(["seq", "par"]).assert().code(1).stdout(usage());
}

#[test]
fn test_unknown_token() {
    bench()
        .arg("bogus")
        .assert()
        .code(1)
        .stdout(usage())
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn test_token_spelling_is_exact() {
    bench().arg("par-unseq").assert().code(1).stdout(usage());
    bench().arg("SEQ").assert().code(1).stdout(usage());
}

#[test]
fn test_malformed_flag() {
    bench().args(["seq", "--threads", "many"]).assert().code(1).stdout(usage());
}

#[test]
fn test_zero_grain_is_a_usage_error() {
    for strategy in ["seq", "tbb"] {
        bench()
            .args([strategy, "--grain", "0"])
            .assert()
            .code(1)
            .stdout(usage())
            .stderr(predicate::str::contains("--grain"));
    }
}

#[test]
fn test_help_and_version_are_usage_errors() {
    for flag in ["--help", "-h", "--version", "-V"] {
        bench().arg(flag).assert().code(1).stdout(usage());
    }
}

// full-size runs allocate 4 GiB; run with `cargo test -- --ignored`
fn assert_single_report_line(strategy: &str) {
    let line = format!(r"^{}, result = \d+, duration = \d+us\n$", strategy);
    bench()
        .arg(strategy)
        .assert()
        .success()
        .stdout(predicate::str::is_match(line).expect("valid regex"));
}

#[test]
#[ignore]
fn test_full_run_seq() {
    assert_single_report_line("seq");
}

#[test]
#[ignore]
fn test_full_run_par() {
    assert_single_report_line("par");
}

#[test]
#[ignore]
fn test_full_run_par_unseq() {
    assert_single_report_line("par_unseq");
}

#[test]
#[ignore]
fn test_full_run_unseq() {
    assert_single_report_line("unseq");
}

#[test]
#[ignore]
fn test_full_run_tbb() {
    assert_single_report_line("tbb");
}

#[test]
#[ignore]
fn test_full_run_omp() {
    assert_single_report_line("omp");
}
