use assert_cmd::Command;
use predicates::prelude::*;

fn sort_bench() -> Command {
    Command::cargo_bin("sort-bench").unwrap()
}

#[test]
fn test_missing_size_prints_usage_and_exits_normally() {
    sort_bench()
        .assert()
        .success()
        .stdout("Usage: sort-bench <size>\n");
}

#[test]
fn test_reports_count_and_elapsed_time_in_milliseconds() {
    sort_bench().arg("1000").assert().success().stdout(
        predicate::str::is_match(r"^Sorted 1000 integers in \d+\.\d{2} ms\n$").unwrap(),
    );
}

#[test]
fn test_size_zero_still_reports_a_summary_line() {
    sort_bench()
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^Sorted 0 integers in \d+\.\d{2} ms\n$").unwrap());
}

#[test]
fn test_non_integer_size_aborts_the_process() {
    sort_bench()
        .arg("abc")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("panicked"));
}
