// Binary tests: flags, exit codes, and the stdout/stderr split.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_sample(dir: &Path) -> [PathBuf; 3] {
    let paths = [
        dir.join("c1.tsv"),
        dir.join("c2.tsv"),
        dir.join("c3.tsv"),
    ];
    fs::write(&paths[0], "a\t10\nb\t5\n").unwrap();
    fs::write(&paths[1], "a\t2\nb\t8\n").unwrap();
    fs::write(&paths[2], "a\t100\nb\t100\n").unwrap();
    paths
}

fn logodds() -> Command {
    let mut cmd = Command::cargo_bin("logodds").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_ranked_z_scores() {
    let dir = TempDir::new().unwrap();
    let [c1, c2, c3] = write_sample(dir.path());

    let output = logodds().args([&c1, &c2, &c3]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<(&str, f64)> = stdout
        .lines()
        .map(|l| {
            let (token, score) = l.split_once('\t').unwrap();
            (token, score.parse().unwrap())
        })
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0, "a");
    assert_eq!(lines[1].0, "b");
    assert!((lines[0].1 - 8.188152330459777).abs() < 1e-9);
    assert!((lines[1].1 - 1.1840193118394289).abs() < 1e-9);
}

#[test]
fn raw_flag_with_precision() {
    let dir = TempDir::new().unwrap();
    let [c1, c2, c3] = write_sample(dir.path());

    logodds()
        .arg("--raw")
        .args(["--precision", "4"])
        .args([&c1, &c2, &c3])
        .assert()
        .success()
        .stdout("a\t1.1255\nb\t0.1623\n");
}

#[test]
fn paper_formula_flag() {
    let dir = TempDir::new().unwrap();
    let [c1, c2, c3] = write_sample(dir.path());

    logodds()
        .args(["--raw", "--formula", "paper", "--precision", "3"])
        .args([&c1, &c2, &c3])
        .assert()
        .success()
        .stdout("a\t0.150\nb\t-0.150\n");
}

#[test]
fn logs_stay_off_stdout() {
    let dir = TempDir::new().unwrap();
    let [c1, c2, c3] = write_sample(dir.path());

    logodds()
        .args(["--precision", "2"])
        .args([&c1, &c2, &c3])
        .assert()
        .success()
        .stdout("a\t8.19\nb\t1.18\n")
        .stderr(predicate::str::contains("Reading frequencies"));
}

#[test]
fn quiet_suppresses_progress_logs() {
    let dir = TempDir::new().unwrap();
    let [c1, c2, c3] = write_sample(dir.path());

    logodds()
        .arg("-q")
        .args([&c1, &c2, &c3])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn empty_intersection_succeeds_silently() {
    let dir = TempDir::new().unwrap();
    let [c1, c2, c3] = write_sample(dir.path());
    fs::write(&c3, "zebra\t4\n").unwrap();

    logodds()
        .args([&c1, &c2, &c3])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn malformed_line_exits_non_zero_without_output() {
    let dir = TempDir::new().unwrap();
    let [c1, c2, c3] = write_sample(dir.path());
    fs::write(&c2, "a\t2\ntoken\n").unwrap();

    logodds()
        .args([&c1, &c2, &c3])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("malformed record"));
}

#[test]
fn malformed_line_skipped_on_request() {
    let dir = TempDir::new().unwrap();
    let [c1, c2, c3] = write_sample(dir.path());
    fs::write(&c2, "a\t2\ntoken\nb\t8\n").unwrap();

    logodds()
        .args(["--on-malformed", "skip", "--precision", "2"])
        .args([&c1, &c2, &c3])
        .assert()
        .success()
        .stdout("a\t8.19\nb\t1.18\n")
        .stderr(predicate::str::contains("Skipping input line"));
}

#[test]
fn missing_file_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let [c1, c2, _] = write_sample(dir.path());
    let missing = dir.path().join("missing.tsv");

    logodds()
        .args([&c1, &c2, &missing])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing.tsv"));
}

#[test]
fn undefined_token_skipped_by_default() {
    let dir = TempDir::new().unwrap();
    let [c1, c2, c3] = write_sample(dir.path());
    fs::write(&c1, "ok\t1\nbad\t50\n").unwrap();
    fs::write(&c2, "ok\t1\nbad\t1\n").unwrap();
    fs::write(&c3, "ok\t60\nbad\t1\n").unwrap();

    logodds()
        .args([&c1, &c2, &c3])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ok\t"))
        .stdout(predicate::str::contains("bad").not())
        .stderr(predicate::str::contains("Skipping token"));
}

#[test]
fn undefined_token_aborts_on_request() {
    let dir = TempDir::new().unwrap();
    let [c1, c2, c3] = write_sample(dir.path());
    fs::write(&c1, "ok\t1\nbad\t50\n").unwrap();
    fs::write(&c2, "ok\t1\nbad\t1\n").unwrap();
    fs::write(&c3, "ok\t60\nbad\t1\n").unwrap();

    logodds()
        .args(["--on-undefined", "abort"])
        .args([&c1, &c2, &c3])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("undefined score for token \"bad\""));
}

#[test]
fn overflowing_total_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let [c1, c2, c3] = write_sample(dir.path());
    fs::write(&c3, "a\t18446744073709551615\nb\t1\n").unwrap();

    logodds()
        .args([&c1, &c2, &c3])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("control corpus overflows u64"));
}

#[test]
fn requires_three_paths() {
    logodds().arg("only-one.tsv").assert().failure();
}
