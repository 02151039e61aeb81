use assert_cmd::Command;
use predicates::prelude::*;
use square_clusters::pipeline::RunReport;
use std::fs;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("square-clusters").expect("binary");
    cmd.arg("--log-level").arg("off");
    cmd
}

#[test]
fn run_prints_summary_and_grid() {
    bin()
        .args(["run", "12", "--seed", "3", "--ones", "1", "--zeros", "0", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Found 1 12x12 clusters!\n\n1 1 1"));
}

#[test]
fn run_writes_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    bin()
        .args(["run", "16", "--seed", "5", "--all", "--containment", "--json"])
        .arg(&path)
        .assert()
        .success();

    let report = RunReport::load_json(&path).unwrap();
    assert_eq!(report.grid.size(), 16);
    assert!(!report.search.max_only);
    assert_eq!(report.summary.total(), report.clusters.len());
    for (i, a) in report.clusters.iter().enumerate() {
        for (j, b) in report.clusters.iter().enumerate() {
            assert!(i == j || !a.contains(b));
        }
    }
}

#[test]
fn run_rejects_min_size_above_grid() {
    bin()
        .args(["run", "4", "--min-size", "5", "--seed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidMinSize"));
}

#[test]
fn run_reads_json_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    fs::write(
        &path,
        r#"{ "size": 6, "seed": 2, "weights": { "zero": 1.0, "one": 0.0 } }"#,
    )
    .unwrap();
    bin()
        .args(["run", "--no-color", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Found 1 6x6 clusters!"));
}

#[test]
fn find_reads_grid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.txt");
    fs::write(&path, "0010\n0011\n1100\n0100\n").unwrap();
    bin()
        .args(["find", "--all", "--no-color"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Found 2 2x2 clusters!\n\n0 0 1 0\n0 0 1 1\n1 1 0 0\n0 1 0 0",
        ));
}

#[test]
fn find_reports_malformed_grid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.txt");
    fs::write(&path, "001\n01\n").unwrap();
    bin()
        .arg("find")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("NotSquare"));
}

#[test]
fn perf_prints_table() {
    bin()
        .args([
            "perf",
            "--cases",
            "2",
            "--runs",
            "1",
            "--start-size",
            "10",
            "--increment",
            "5",
            "--seed",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("There are 2 test cases and every case ran 1 times."))
        .stdout(predicate::str::contains("10x10 -> "))
        .stdout(predicate::str::contains("15x15 -> "));
}

#[test]
fn menu_runs_then_quits() {
    bin()
        .arg("menu")
        .write_stdin("1\n10\n2\nn\nn\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum cluster size (min=2, max=10): "))
        .stdout(predicate::str::contains("Clusters are"));
}

#[test]
fn logger_installs_at_requested_level() {
    Command::cargo_bin("square-clusters")
        .expect("binary")
        .args(["--log-level", "debug", "run", "10", "--seed", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn unknown_log_level_is_rejected() {
    Command::cargo_bin("square-clusters")
        .expect("binary")
        .args(["--log-level", "loud", "run", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown log level"));
}

#[test]
fn run_flags_override_json_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    fs::write(
        &path,
        r#"{ "size": 6, "seed": 2, "weights": { "zero": 1.0, "one": 0.0 } }"#,
    )
    .unwrap();
    bin()
        .args(["run", "--no-color", "--zeros", "0", "--ones", "1", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Found 1 6x6 clusters!\n\n1 1 1"));
}

#[test]
fn perf_reads_json_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("perf.json");
    fs::write(
        &path,
        r#"{ "cases": 2, "runs": 1, "start_size": 10, "increment": 2 }"#,
    )
    .unwrap();
    bin()
        .args(["perf", "--seed", "1", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("There are 2 test cases and every case ran 1 times."))
        .stdout(predicate::str::contains("12x12 -> "));
}

#[test]
fn perf_rejects_overflowing_sizes() {
    bin()
        .args(["perf", "--cases", "3", "--start-size", "10"])
        .arg("--increment")
        .arg(usize::MAX.to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidPerfParams"));
}
