//! Integration tests for the sift CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn sift() -> Command {
    let mut cmd = Command::cargo_bin("sift").unwrap();
    cmd.env_remove("SIFT_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_solve_calorie_counting() {
    sift()
        .args(["solve", "calorie-counting", &fixture_path("calories.txt")])
        .assert()
        .success()
        .stdout("24000 + 11000 + 10000 = 45000\n");
}

#[test]
fn test_solve_each_sample() {
    let cases = [
        ("rock-paper-scissors", "strategy.txt", "15\n"),
        ("rucksack", "rucksacks.txt", "157, 70\n"),
        ("camp-cleanup", "sections.txt", "2, 4\n"),
        ("supply-stacks", "crates.txt", "MCD\n"),
        ("tuning-trouble", "signals.txt", "19\n23\n23\n29\n26\n"),
        ("trebuchet", "calibration.txt", "Sum of calibration values: 281\n"),
    ];

    for (puzzle, fixture, expected) in cases {
        sift()
            .args(["solve", puzzle, &fixture_path(fixture)])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn test_solve_by_date() {
    sift()
        .args(["solve", "2022-04", &fixture_path("sections.txt")])
        .assert()
        .success()
        .stdout("2, 4\n");
}

#[test]
fn test_solver_flags() {
    sift()
        .args(["solve", "supply-stacks", &fixture_path("crates.txt")])
        .args(["--crane", "one-at-a-time"])
        .assert()
        .success()
        .stdout("CMZ\n");

    sift()
        .args(["solve", "rock-paper-scissors", &fixture_path("strategy.txt")])
        .args(["--strategy", "outcome"])
        .assert()
        .success()
        .stdout("12\n");

    sift()
        .args(["solve", "calorie-counting", &fixture_path("calories.txt")])
        .args(["--top", "1"])
        .assert()
        .success()
        .stdout("24000 = 24000\n");

    sift()
        .args(["solve", "tuning-trouble", &fixture_path("signals.txt")])
        .args(["--window", "4"])
        .assert()
        .success()
        .stdout("7\n5\n6\n10\n11\n");
}

#[test]
fn test_digits_only() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input");
    fs::write(&input, "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n").unwrap();

    sift()
        .args(["solve", "trebuchet", "--digits-only"])
        .arg(&input)
        .assert()
        .success()
        .stdout("Sum of calibration values: 142\n");
}

#[test]
fn test_json_output() {
    sift()
        .args(["solve", "rucksack", &fixture_path("rucksacks.txt"), "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"puzzle\": \"rucksack\""))
        .stdout(predicate::str::contains("\"misplaced_sum\": 157"))
        .stdout(predicate::str::contains("\"badge_sum\": 70"));
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("answer.txt");

    sift()
        .args(["solve", "supply-stacks", &fixture_path("crates.txt"), "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), "MCD\n");
}

#[test]
fn test_stdin_input() {
    sift()
        .args(["solve", "rock-paper-scissors", "-"])
        .write_stdin("A Y\nB X\nC Z\n")
        .assert()
        .success()
        .stdout("15\n");
}

#[test]
fn test_default_input_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("input"), "2-8,3-7\n").unwrap();

    sift()
        .current_dir(temp_dir.path())
        .args(["solve", "camp-cleanup"])
        .assert()
        .success()
        .stdout("1, 1\n");
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();

    sift()
        .current_dir(temp_dir.path())
        .args(["solve", "calorie-counting"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input"));
}

#[test]
fn test_malformed_line() {
    sift()
        .args([
            "solve",
            "camp-cleanup",
            &fixture_path("malformed-sections.txt"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("expected 4 tokens, found 3"));
}

#[test]
fn test_unknown_puzzle() {
    sift()
        .args(["solve", "day-99", &fixture_path("calories.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown puzzle"));
}

#[test]
fn test_timed_reports_to_stderr() {
    sift()
        .args(["solve", "camp-cleanup", &fixture_path("sections.txt"), "--timed"])
        .assert()
        .success()
        .stdout("2, 4\n")
        .stderr(predicate::str::contains("camp-cleanup solved in"));
}

#[test]
fn test_verbose_logs_banner() {
    sift()
        .args(["-v", "solve", "calorie-counting", &fixture_path("calories.txt")])
        .assert()
        .success()
        .stderr(predicate::str::contains("--- 2022 Day 1: Calorie Counting ---"));
}

#[test]
fn test_quiet_suppresses_logging() {
    sift()
        .args(["-v", "-q", "solve", "calorie-counting", &fixture_path("calories.txt")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Calorie Counting").not());
}

#[test]
fn test_list() {
    sift()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2022-05  supply-stacks"))
        .stdout(predicate::str::contains("Trebuchet?!"));
}

#[test]
fn test_config_file_values() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("sift.toml");
    fs::write(
        &config,
        "[output]\ndefault_format = \"json\"\n\n[solve]\ncrane = \"one-at-a-time\"\n",
    )
    .unwrap();

    sift()
        .arg("-c")
        .arg(&config)
        .args(["solve", "supply-stacks", &fixture_path("crates.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tops\": \"CMZ\""));

    // flags beat the file
    sift()
        .env("SIFT_CONFIG", &config)
        .args(["solve", "supply-stacks", &fixture_path("crates.txt")])
        .args(["--crane", "bulk", "-f", "text"])
        .assert()
        .success()
        .stdout("MCD\n");
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("sift.toml");
    fs::write(&config, "[solve]\ntop_k = 0\n").unwrap();

    sift()
        .arg("-c")
        .arg(&config)
        .args(["solve", "calorie-counting", &fixture_path("calories.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("top_k must be greater than 0"));
}

#[test]
fn test_generate_then_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("sift.toml");

    sift()
        .args(["generate-config", "-o"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration template written"));

    sift()
        .arg("validate")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_rejects_bad_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("sift.toml");
    fs::write(&config, "[solve]\ncrane = \"gantry\"\n").unwrap();

    sift()
        .arg("validate")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_help() {
    sift()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("solve"))
        .stdout(predicate::str::contains("generate-config"));
}
