//! The `delins` binary, driven as a subprocess.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn delins(args: &[&str]) -> Output {
    delins_with_env(args, &[])
}

fn delins_with_env(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_delins"));
    cmd.args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("DELINS_NAIVE_LIMIT")
        .env_remove("DELINS_REPEAT");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to spawn delins")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Two files holding "AB" and "XYZ".
fn text_files() -> (TempDir, String, String) {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "AB").unwrap();
    fs::write(&b, "XYZ").unwrap();
    let a = a.to_string_lossy().into_owned();
    let b = b.to_string_lossy().into_owned();
    (dir, a, b)
}

#[test]
fn files_prints_distance_and_micros() {
    let (_dir, a, b) = text_files();
    let output = delins(&["files", &a, &b, "-a", "memo"]);
    assert!(output.status.success());

    let line = stdout(&output);
    let (distance, micros) = line.trim().split_once(',').unwrap();
    assert_eq!(distance, "5");
    assert!(micros.parse::<u128>().is_ok());
}

#[test]
fn cases_succeeds() {
    let output = delins(&["cases"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("HELLO"));
}

#[test]
fn naive_refuses_large_input_unless_allowed() {
    let s = "ABABABABABABA";
    let refused = delins(&["distance", s, s, "-a", "naive"]);
    assert!(!refused.status.success());
    assert!(String::from_utf8_lossy(&refused.stderr).contains("--force"));

    let forced = delins(&["distance", s, s, "-a", "naive", "--force"]);
    assert!(forced.status.success());

    let raised = delins(&["distance", s, s, "-a", "naive", "--naive-limit", "30"]);
    assert!(raised.status.success());
}

#[test]
fn flag_beats_environment_for_the_naive_limit() {
    let s = "ABABABABABABA";
    let from_env = delins_with_env(&["distance", s, s, "-a", "naive"], &[("DELINS_NAIVE_LIMIT", "30")]);
    assert!(from_env.status.success());

    let overridden = delins_with_env(
        &["distance", s, s, "-a", "naive", "--naive-limit", "10"],
        &[("DELINS_NAIVE_LIMIT", "30")],
    );
    assert!(!overridden.status.success());
}

#[test]
fn experiment_writes_json_records() {
    let (dir, a, b) = text_files();
    let json = dir.path().join("results.json");
    let json_arg = json.to_string_lossy().into_owned();

    let output = delins(&[
        "experiment", &a, &b, "-a", "memo", "-a", "dpopt", "--repeat", "1", "--json", &json_arg,
    ]);
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r["distance"] == 5));
    assert_eq!(records[0]["from_len"], 2);
    assert_eq!(records[0]["to_len"], 3);
}

#[test]
fn experiment_caps_text_length() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("as.txt");
    let b = dir.path().join("bs.txt");
    fs::write(&a, "A".repeat(3000)).unwrap();
    fs::write(&b, "B".repeat(3000)).unwrap();
    let json = dir.path().join("results.json");
    let (a, b) = (a.to_string_lossy().into_owned(), b.to_string_lossy().into_owned());
    let json_arg = json.to_string_lossy().into_owned();

    let output = delins(&[
        "experiment", &a, &b, "-a", "dpopt", "-a", "dpopt", "--repeat", "1", "--json", &json_arg,
    ]);
    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["distance"] == 2000 && r["from_len"] == 1000));

    let output = delins(&[
        "experiment", &a, &b, "-a", "dpopt", "--max-len", "50", "--repeat", "1", "--json", &json_arg,
    ]);
    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert!(records.as_array().unwrap().iter().all(|r| r["distance"] == 100));
}

#[test]
fn verify_cross_checks_short_strings() {
    let output = delins(&["verify", "--alphabet", "AB", "--max-len", "3"]);
    assert!(output.status.success());
    // 15 strings of length <= 3 over two symbols
    assert!(stdout(&output).contains("225 pairs"));
}

#[test]
fn missing_file_is_reported() {
    let output = delins(&["files", "/nonexistent/a.txt", "/nonexistent/b.txt"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
}
