// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end tests of the binary: output discipline, exit codes, and the
//! worker pipe protocol.

mod common;

use common::{binary_fixture, random_points, text_fixture};
use std::io::Write;
use std::process::{Command, Output, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_tricount");

fn run_cli(args: &[&str]) -> Output {
    Command::new(BIN).args(args).output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_serial_run_prints_count_only() {
    let file = text_fixture(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
    let output = run_cli(&[file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "4\n");
}

#[test]
fn test_thread_and_process_runs_agree_with_serial() {
    let points = random_points(21, 25, 5);
    let file = text_fixture(&points);
    let path = file.path().to_str().unwrap();

    let serial = run_cli(&[path]);
    assert!(serial.status.success());
    let threads = run_cli(&[path, "4"]);
    assert!(threads.status.success());
    let processes = run_cli(&[path, "4", "--processes"]);
    assert!(processes.status.success());

    assert_eq!(stdout_of(&serial), stdout_of(&threads));
    assert_eq!(stdout_of(&serial), stdout_of(&processes));
}

#[test]
fn test_binary_input_end_to_end() {
    let file = binary_fixture(&[(0, 0), (1, 0), (0, 1)]);
    let output = run_cli(&[file.path().to_str().unwrap(), "2"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1\n");
}

#[test]
fn test_missing_file_exits_2() {
    let output = run_cli(&["/no/such/points.txt"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn test_malformed_text_exits_3() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "5\n1 2\n3 4").unwrap();
    file.flush().unwrap();
    let output = run_cli(&[file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_unaligned_binary_exits_3() {
    let mut file = tempfile::Builder::new().suffix(".dat").tempfile().unwrap();
    file.write_all(&[1, 2, 3]).unwrap();
    file.flush().unwrap();
    let output = run_cli(&[file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_usage_errors_exit_1() {
    // No input at all.
    assert_eq!(run_cli(&[]).status.code(), Some(1));

    let file = text_fixture(&[(0, 0), (1, 0), (0, 1)]);
    let path = file.path().to_str().unwrap();
    // Worker counts outside 1..=256.
    assert_eq!(run_cli(&[path, "0"]).status.code(), Some(1));
    assert_eq!(run_cli(&[path, "257"]).status.code(), Some(1));
    assert_eq!(run_cli(&[path, "many"]).status.code(), Some(1));
}

#[test]
fn test_worker_protocol_round_trip() {
    let file = text_fixture(&[(0, 0), (1, 0), (1, 1), (0, 1)]);

    let mut child = Command::new(BIN)
        .arg("worker")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(format!("{}\n0\n4\n", file.path().display()).as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "4\n");
}

#[test]
fn test_worker_with_truncated_assignment_fails() {
    let mut child = Command::new(BIN)
        .arg("worker")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"some-source\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().is_empty());
}
