//! Runs the built `busybox` binary and checks its exact output.

use std::process::{Command, Output};

use busybox_sim::banner;

fn busybox(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_busybox"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run busybox binary")
}

fn expect_stdout(args: &[&str], extra: &str) {
    let output = busybox(args);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty(), "stderr: {:?}", output.stderr);
    let expected = format!("{}\n{}", banner::banner_line(), extra);
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[test]
fn test_no_arguments_prints_banner_only() {
    expect_stdout(&[], "");
}

#[test]
fn test_default_version_banner() {
    if banner::VERSION != "1.0" {
        return;
    }
    let output = busybox(&[]);
    assert_eq!(
        output.stdout,
        b"BusyBox v1.0 - The Swiss Army Knife of Embedded Linux\n"
    );
}

#[test]
fn test_help() {
    expect_stdout(
        &["--help"],
        "Usage: busybox [command] [args...]\nAvailable commands:\n  sh, ls, cat, echo, grep, ...\n",
    );
}

#[test]
fn test_command_is_echoed() {
    expect_stdout(&["ls"], "Running command: ls\n");
}

#[test]
fn test_empty_string_argument() {
    expect_stdout(&[""], "Running command: \n");
}

#[test]
fn test_unusual_arguments_are_echoed() {
    expect_stdout(&["42"], "Running command: 42\n");
    expect_stdout(&["cat /etc/passwd"], "Running command: cat /etc/passwd\n");
    expect_stdout(&["--version"], "Running command: --version\n");
    expect_stdout(&["-h"], "Running command: -h\n");
    expect_stdout(&["--"], "Running command: --\n");
}

#[test]
fn test_trailing_arguments_are_ignored() {
    expect_stdout(&["grep", "-r", "--help"], "Running command: grep\n");
    expect_stdout(
        &["--help", "ls"],
        "Usage: busybox [command] [args...]\nAvailable commands:\n  sh, ls, cat, echo, grep, ...\n",
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = busybox(&["sh"]);
    let second = busybox(&["sh"]);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}
