use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn run_median(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_median"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

fn stdout_of(input: &str) -> String {
    let output = run_median(input);
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn odd_count() {
    assert_eq!(stdout_of("5 3 1 4 2"), "3.000000\n");
}

#[test]
fn even_count() {
    assert_eq!(stdout_of("1 2 3 4\n"), "2.500000\n");
}

#[test]
fn stops_at_non_numeric() {
    assert_eq!(stdout_of("1 2 x 3"), "1.500000\n");
}

#[test]
fn one_value_per_line() {
    let input = std::fs::read_to_string("./test_data/2500_values.txt").unwrap();
    assert_eq!(stdout_of(&input), "1250.500000\n");
}

#[test]
fn empty_input_fails() {
    let output = run_median("");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr, "### error: no values to compute a median of\n");
}

#[test]
fn garbage_input_fails() {
    let output = run_median("hello world");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn unwritable_stdout_fails_cleanly() {
    let full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_median"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(full)
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child.stdin.take().unwrap().write_all(b"1 2 3").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("### error: failed to write output:"));
    assert!(!stderr.contains("panicked"));
}
