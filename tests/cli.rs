//! End-to-end tests: run the `knapsack_gen` binary and check what it prints.
use std::collections::HashSet;
use std::process::{Command, Output};

fn knapsack_gen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_knapsack_gen"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run knapsack_gen")
}

fn knapsack_gen_ok(args: &[&str]) -> String {
    let output = knapsack_gen(args);
    assert!(
        output.status.success(),
        "knapsack_gen exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("knapsack_gen output was not valid UTF-8")
}

fn assert_usage_failure(args: &[&str]) {
    let output = knapsack_gen(args);
    assert_eq!(output.status.code(), Some(1), "args {args:?}");
    assert!(output.stdout.is_empty(), "args {args:?} printed to stdout");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"), "args {args:?}: stderr={stderr}");
}

#[test]
fn prints_capacity_then_items() {
    let out = knapsack_gen_ok(&["--seed", "1", "10"]);
    assert!(out.ends_with('\n'));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 11);

    let capacity: u64 = lines[0].parse().expect("capacity is an integer");
    assert!((50..=150).contains(&capacity), "capacity {capacity}");

    let mut names = HashSet::new();
    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 3, "line {line}");
        assert!(fields[0].bytes().all(|b| b.is_ascii_lowercase()), "line {line}");
        assert!(!fields[0].is_empty());
        let cost: u64 = fields[1].parse().unwrap();
        let value: u64 = fields[2].parse().unwrap();
        assert!((5..=50).contains(&cost), "line {line}");
        assert!((5..=50).contains(&value), "line {line}");
        names.insert(fields[0].to_string());
    }
    assert_eq!(names.len(), 10);
}

#[test]
fn one_item_is_two_lines() {
    let out = knapsack_gen_ok(&["1"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    let capacity: u64 = lines[0].parse().unwrap();
    assert!(capacity >= 5);
}

#[test]
fn fixed_seed_is_reproducible() {
    let a = knapsack_gen_ok(&["--seed", "1234", "3"]);
    let b = knapsack_gen_ok(&["--seed", "1234", "3"]);
    assert_eq!(a, b);
    assert_eq!(a.lines().count(), 4);
}

#[test]
fn output_parses_back_into_the_seeded_instance() {
    let out = knapsack_gen_ok(&["-s", "99", "-p", "legacy", "40"]);
    let parsed = knapgen::parse_instance(&out).expect("output parses");
    let expected = knapgen::Generator::with_seed(knapgen::RangePolicy::Legacy, 99)
        .generate(40)
        .unwrap();
    assert_eq!(parsed, expected);
}

#[test]
fn legacy_policy_ranges() {
    let out = knapsack_gen_ok(&["--policy", "legacy", "--seed", "8", "6"]);
    let instance = knapgen::parse_instance(&out).unwrap();
    assert!((6..=60).contains(&instance.capacity));
    for item in &instance.items {
        assert!((5..=10).contains(&item.name.len()));
        assert!((3..=30).contains(&item.cost));
        assert!((3..=30).contains(&item.value));
    }
}

#[test]
fn missing_count_is_a_usage_error() {
    assert_usage_failure(&[]);
}

#[test]
fn non_positive_counts_are_usage_errors() {
    assert_usage_failure(&["0"]);
    assert_usage_failure(&["-3"]);
}

#[test]
fn non_numeric_count_is_a_usage_error() {
    assert_usage_failure(&["ten"]);
    assert_usage_failure(&["2.5"]);
}

#[test]
fn unknown_policy_is_a_usage_error() {
    assert_usage_failure(&["--policy", "average", "4"]);
}

#[test]
fn counts_too_large_to_hold_fail_cleanly() {
    for count in ["18446744073709551615", "100000000000"] {
        let output = knapsack_gen(&[count]);
        assert_eq!(output.status.code(), Some(1), "count {count}");
        assert!(output.stdout.is_empty(), "count {count}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("invalid argument"), "count {count}: stderr={stderr}");
        assert!(!stderr.contains("panicked"), "count {count}: stderr={stderr}");
    }
}

#[cfg(all(unix, feature = "default_sigpipe"))]
#[test]
fn closed_stdout_ends_quietly() {
    use std::io::{BufRead, BufReader};
    use std::os::unix::process::ExitStatusExt;
    use std::process::Stdio;

    let mut child = Command::new(env!("CARGO_BIN_EXE_knapsack_gen"))
        .args(["--policy", "legacy", "--seed", "4", "200000"])
        .env("RUST_LOG", "off")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run knapsack_gen");

    let mut reader = BufReader::new(child.stdout.take().unwrap());
    let mut first = String::new();
    reader.read_line(&mut first).unwrap();
    assert!(first.trim().parse::<u64>().is_ok(), "first line {first:?}");
    drop(reader);

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.signal(), Some(libc::SIGPIPE));
    assert!(output.stderr.is_empty(), "stderr={}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn help_goes_to_stdout() {
    let out = knapsack_gen_ok(&["--help"]);
    assert!(out.contains("NUMBER_OF_ITEMS"));
    assert!(out.contains("--seed"));
}
