use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn phredator() -> Command {
    Command::cargo_bin("phredator").unwrap()
}

#[test]
fn test_encode_phred_stdin() {
    phredator()
        .arg("encode-phred")
        .write_stdin("1.0\n0.5\n0.1\n")
        .assert()
        .success()
        .stdout("0\n3\n10\n");
}

#[test]
fn test_encode_phred_zero_prob() {
    phredator()
        .arg("encode-phred")
        .write_stdin("0.0\n")
        .assert()
        .success()
        .stdout("inf\n");
}

#[test]
fn test_encode_phred_empty_input() {
    phredator()
        .arg("encode-phred")
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_encode_phred_files() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("probs.tsv");
    let output = dir.path().join("scores.tsv");
    fs::write(&input, "0.5\n0.1\n").unwrap();

    phredator()
        .arg("encode-phred")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "3\n10\n");
}

#[test]
fn test_encode_phred_rejects_out_of_range() {
    phredator()
        .arg("encode-phred")
        .write_stdin("0.5\n1.1\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("must be between 0 and 1"));
}

#[test]
fn test_encode_phred_rejects_nan() {
    phredator()
        .arg("encode-phred")
        .write_stdin("NaN\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is NaN"));
}

#[test]
fn test_encode_phred_rejects_garbage() {
    phredator()
        .arg("encode-phred")
        .write_stdin("0.5\nnot-a-number\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid record at line 2"));
}

#[test]
fn test_decode_phred_stdin() {
    let output = phredator()
        .arg("decode-phred")
        .write_stdin("0\n10\n20\ninf\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let probs: Vec<f64> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| line.parse().unwrap())
        .collect();
    assert_eq!(probs.len(), 4);
    assert!((probs[0] - 1.0).abs() < 1e-12);
    assert!((probs[1] - 0.1).abs() < 1e-12);
    assert!((probs[2] - 0.01).abs() < 1e-12);
    assert_eq!(probs[3], 0.0);
}

#[test]
fn test_decode_phred_rejects_negative() {
    phredator()
        .arg("decode-phred")
        .write_stdin("-3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("scores must be non-negative"));
}
