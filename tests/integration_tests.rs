//! End-to-end tests for the pargz binary

use assert_cmd::Command;
use flate2::read::GzDecoder;
use flate2::{Compression, write::GzEncoder};
use predicates::prelude::*;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::TempDir;

fn pargz() -> Command {
    Command::cargo_bin("pargz").unwrap()
}

fn gzip_bytes(data: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

fn gunzip_file(path: &Path) -> Vec<u8> {
    let mut out = Vec::new();
    GzDecoder::new(fs::File::open(path).unwrap())
        .read_to_end(&mut out)
        .unwrap();
    out
}

#[test]
fn compress_replaces_original_and_round_trips() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();

    pargz()
        .args([dir.path().to_str().unwrap(), "*.txt", "-p", "false"])
        .assert()
        .success();

    let gz = dir.path().join("a.txt.gz");
    assert!(gz.exists());
    assert!(!dir.path().join("a.txt").exists());
    assert_eq!(gunzip_file(&gz), b"hello");

    pargz()
        .args([dir.path().to_str().unwrap(), "*.gz", "-d", "1", "-p", "0"])
        .assert()
        .success();

    assert_eq!(fs::read(dir.path().join("a.txt")).unwrap(), b"hello");
    assert!(!gz.exists());
}

#[test]
fn decompress_with_keep_orig_leaves_both_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b.txt.gz"), gzip_bytes(b"world")).unwrap();

    pargz()
        .args([
            dir.path().to_str().unwrap(),
            "*.gz",
            "-d",
            "yes",
            "-k",
            "yes",
            "-p",
            "no",
        ])
        .assert()
        .success();

    assert_eq!(fs::read(dir.path().join("b.txt")).unwrap(), b"world");
    assert!(dir.path().join("b.txt.gz").exists());
}

#[test]
fn compress_job_with_gz_pattern_aborts_before_any_work() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), b"untouched").unwrap();

    pargz()
        .args([dir.path().to_str().unwrap(), "*.gz", "-p", "false"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already gzipped"));

    assert!(dir.path().join("a.txt").exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn decompress_job_requires_gz_pattern() {
    let dir = TempDir::new().unwrap();

    pargz()
        .args([dir.path().to_str().unwrap(), "*.txt", "-d", "true", "-p", "false"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not end in .gz"));
}

#[test]
fn bad_boolean_token_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    pargz()
        .args([dir.path().to_str().unwrap(), "*.txt", "-d", "maybe"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("boolean value expected"));
}

#[test]
fn shallow_search_skips_nested_files() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/c.txt"), b"nested").unwrap();

    pargz()
        .args([
            dir.path().to_str().unwrap(),
            "*.txt",
            "-r",
            "false",
            "-p",
            "false",
        ])
        .assert()
        .success();
    assert!(dir.path().join("sub/c.txt").exists());
    assert!(!dir.path().join("sub/c.txt.gz").exists());

    pargz()
        .args([dir.path().to_str().unwrap(), "*.txt", "-p", "false"])
        .assert()
        .success();
    assert!(dir.path().join("sub/c.txt.gz").exists());
}

#[test]
fn multiple_roots_are_searched_in_one_run() {
    let one = TempDir::new().unwrap();
    let two = TempDir::new().unwrap();
    fs::write(one.path().join("x.txt"), b"one").unwrap();
    fs::write(two.path().join("y.txt"), b"two").unwrap();

    pargz()
        .args([
            one.path().to_str().unwrap(),
            two.path().to_str().unwrap(),
            "*.txt",
            "-p",
            "false",
        ])
        .assert()
        .success();

    assert!(one.path().join("x.txt.gz").exists());
    assert!(two.path().join("y.txt.gz").exists());
}

#[test]
fn per_file_failures_keep_exit_zero_by_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.txt.gz"), b"not a gzip stream").unwrap();

    pargz()
        .args([dir.path().to_str().unwrap(), "*.gz", "-d", "y", "-p", "n"])
        .assert()
        .success();

    // Failed copy must not delete the source.
    assert!(dir.path().join("bad.txt.gz").exists());
}

#[test]
fn fail_on_error_propagates_per_file_failures() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.txt.gz"), b"not a gzip stream").unwrap();

    pargz()
        .args([
            dir.path().to_str().unwrap(),
            "*.gz",
            "-d",
            "y",
            "-p",
            "n",
            "--fail-on-error",
        ])
        .assert()
        .failure();
}

#[test]
fn missing_roots_are_skipped_with_a_warning() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();
    let ghost = dir.path().join("ghost");

    pargz()
        .args([
            dir.path().to_str().unwrap(),
            ghost.to_str().unwrap(),
            "*.txt",
            "-p",
            "false",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipping root"));

    assert!(dir.path().join("a.txt.gz").exists());
}

#[test]
fn pattern_with_path_separator_warns_up_front() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/c.txt"), b"nested").unwrap();

    pargz()
        .args([dir.path().to_str().unwrap(), "sub/*.txt", "-p", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("match file names only"));

    // Separator patterns never match against file names.
    assert!(!dir.path().join("sub/c.txt.gz").exists());
}

#[test]
fn verbose_prints_a_line_per_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();

    pargz()
        .args([
            dir.path().to_str().unwrap(),
            "*.txt",
            "-v",
            "true",
            "-p",
            "false",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compressing"));
}
