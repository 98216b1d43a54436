//! Integration tests for the find command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::ftag_cmd;

#[test]
fn test_find_reports_matching_files() {
    let temp = TempDir::new().unwrap();

    fs::write(temp.path().join("a.txt"), "a").unwrap();
    fs::write(temp.path().join("b.txt"), "b").unwrap();

    ftag_cmd()
        .arg("--backend")
        .arg("sidecar")
        .arg("set")
        .arg(temp.path().join("a.txt"))
        .arg("Green")
        .assert()
        .success();

    ftag_cmd()
        .current_dir(temp.path())
        .arg("--backend")
        .arg("sidecar")
        .arg("find")
        .arg("Green")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("b.txt").not());
}

#[test]
fn test_find_requires_all_tags() {
    let temp = TempDir::new().unwrap();

    fs::write(temp.path().join("a.txt"), "a").unwrap();
    fs::write(temp.path().join("b.txt"), "b").unwrap();

    ftag_cmd()
        .arg("--backend")
        .arg("sidecar")
        .arg("set")
        .arg(temp.path().join("a.txt"))
        .arg("Green")
        .arg("Red")
        .assert()
        .success();

    ftag_cmd()
        .arg("--backend")
        .arg("sidecar")
        .arg("set")
        .arg(temp.path().join("b.txt"))
        .arg("Green")
        .assert()
        .success();

    ftag_cmd()
        .current_dir(temp.path())
        .arg("--backend")
        .arg("sidecar")
        .arg("find")
        .arg("Green")
        .arg("Red")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("b.txt").not());
}

#[test]
fn test_find_recursive_flag() {
    let temp = TempDir::new().unwrap();

    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("sub").join("nested.txt"), "n").unwrap();

    ftag_cmd()
        .arg("--backend")
        .arg("sidecar")
        .arg("set")
        .arg(temp.path().join("sub").join("nested.txt"))
        .arg("Green")
        .assert()
        .success();

    ftag_cmd()
        .current_dir(temp.path())
        .arg("--backend")
        .arg("sidecar")
        .arg("find")
        .arg("Green")
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching files found"));

    ftag_cmd()
        .current_dir(temp.path())
        .arg("--backend")
        .arg("sidecar")
        .arg("find")
        .arg("Green")
        .arg("--recursive")
        .assert()
        .success()
        .stdout(predicate::str::contains("nested.txt"));
}

#[test]
fn test_find_missing_directory_fails() {
    let temp = TempDir::new().unwrap();

    ftag_cmd()
        .arg("--backend")
        .arg("sidecar")
        .arg("find")
        .arg("Green")
        .arg("--path")
        .arg(temp.path().join("missing"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Path not found"));
}
