use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_config(workdir: &Path, upstream: &Path) {
    let yaml = format!(
        "upstream_root: {}\n\
         docs_root: docs-upstream\n\
         sync_report_path: sync-report.md\n\
         steward_report_path: steward-report.md\n",
        upstream.display()
    );
    std::fs::write(workdir.join("docsteward.yaml"), yaml).unwrap();
}

#[test]
fn sync_writes_targets_and_report() {
    let workdir = TempDir::new().unwrap();
    let upstream = TempDir::new().unwrap();
    std::fs::write(upstream.path().join("README.md"), "# Title\nBody").unwrap();
    write_config(workdir.path(), upstream.path());

    Command::cargo_bin("docsteward")
        .unwrap()
        .current_dir(workdir.path())
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("mapped files"));

    let overview =
        std::fs::read_to_string(workdir.path().join("docs-upstream/overview.md")).unwrap();
    assert!(overview.starts_with("---\ntitle: Title\n---\n"));
    assert!(overview.ends_with("# Title\nBody"));

    let report = std::fs::read_to_string(workdir.path().join("sync-report.md")).unwrap();
    assert!(report.contains("# Documentation Sync Report"));
    assert!(report.contains("`README.md` → `overview.md`"));
}

#[test]
fn partial_failures_still_exit_zero_and_report() {
    let workdir = TempDir::new().unwrap();
    let upstream = TempDir::new().unwrap();
    // Only README.md exists; every docs/ mapping fails softly.
    std::fs::write(upstream.path().join("README.md"), "# Only File").unwrap();
    write_config(workdir.path(), upstream.path());

    Command::cargo_bin("docsteward")
        .unwrap()
        .current_dir(workdir.path())
        .arg("sync")
        .assert()
        .success();

    let report = std::fs::read_to_string(workdir.path().join("sync-report.md")).unwrap();
    assert!(report.contains("Review failed syncs"));
}

#[test]
fn missing_upstream_root_is_fatal() {
    let workdir = TempDir::new().unwrap();
    std::fs::write(
        workdir.path().join("docsteward.yaml"),
        "upstream_root: /nonexistent/docsteward-upstream\n",
    )
    .unwrap();

    Command::cargo_bin("docsteward")
        .unwrap()
        .current_dir(workdir.path())
        .arg("sync")
        .assert()
        .failure();
}

#[test]
fn malformed_config_is_fatal() {
    let workdir = TempDir::new().unwrap();
    std::fs::write(workdir.path().join("docsteward.yaml"), "upstream_root: [oops\n").unwrap();

    Command::cargo_bin("docsteward")
        .unwrap()
        .current_dir(workdir.path())
        .arg("sync")
        .assert()
        .failure();
}
