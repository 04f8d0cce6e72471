#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stub_agent(dir: &Path) -> PathBuf {
    let path = dir.join("stub-agent.sh");
    std::fs::write(&path, "#!/bin/sh\necho \"stub analysis output\"\n").unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

fn write_config(workdir: &Path, upstream: &Path, agent_command: &str) {
    let yaml = format!(
        "upstream_root: {}\n\
         docs_root: docs-upstream\n\
         sync_report_path: sync-report.md\n\
         steward_report_path: steward-report.md\n\
         agent_command: {agent_command}\n",
        upstream.display()
    );
    std::fs::write(workdir.join("docsteward.yaml"), yaml).unwrap();
}

#[test]
fn full_cycle_writes_steward_report() {
    let workdir = TempDir::new().unwrap();
    let upstream = TempDir::new().unwrap();
    std::fs::write(upstream.path().join("README.md"), "# Upstream").unwrap();
    let agent = stub_agent(workdir.path());
    write_config(workdir.path(), upstream.path(), &agent.display().to_string());

    // No subcommand — defaults to the full cycle.
    Command::cargo_bin("docsteward")
        .unwrap()
        .current_dir(workdir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("steward-report.md"));

    let report = std::fs::read_to_string(workdir.path().join("steward-report.md")).unwrap();
    assert!(report.contains("# Documentation Steward Report"));
    assert!(report.contains("stub analysis output"));
    assert!(report.contains("## Next Actions"));

    // Drift detection re-ran the sync as a child process of this binary.
    assert!(workdir.path().join("sync-report.md").exists());
    assert!(workdir.path().join("docs-upstream/overview.md").exists());
}

#[test]
fn monitor_prints_the_analysis_content() {
    let workdir = TempDir::new().unwrap();
    let upstream = TempDir::new().unwrap();
    std::fs::write(upstream.path().join("README.md"), "# Upstream").unwrap();
    let agent = stub_agent(workdir.path());
    write_config(workdir.path(), upstream.path(), &agent.display().to_string());

    Command::cargo_bin("docsteward")
        .unwrap()
        .current_dir(workdir.path())
        .arg("monitor")
        .assert()
        .success()
        .stdout(predicate::str::contains("stub analysis output"));
}

#[test]
fn silent_agent_prints_error_placeholder_and_exits_zero() {
    let workdir = TempDir::new().unwrap();
    let upstream = TempDir::new().unwrap();
    write_config(workdir.path(), upstream.path(), "true");

    Command::cargo_bin("docsteward")
        .unwrap()
        .current_dir(workdir.path())
        .arg("quality")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Empty response"));
}

#[test]
fn full_cycle_with_broken_agent_still_writes_the_report() {
    let workdir = TempDir::new().unwrap();
    let upstream = TempDir::new().unwrap();
    std::fs::write(upstream.path().join("README.md"), "# Upstream").unwrap();
    write_config(workdir.path(), upstream.path(), "docsteward-no-such-agent");

    Command::cargo_bin("docsteward")
        .unwrap()
        .current_dir(workdir.path())
        .arg("full")
        .assert()
        .success();

    let report = std::fs::read_to_string(workdir.path().join("steward-report.md")).unwrap();
    assert!(report.contains("Error:"));
    assert!(report.contains("## Synchronization Status"));
}
