//! Status command tests

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn agentkit_cmd(workspace: &common::TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("agentkit").unwrap();
    cmd.env_remove("AGENTKIT_DIR");
    cmd.current_dir(&workspace.project);
    cmd
}

#[test]
fn test_status_on_missing_target_reports_zeros() {
    let workspace = common::TestWorkspace::new();

    agentkit_cmd(&workspace)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("agents: 0"))
        .stdout(predicate::str::contains("skills: 0"));
}

#[test]
fn test_status_counts_installed_components() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(".claude/agents/a.md", "a");
    workspace.write_file(".claude/agents/b.md", "b");
    workspace.write_file(".claude/commands/group/go.md", "go");
    workspace.write_file(".claude/skills/one/SKILL.md", "s");
    workspace.write_file(".claude/skills/two/SKILL.md", "s");
    workspace.write_file(".claude/hooks/pre.sh", "#!/bin/sh");

    agentkit_cmd(&workspace)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("agents: 2"))
        .stdout(predicate::str::contains("commands: 1"))
        .stdout(predicate::str::contains("skills: 2"))
        .stdout(predicate::str::contains("hooks: 1"));
}

#[test]
fn test_status_json_output() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(".claude/agents/a.md", "a");

    let output = agentkit_cmd(&workspace)
        .args(["status", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value =
        serde_json::from_slice(&output).expect("status --json must print valid JSON");
    assert_eq!(report["agents"], 1);
    assert_eq!(report["skills"], 0);
}

#[test]
fn test_status_with_dir_flag() {
    let workspace = common::TestWorkspace::new();
    let other = workspace.temp.path().join("elsewhere");
    std::fs::create_dir_all(other.join(".claude/hooks")).unwrap();
    std::fs::write(other.join(".claude/hooks/h.sh"), "hook").unwrap();

    agentkit_cmd(&workspace)
        .arg("status")
        .arg("-d")
        .arg(&other)
        .assert()
        .success()
        .stdout(predicate::str::contains("hooks: 1"));
}
