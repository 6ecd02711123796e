//! Locator validation tests
//!
//! Malformed locators must fail as configuration errors before any network
//! or filesystem work happens.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn agentkit_cmd(workspace: &common::TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("agentkit").unwrap();
    cmd.env_remove("AGENTKIT_DIR");
    cmd.env_remove("AGENTKIT_TIMEOUT");
    // Deliberately unreachable: validation must reject these inputs before
    // the fetch would ever be attempted.
    cmd.env("AGENTKIT_BASE_URL", "file:///nonexistent-kit-base");
    cmd.current_dir(&workspace.project);
    cmd
}

fn assert_rejected(locator: &str) {
    let workspace = common::TestWorkspace::new();
    agentkit_cmd(&workspace)
        .args(["install", locator])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid kit locator"));
    assert!(!workspace.file_exists(".claude"));
}

#[test]
fn test_rejects_traversal_locator() {
    assert_rejected("evil/../../etc");
}

#[test]
fn test_rejects_extra_path_segments() {
    assert_rejected("a/b/c");
}

#[test]
fn test_rejects_whitespace() {
    assert_rejected("a b/c");
}

#[test]
fn test_rejects_shell_metacharacters() {
    assert_rejected("owner/kit;rm -rf");
    assert_rejected("owner/$(whoami)");
}

#[test]
fn test_rejects_bare_name() {
    assert_rejected("no-owner");
}

#[test]
fn test_well_formed_locator_reaches_the_fetch() {
    // Accepted shape: the failure is a fetch error, not a locator error.
    let workspace = common::TestWorkspace::new();
    agentkit_cmd(&workspace)
        .args(["install", "CloudAI-X/claude-workflow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid kit locator").not());
}
