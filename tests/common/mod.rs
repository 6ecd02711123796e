//! Common test utilities for Agentkit integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A test workspace: a project directory to install into, plus a `kits/`
/// area of git fixture repositories served over the file-URL base override.
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the project directory (the install target's parent)
    pub project: PathBuf,
    kits: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let project = temp.path().join("project");
        let kits = temp.path().join("kits");
        std::fs::create_dir_all(&project).expect("Failed to create project directory");
        std::fs::create_dir_all(&kits).expect("Failed to create kits directory");
        Self {
            temp,
            project,
            kits,
        }
    }

    /// Base URL pointing installs at this workspace's fixture repositories.
    pub fn base_url(&self) -> String {
        format!("file://{}", self.kits.display())
    }

    /// Create a git repository at `kits/<owner>/<name>` holding `files`,
    /// committed so it can be cloned.
    pub fn create_kit_repo(&self, owner: &str, name: &str, files: &[(&str, &str)]) -> PathBuf {
        let repo_path = self.kits.join(owner).join(name);
        std::fs::create_dir_all(&repo_path).expect("Failed to create kit repo directory");

        for (rel, content) in files {
            let file_path = repo_path.join(rel);
            if let Some(parent) = file_path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create parent directory");
            }
            std::fs::write(&file_path, content).expect("Failed to write fixture file");
        }

        git(&repo_path, &["init"]);
        git(&repo_path, &["config", "user.email", "test@example.com"]);
        git(&repo_path, &["config", "user.name", "Test User"]);
        git(&repo_path, &["add", "."]);
        git(&repo_path, &["commit", "-m", "fixture"]);

        repo_path
    }

    /// Write a file under the project directory
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.project.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project directory
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.project.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project directory
    pub fn file_exists(&self, path: &str) -> bool {
        self.project.join(path).exists()
    }
}

fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}
