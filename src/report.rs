//! Post-install component tallies
//!
//! Read-only: counts what is present under the target tree by listing
//! directories, with no interpretation of file content. Absent directories
//! count as zero, so a report never fails on a fresh or partial tree.

use std::fs;
use std::path::Path;

use console::Style;
use serde::Serialize;
use walkdir::WalkDir;

/// Component counts for one target tree.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct KitReport {
    pub agents: usize,
    pub commands: usize,
    pub skills: usize,
    pub hooks: usize,
}

impl KitReport {
    pub fn gather(target_root: &Path) -> Self {
        Self {
            agents: count_markdown(&target_root.join("agents")),
            commands: count_markdown(&target_root.join("commands")),
            skills: count_subdirs(&target_root.join("skills")),
            hooks: count_files(&target_root.join("hooks")),
        }
    }

    pub fn display(&self) {
        let label = Style::new().bold();
        println!("{}", label.apply_to("Components:"));
        println!("  {} {}", label.apply_to("agents:"), self.agents);
        println!("  {} {}", label.apply_to("commands:"), self.commands);
        println!("  {} {}", label.apply_to("skills:"), self.skills);
        println!("  {} {}", label.apply_to("hooks:"), self.hooks);
    }
}

/// Markdown files anywhere under `dir`; commands and agents may be grouped
/// into nested namespace directories.
fn count_markdown(dir: &Path) -> usize {
    count_matching(dir, |path| {
        path.extension().is_some_and(|ext| ext == "md")
    })
}

fn count_files(dir: &Path) -> usize {
    count_matching(dir, |_| true)
}

fn count_matching(dir: &Path, keep: impl Fn(&Path) -> bool) -> usize {
    if !dir.is_dir() {
        return 0;
    }
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| keep(entry.path()))
        .count()
}

/// Immediate subdirectories only; each skill occupies one directory.
fn count_subdirs(dir: &Path) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };
    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .count()
}
