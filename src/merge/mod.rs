//! Additive merge of a staged kit into the target tree
//!
//! This module handles:
//! - The fixed allowlist of kit subdirectories eligible for merging
//! - The work-list traversal reconciling staging against the target
//! - Per-entry policy by kind (file, directory, symlink, other)
//!
//! The engine only ever adds entries. An existing target entry is never
//! inspected beyond an existence check and never modified, so a partially
//! applied merge is safe to leave in place.

mod paths;

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AgentkitError, Result};

/// Top-level kit subdirectories considered for merging. Staged content
/// outside this set is never copied and never inspected.
pub const MERGE_SCOPE: &[&str] = &["agents", "commands", "skills", "hooks"];

/// Outcome counters for one merge traversal.
///
/// Directories are excluded from both counters; `added` and `skipped` track
/// file and symlink entries only.
#[derive(Debug, Default)]
pub struct MergeStats {
    pub added: usize,
    pub skipped: usize,
    /// One message per rejected unsafe entry, for the caller to print.
    pub warnings: Vec<String>,
}

/// Merge every allowlisted subdirectory of `staging` into `target_root`,
/// creating `target_root` and its subdirectories as needed.
///
/// Any directory-create, file-copy or link-create failure aborts the
/// remaining traversal; additions made up to that point stay in place.
pub fn merge_kit(staging: &Path, target_root: &Path) -> Result<MergeStats> {
    let mut stats = MergeStats::default();

    // Explicit work list instead of call recursion, so stack use stays
    // bounded for arbitrarily deep kit trees.
    let mut pending: VecDeque<(PathBuf, PathBuf)> = VecDeque::new();

    for scope in MERGE_SCOPE {
        let source = staging.join(scope);
        // A symlink posing as a scope directory is not traversed; links are
        // leaf actions everywhere, including the top level.
        let Ok(meta) = fs::symlink_metadata(&source) else {
            continue;
        };
        if !meta.is_dir() {
            continue;
        }
        let dest = target_root.join(scope);
        ensure_dir(&dest)?;
        pending.push_back((source, dest));
    }

    while let Some((source_dir, dest_dir)) = pending.pop_front() {
        let entries = fs::read_dir(&source_dir).map_err(|e| AgentkitError::IoError {
            message: format!("failed to list {}: {}", source_dir.display(), e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| AgentkitError::IoError {
                message: format!("failed to list {}: {}", source_dir.display(), e),
            })?;
            let source = entry.path();
            let dest = dest_dir.join(entry.file_name());
            let kind = entry.file_type().map_err(|e| AgentkitError::IoError {
                message: format!("failed to stat {}: {}", source.display(), e),
            })?;

            // A symlink is always a leaf action, never a recursion point, so
            // it is checked before the directory case.
            if kind.is_symlink() {
                merge_link(&source, &dest, target_root, &mut stats)?;
            } else if kind.is_dir() {
                if !entry_exists(&dest) {
                    ensure_dir(&dest)?;
                }
                pending.push_back((source, dest));
            } else if kind.is_file() {
                merge_file(&source, &dest, &mut stats)?;
            }
            // Sockets, fifos and other special kinds are not kit content.
        }
    }

    Ok(stats)
}

/// Copy a regular file unless the destination name is already taken, by an
/// entry of any kind. Pure existence check; contents are never compared.
fn merge_file(source: &Path, dest: &Path, stats: &mut MergeStats) -> Result<()> {
    if entry_exists(dest) {
        stats.skipped += 1;
        return Ok(());
    }
    fs::copy(source, dest).map_err(|e| AgentkitError::FileCopyFailed {
        path: dest.display().to_string(),
        reason: e.to_string(),
    })?;
    stats.added += 1;
    Ok(())
}

/// Recreate a symlink at the destination, but only when its target resolves
/// inside the target root. Escaping links are recorded as warnings and
/// skipped; they never abort the merge.
fn merge_link(source: &Path, dest: &Path, target_root: &Path, stats: &mut MergeStats) -> Result<()> {
    if entry_exists(dest) {
        stats.skipped += 1;
        return Ok(());
    }

    let raw_target = fs::read_link(source).map_err(|e| AgentkitError::IoError {
        message: format!("failed to read link {}: {}", source.display(), e),
    })?;

    let dest_dir = dest.parent().unwrap_or(target_root);
    if !paths::link_stays_inside(&raw_target, dest_dir, target_root) {
        let name = dest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        stats.warnings.push(format!(
            "skipped unsafe symlink '{}' -> '{}': target escapes the install root",
            name,
            raw_target.display()
        ));
        stats.skipped += 1;
        return Ok(());
    }

    create_symlink(&raw_target, dest)?;
    stats.added += 1;
    Ok(())
}

/// Existence check that also sees broken symlinks.
fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| AgentkitError::DirCreateFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(unix)]
fn create_symlink(target: &Path, dest: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, dest).map_err(|e| AgentkitError::LinkCreateFailed {
        path: dest.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(windows)]
fn create_symlink(target: &Path, dest: &Path) -> Result<()> {
    // The kind of link depends on what the target resolves to right now;
    // targets that do not exist yet become file links.
    let resolved = match dest.parent() {
        Some(parent) => parent.join(target),
        None => target.to_path_buf(),
    };
    let result = if resolved.is_dir() {
        std::os::windows::fs::symlink_dir(target, dest)
    } else {
        std::os::windows::fs::symlink_file(target, dest)
    };
    result.map_err(|e| AgentkitError::LinkCreateFailed {
        path: dest.display().to_string(),
        reason: e.to_string(),
    })
}
