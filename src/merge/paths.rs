//! Containment checks for symlink targets
//!
//! A link recreated in the target tree must not point outside it. The raw
//! link target cannot be canonicalized (it may not exist yet), so it is
//! resolved lexically against the destination directory and the result is
//! compared against the canonical install root.

use std::path::{Component, Path, PathBuf};

/// True when `raw_target`, resolved against `dest_dir`, stays within
/// `target_root` (including the root itself).
///
/// The two existing anchors are canonicalized first; macOS aliases `/var`
/// to `/private/var`, which would otherwise read as an escape.
pub fn link_stays_inside(raw_target: &Path, dest_dir: &Path, target_root: &Path) -> bool {
    let Ok(root) = dunce::canonicalize(target_root) else {
        return false;
    };
    let Ok(base) = dunce::canonicalize(dest_dir) else {
        return false;
    };
    lexical_resolve(&base.join(raw_target)).starts_with(&root)
}

/// Fold `.` and `..` components without touching the filesystem. `..` at
/// the filesystem root stays at the root.
fn lexical_resolve(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
