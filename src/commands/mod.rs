//! Command implementations

pub mod completions;
pub mod install;
pub mod status;
pub mod version;

use std::path::PathBuf;

use crate::error::{AgentkitError, Result};

/// Name of the target tree directory under the chosen root.
pub const TARGET_DIR_NAME: &str = ".claude";

/// Resolve the directory whose `.claude` tree is the install target.
///
/// `--user` targets the home directory; otherwise an explicit `--dir` wins
/// over the current directory.
pub fn resolve_target_root(dir: Option<PathBuf>, user: bool) -> Result<PathBuf> {
    let base = if user {
        dirs::home_dir().ok_or_else(|| AgentkitError::IoError {
            message: "could not determine the home directory".to_string(),
        })?
    } else {
        match dir {
            Some(path) => path,
            None => std::env::current_dir().map_err(|e| AgentkitError::IoError {
                message: format!("failed to get current directory: {}", e),
            })?,
        }
    };
    Ok(base.join(TARGET_DIR_NAME))
}

/// Print a styled warning line to stderr.
pub fn warn(message: &str) {
    eprintln!(
        "{} {}",
        console::Style::new().yellow().bold().apply_to("warning:"),
        message
    );
}
