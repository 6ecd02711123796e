//! Status command implementation
//!
//! Read-only: reports component counts for the target tree. A missing tree
//! is an empty one, not an error.

use std::path::PathBuf;

use crate::cli::StatusArgs;
use crate::error::{AgentkitError, Result};
use crate::report::KitReport;

pub fn run(dir: Option<PathBuf>, user: bool, args: StatusArgs) -> Result<()> {
    let target_root = super::resolve_target_root(dir, user)?;
    let report = KitReport::gather(&target_root);

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).map_err(|e| AgentkitError::IoError {
                message: format!("failed to serialize report: {}", e),
            })?;
        println!("{}", json);
    } else {
        report.display();
    }
    Ok(())
}
