//! Install command implementation
//!
//! The installation pipeline:
//! 1. Validate the kit locator (a malformed one fails before any I/O)
//! 2. Stage: clone the kit into a unique temp directory under a deadline
//! 3. Merge allowlisted kit directories additively into the target tree
//! 4. Remove staging, print skipped-entry warnings and the summary
//!
//! Staging is removed on every path out of this function; on the success
//! path a removal failure is reported as a warning rather than failing an
//! install that already happened.

use std::path::PathBuf;
use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::InstallArgs;
use crate::error::Result;
use crate::fetch::{self, DEFAULT_TIMEOUT_SECS, Staging};
use crate::locator::KitLocator;
use crate::merge::{self, MergeStats};
use crate::report::KitReport;

pub fn run(dir: Option<PathBuf>, user: bool, verbose: bool, args: InstallArgs) -> Result<()> {
    let locator: KitLocator = args.source.parse()?;
    let display_name = args.name.unwrap_or_else(|| locator.to_string());
    let timeout = Duration::from_secs(args.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS));
    let target_root = super::resolve_target_root(dir, user)?;

    let staging = Staging::create(&locator)?;
    if verbose {
        println!("Staging at {}", staging.path().display());
        println!("Installing into {}", target_root.display());
    }

    let spinner = fetch_spinner(&display_name);
    if let Err(e) = fetch::fetch(&locator, staging.path(), timeout) {
        spinner.finish_and_clear();
        remove_staging(staging);
        return Err(e);
    }
    spinner.finish_and_clear();

    let stats = match merge::merge_kit(staging.path(), &target_root) {
        Ok(stats) => stats,
        Err(e) => {
            remove_staging(staging);
            return Err(e);
        }
    };
    remove_staging(staging);

    for warning in &stats.warnings {
        super::warn(warning);
    }
    print_summary(&display_name, &stats);
    KitReport::gather(&target_root).display();
    Ok(())
}

/// Unconditional cleanup step. A removal failure never masks the install
/// outcome; the leaked path is named so the operator can delete it.
fn remove_staging(staging: Staging) {
    let path = staging.path().display().to_string();
    if let Err(e) = staging.cleanup() {
        super::warn(&format!("failed to remove staging directory {}: {}", path, e));
    }
}

fn fetch_spinner(name: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Fetching {}...", name));
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn print_summary(name: &str, stats: &MergeStats) {
    println!(
        "{} {}: {} added, {} skipped (already present)",
        Style::new().green().bold().apply_to("Installed"),
        Style::new().bold().apply_to(name),
        stats.added,
        stats.skipped
    );
}
