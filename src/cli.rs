//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - status: Status command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod status;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use status::StatusArgs;

/// Agentkit - additive installer for AI workflow kits
///
/// Fetch a kit repository and install its agents, commands, skills and hooks
/// into a local .claude directory without ever touching existing files.
#[derive(Parser, Debug)]
#[command(
    name = "agentkit",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Additive installer for AI workflow kits",
    long_about = "Agentkit fetches an AI workflow kit (a repository of agents, commands, skills \
                  and hooks) and merges it into a local .claude directory. The merge only ever \
                  adds files: anything already present is left untouched.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  agentkit install CloudAI-X/claude-workflow   \x1b[90m# Install a kit from GitHub\x1b[0m\n   \
                  agentkit install owner/kit -d ~/project      \x1b[90m# Install into another project\x1b[0m\n   \
                  agentkit install owner/kit --user            \x1b[90m# Install into ~/.claude\x1b[0m\n   \
                  agentkit status                              \x1b[90m# Show installed component counts\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Directory containing the .claude target tree (defaults to the current directory)
    #[arg(long, short = 'd', global = true, env = "AGENTKIT_DIR")]
    pub dir: Option<PathBuf>,

    /// Target the home directory's .claude tree instead
    #[arg(long, short = 'u', global = true, conflicts_with = "dir")]
    pub user: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a kit and merge it into the target tree
    Install(InstallArgs),

    /// Show component counts for the target tree
    Status(StatusArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
