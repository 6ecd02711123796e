//! Agentkit - additive installer for AI workflow kits
//!
//! Fetches a kit repository (agents, commands, skills, hooks) and installs
//! it into a local `.claude` directory without ever touching existing files.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod fetch;
mod locator;
mod merge;
mod report;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(cli.dir, cli.user, cli.verbose, args),
        Commands::Status(args) => commands::status::run(cli.dir, cli.user, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
