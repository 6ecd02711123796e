use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install a kit from GitHub:\n    agentkit install CloudAI-X/claude-workflow\n\n\
                  Install under a display name:\n    agentkit install owner/kit --name \"My Kit\"\n\n\
                  Allow a slow connection more time:\n    agentkit install owner/kit --timeout 300")]
pub struct InstallArgs {
    /// Kit source in owner/name form
    pub source: String,

    /// Display name used in output (defaults to the locator)
    #[arg(long)]
    pub name: Option<String>,

    /// Fetch timeout in seconds
    #[arg(long, value_name = "SECS", env = "AGENTKIT_TIMEOUT")]
    pub timeout: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_install_defaults() {
        let cli = Cli::try_parse_from(["agentkit", "install", "owner/kit"]).unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.source, "owner/kit");
                assert_eq!(args.name, None);
                assert_eq!(args.timeout, None);
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_install_with_options() {
        let cli = Cli::try_parse_from([
            "agentkit",
            "install",
            "owner/kit",
            "--name",
            "My Kit",
            "--timeout",
            "300",
        ])
        .unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.name, Some("My Kit".to_string()));
                assert_eq!(args.timeout, Some(300));
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_install_rejects_non_numeric_timeout() {
        assert!(
            Cli::try_parse_from(["agentkit", "install", "owner/kit", "--timeout", "soon"])
                .is_err()
        );
    }
}
