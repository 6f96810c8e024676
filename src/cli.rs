use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zsettings")]
#[command(about = "A settings panel for Linux desktops", version)]
pub struct Cli {
    /// Page file to load instead of the configured one
    #[arg(long, global = true)]
    pub pages: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the settings window (default)
    Show,
    /// Bind every row without opening a window and print the result
    Check {
        /// Only check the page with this id
        #[arg(long)]
        page: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["zsettings"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.pages.is_none());
    }

    #[test]
    fn test_check_with_options() {
        let cli = Cli::try_parse_from([
            "zsettings",
            "check",
            "--page",
            "appearance",
            "--json",
            "--pages",
            "/tmp/pages.toml",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Check {
                page: Some("appearance".to_string()),
                json: true,
            })
        );
        assert_eq!(cli.pages, Some(PathBuf::from("/tmp/pages.toml")));
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(Cli::try_parse_from(["zsettings", "reset"]).is_err());
    }
}
