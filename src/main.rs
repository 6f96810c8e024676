use anyhow::Result;
use clap::Parser;

use zsettings::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    zsettings::app::init_logging();

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => zsettings::app::run(cli.pages),
        Commands::Check { page, json } => {
            zsettings::config::init_config();
            let output = zsettings::check::run_check(cli.pages.as_deref(), page.as_deref(), json)?;
            println!("{}", output.trim_end());
            Ok(())
        }
    }
}
