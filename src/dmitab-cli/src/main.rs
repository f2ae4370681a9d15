mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dump {
            input,
            sudo,
            type_selector,
            json,
        } => {
            commands::dump::handle(input.as_deref(), sudo, type_selector.as_deref(), json)?;
        }

        Commands::Types => {
            commands::types::handle();
        }
    }

    Ok(())
}
