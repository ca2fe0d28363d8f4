//! dasc CLI - Convert block-structured HTML documents to JSON
//!
//! Command implementations live in [`commands`]; this module wires parsing,
//! logging and configuration together.
use anyhow::Result;
use clap::Parser;
use dasc_core::Config;

mod cli;
mod commands;
pub mod error;
mod utils;

use crate::error::CliError;
use crate::utils::initialize_logging;
use cli::{Cli, Commands};

/// Execute the dasc CLI with the current process arguments.
///
/// # Errors
///
/// Returns an error if configuration loading, input reading, fetching or
/// conversion fails. Errors carry an exit-code category where known.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    let config = load_config(&cli)?;
    execute_command(cli, &config).await
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    Ok(config.map_err(CliError::from)?)
}

async fn execute_command(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Convert { file, compact } => {
            commands::convert(file.as_deref(), compact, config)?;
        },
        Commands::Metadata { file, compact } => {
            commands::metadata(file.as_deref(), compact, config)?;
        },
        Commands::Fetch {
            target,
            origin,
            compact,
        } => {
            commands::fetch(&target, origin.as_deref(), compact, config).await?;
        },
    }

    Ok(())
}
