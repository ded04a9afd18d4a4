//! Command dispatch.
//!
//! Responsibilities:
//! - Load the configuration context for the parsed command.
//! - Route each subcommand to its implementation.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context::ConfigCommandContext;

pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let mut context = ConfigCommandContext::load(&cli)?;

    match cli.command {
        Commands::Get { key, default } => commands::get::run(&context, &key, default.as_deref()),
        Commands::Set { key, value } => commands::set::run(&mut context, &key, &value),
        Commands::Defaults { key, value } => commands::defaults::run(&mut context, &key, &value),
        Commands::Merge { key, defaults } => commands::merge::run(&context, &key, &defaults),
        Commands::Show => commands::show::run(&context),
    }
}
