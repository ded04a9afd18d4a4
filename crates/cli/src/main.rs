//! dotcfg - Command-line access to dot-path configuration files.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Read, write, default-fill and merge keys in a JSON config file.
//! - Print results as JSON on stdout.
//!
//! Does NOT handle:
//! - Store semantics (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout stays machine-readable.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use dotcfg_config::ConfigLoader;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
