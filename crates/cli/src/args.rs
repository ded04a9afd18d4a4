//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `config_context` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dotcfg")]
#[command(about = "dotcfg - Read and edit dot-path keys in JSON config files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  dotcfg set db.host localhost\n  dotcfg get db.port --default 5432\n  dotcfg defaults log.level '\"info\"'\n  dotcfg merge db '{\"pool\": 4}'\n  dotcfg --env-prefix APP show\n"
)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "DOTCFG_FILE",
        default_value = "config.json",
        value_name = "FILE"
    )]
    pub file: PathBuf,

    /// Overlay environment variables named PREFIX__SECTION__KEY when reading
    #[arg(long, global = true, env = "DOTCFG_ENV_PREFIX", value_name = "PREFIX")]
    pub env_prefix: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value stored at a key
    Get {
        /// Dot-delimited key (e.g. db.host)
        key: String,

        /// Value printed when the key is absent (parsed as JSON, else as a string)
        #[arg(long)]
        default: Option<String>,
    },

    /// Write a value at a key
    Set {
        /// Dot-delimited key (e.g. db.host)
        key: String,

        /// Value to write (parsed as JSON, else as a string)
        value: String,
    },

    /// Write a value at a key only if nothing is stored there
    Defaults {
        /// Dot-delimited key (e.g. db.host)
        key: String,

        /// Value to write (parsed as JSON, else as a string)
        value: String,
    },

    /// Print the mapping at a key merged over a JSON object of defaults
    Merge {
        /// Dot-delimited key of the mapping to merge
        key: String,

        /// JSON object of default values
        defaults: String,
    },

    /// Print the whole configuration
    Show,
}

impl Commands {
    /// Whether the command writes the config file.
    pub fn is_write(&self) -> bool {
        matches!(self, Commands::Set { .. } | Commands::Defaults { .. })
    }
}
