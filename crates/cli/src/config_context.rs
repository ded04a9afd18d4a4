//! Configuration context for command execution.
//!
//! Responsibilities:
//! - Load the config file (and, for read commands, the environment overlay) into a store.
//! - Save the store back to the same file after write commands.
//!
//! Does NOT handle:
//! - CLI argument definitions (see `args` module).
//!
//! Invariants:
//! - Write commands never load the environment overlay, so environment
//!   values are not persisted into the file.
//! - A missing file loads as an empty configuration; a corrupt file is an error
//!   and is never overwritten.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dotcfg_config::{ConfigLoader, ConfigStore};

use crate::args::Cli;

pub(crate) struct ConfigCommandContext {
    path: PathBuf,
    store: ConfigStore,
}

impl ConfigCommandContext {
    /// Load the configuration a command operates on.
    pub(crate) fn load(cli: &Cli) -> Result<Self> {
        let mut loader = ConfigLoader::new()
            .with_config_path(cli.file.clone())
            .from_file()
            .with_context(|| format!("Failed to load {}", cli.file.display()))?;

        if let Some(prefix) = &cli.env_prefix {
            if cli.command.is_write() {
                tracing::debug!(prefix = %prefix, "Environment overlay ignored for write command");
            } else {
                loader = loader
                    .with_env_prefix(prefix.clone())
                    .from_env()
                    .context("Failed to load configuration from environment")?;
            }
        }

        let store = loader.build()?;
        Ok(Self {
            path: cli.file.clone(),
            store,
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut ConfigStore {
        &mut self.store
    }

    /// Write the store back to the config file.
    pub(crate) fn save(&self) -> Result<()> {
        self.store
            .save(&self.path)
            .with_context(|| format!("Failed to save {}", self.path.display()))
    }
}
