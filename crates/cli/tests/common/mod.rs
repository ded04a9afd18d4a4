//! Shared test utilities for dotcfg integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Create temporary config files.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns a hermetic `dotcfg` command pointed at `config_path`.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `DOTCFG_*` variables from the host are cleared.
pub fn dotcfg_cmd(config_path: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dotcfg");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("DOTCFG_FILE")
        .env_remove("DOTCFG_ENV_PREFIX")
        .env_remove("RUST_LOG");

    cmd.arg("--file").arg(config_path);
    cmd
}

/// Creates a temp dir holding `config.json` with the given contents.
#[allow(dead_code)]
pub fn config_with(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, contents).expect("Failed to write config file");
    (temp_dir, path)
}

/// Creates an empty temp dir and returns the (not yet existing) config path.
#[allow(dead_code)]
pub fn empty_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("config.json");
    (temp_dir, path)
}
