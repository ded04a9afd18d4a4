//! CLI command implementations.

pub mod defaults;
pub mod get;
pub mod merge;
pub mod set;
pub mod show;

use anyhow::Result;
use dotcfg_config::{KeyPath, Value};

/// Reject malformed keys up front so reads report them instead of printing "not found".
pub(crate) fn validate_key(key: &str) -> Result<()> {
    KeyPath::parse(key)?;
    Ok(())
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
