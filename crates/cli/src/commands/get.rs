//! `dotcfg get`: print the value stored at a key.

use anyhow::Result;
use dotcfg_config::parse_lenient;

use super::{print_json, validate_key};
use crate::config_context::ConfigCommandContext;
use crate::error::CliError;

pub fn run(context: &ConfigCommandContext, key: &str, default: Option<&str>) -> Result<()> {
    validate_key(key)?;

    let value = match (context.store().get(key), default) {
        (Some(value), _) => value.clone(),
        (None, Some(raw)) => parse_lenient(raw),
        (None, None) => return Err(CliError::KeyNotFound(key.to_string()).into()),
    };

    print_json(&value)
}
