//! `dotcfg merge`: print a mapping merged over a set of defaults.
//!
//! The file is never modified.

use anyhow::Result;
use dotcfg_config::Value;

use super::{print_json, validate_key};
use crate::config_context::ConfigCommandContext;
use crate::error::CliError;

pub fn run(context: &ConfigCommandContext, key: &str, defaults: &str) -> Result<()> {
    validate_key(key)?;

    let defaults = match serde_json::from_str::<Value>(defaults) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            return Err(
                CliError::InvalidArgument("defaults must be a JSON object".to_string()).into(),
            );
        }
        Err(e) => {
            return Err(
                CliError::InvalidArgument(format!("defaults are not valid JSON: {e}")).into(),
            );
        }
    };

    print_json(&Value::Object(context.store().merge(key, defaults)))
}
