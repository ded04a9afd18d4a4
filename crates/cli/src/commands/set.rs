//! `dotcfg set`: write a value at a key and save the file.

use anyhow::Result;
use dotcfg_config::parse_lenient;

use crate::config_context::ConfigCommandContext;

pub fn run(context: &mut ConfigCommandContext, key: &str, value: &str) -> Result<()> {
    context.store_mut().set(key, parse_lenient(value))?;
    context.save()?;

    tracing::info!(key, path = %context.path().display(), "Value written");
    Ok(())
}
