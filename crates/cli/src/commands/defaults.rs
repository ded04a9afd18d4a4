//! `dotcfg defaults`: write a value only if the key is absent.

use anyhow::Result;
use dotcfg_config::parse_lenient;

use crate::config_context::ConfigCommandContext;

pub fn run(context: &mut ConfigCommandContext, key: &str, value: &str) -> Result<()> {
    if context.store().has(key) {
        tracing::info!(key, "Key already set, leaving file unchanged");
        return Ok(());
    }

    context.store_mut().defaults(key, parse_lenient(value))?;
    context.save()?;

    tracing::info!(key, path = %context.path().display(), "Default written");
    Ok(())
}
