//! `dotcfg show`: print the whole configuration.

use anyhow::Result;
use dotcfg_config::Value;

use super::print_json;
use crate::config_context::ConfigCommandContext;

pub fn run(context: &ConfigCommandContext) -> Result<()> {
    print_json(&Value::Object(context.store().as_mapping().clone()))
}
