use crate::{cli::dispatcher::Invocation, core::config_loader};
use anyhow::Result;

/// Prints the JSON schema that every `shemul.json` is validated against.
pub fn handle(_args: Vec<String>, _invocation: &Invocation) -> Result<i32> {
    print!("{}", config_loader::schema_text());
    Ok(0)
}
