// src/core/command_resolver.rs

use crate::core::config_loader::Config;
use crate::core::interpolator::Interpolator;
use crate::core::suggest;
use crate::models::ResolvedCommand;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Unknown command '{name}'")]
    CommandNotFound {
        name: String,
        /// Closest known command names, best first.
        suggestions: Vec<String>,
    },
}

/// Looks up `name` in `config` and expands its run template.
///
/// The command's `env` key selects a block from the configuration's `env` map; a
/// missing block resolves as empty. The selected block is exposed to the template
/// as `{{env.<key>}}` and carried on the result for tracing.
pub fn resolve(config: &Config, name: &str) -> Result<ResolvedCommand, ResolveError> {
    let Some(spec) = config.command(name) else {
        let names = config.command_names();
        let suggestions = suggest::close_matches(name, names.iter().map(String::as_str));
        log::debug!("Command '{}' not found, suggestions: {:?}", name, suggestions);
        return Err(ResolveError::CommandNotFound {
            name: name.to_string(),
            suggestions,
        });
    };

    let env_block: BTreeMap<String, String> = match spec.env.as_deref() {
        Some(key) => {
            let block = config.envs().remove(key).unwrap_or_else(|| {
                log::debug!("Command '{}' selects missing env block '{}'", name, key);
                BTreeMap::new()
            });
            block.into_iter().map(|(k, v)| (k, v.to_string())).collect()
        }
        None => BTreeMap::new(),
    };

    let command = Interpolator::new(&config.vars(), &env_block).expand_string(&spec.run);
    log::debug!("Resolved '{}' to: {}", name, command);

    Ok(ResolvedCommand {
        name: name.to_string(),
        command,
        env: env_block,
        confirm: spec.confirm,
        danger: spec.danger,
        desc: spec.desc,
        group: spec.group,
    })
}
