//! # Config Loader
//!
//! Reads a `shemul.json`, validates it against the embedded JSON schema and
//! exposes it as an immutable, typed [`Config`]. Validation happens once, here,
//! so nothing downstream ever sees a malformed document.

use crate::models::{CommandSpec, ConfigDocument, EnvBlock, VarValue};
use jsonschema::Validator;
use lazy_static::lazy_static;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The schema every configuration file must satisfy. Printed by `shemul schema`.
pub const SCHEMA_TEXT: &str = include_str!("../schema.json");

pub fn schema_text() -> &'static str {
    SCHEMA_TEXT
}

lazy_static! {
    static ref SCHEMA_VALIDATOR: Validator = {
        let schema: Value =
            serde_json::from_str(SCHEMA_TEXT).expect("embedded schema is valid JSON");
        jsonschema::validator_for(&schema).expect("embedded schema compiles")
    };
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Config file '{path}' is not valid JSON: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Config file '{path}' is invalid:\n  - {}", .violations.join("\n  - "))]
    Invalid { path: String, violations: Vec<String> },
}

impl ConfigError {
    /// True for the "cannot read or parse" family, false for schema violations.
    pub fn is_unreadable(&self) -> bool {
        matches!(self, Self::Unreadable { .. } | Self::Malformed { .. })
    }
}

/// A loaded configuration. Accessors hand out copies; the stored document never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    document: ConfigDocument,
    path: PathBuf,
}

impl Config {
    pub fn new(document: ConfigDocument, path: impl Into<PathBuf>) -> Self {
        Self {
            document,
            path: path.into(),
        }
    }

    pub fn name(&self) -> String {
        self.document.name.clone()
    }

    pub fn commands(&self) -> BTreeMap<String, CommandSpec> {
        self.document.commands.clone()
    }

    pub fn vars(&self) -> BTreeMap<String, VarValue> {
        self.document.vars.clone()
    }

    pub fn envs(&self) -> BTreeMap<String, EnvBlock> {
        self.document.env.clone()
    }

    /// The file this configuration was loaded from (the project's, after a merge).
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn command(&self, name: &str) -> Option<CommandSpec> {
        self.document.commands.get(name).cloned()
    }

    pub fn has_command(&self, name: &str) -> bool {
        self.document.commands.contains_key(name)
    }

    /// Command names in sorted order.
    pub fn command_names(&self) -> Vec<String> {
        self.document.commands.keys().cloned().collect()
    }

    /// Command names bucketed by group. Groups and names are both sorted.
    pub fn grouped_commands(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, spec) in &self.document.commands {
            grouped
                .entry(spec.group.clone())
                .or_default()
                .push(name.clone());
        }
        grouped
    }
}

/// Loads and validates a configuration file.
///
/// # Errors
/// - [`ConfigError::Unreadable`] if the file is missing or can't be read.
/// - [`ConfigError::Malformed`] if it isn't JSON.
/// - [`ConfigError::Invalid`] if it violates the schema.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    log::debug!("Loading config from '{}'", path.display());
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;
    parse(&text, path)
}

/// Parses and validates configuration text that came from `path`.
pub fn parse(text: &str, path: &Path) -> Result<Config, ConfigError> {
    let display_path = path.display().to_string();

    let raw: Value = serde_json::from_str(text).map_err(|source| ConfigError::Malformed {
        path: display_path.clone(),
        source,
    })?;

    validate(&raw).map_err(|violations| ConfigError::Invalid {
        path: display_path.clone(),
        violations,
    })?;

    // The schema guarantees the shape; a failure here means the schema and the model disagree.
    let document: ConfigDocument =
        serde_json::from_value(raw).map_err(|e| ConfigError::Invalid {
            path: display_path,
            violations: vec![e.to_string()],
        })?;

    log::trace!(
        "Config '{}' has {} command(s), {} var(s), {} env block(s)",
        path.display(),
        document.commands.len(),
        document.vars.len(),
        document.env.len()
    );

    Ok(Config::new(document, path))
}

/// Checks a raw JSON value against the schema, returning every violation found.
pub fn validate(raw: &Value) -> Result<(), Vec<String>> {
    let violations: Vec<String> = SCHEMA_VALIDATOR
        .iter_errors(raw)
        .map(|err| err.to_string())
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
