// src/models.rs

use crate::constants::DEFAULT_GROUP;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

// --- `shemul.json` MODELS (What is read from a configuration file) ---

/// A leaf value in `vars` or in an environment block.
/// Substituted into templates in its string form.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
            Self::Flag(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A `vars` entry: either a plain value (`{{KEY}}`) or a one-level table (`{{KEY.sub}}`).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum VarValue {
    Scalar(Scalar),
    Table(BTreeMap<String, Scalar>),
}

/// A named environment block under the top-level `env` key.
pub type EnvBlock = BTreeMap<String, Scalar>;

fn default_group() -> String {
    DEFAULT_GROUP.to_string()
}

/// One entry of the `commands` map.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CommandSpec {
    /// Shell template, e.g. `docker compose -f {{env.compose}} up -d`.
    pub run: String,
    /// Key into the configuration's `env` map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    #[serde(default)]
    pub confirm: bool,
    #[serde(default)]
    pub danger: bool,
    #[serde(default)]
    pub desc: String,
    #[serde(default = "default_group")]
    pub group: String,
}

impl CommandSpec {
    /// A plain command with default metadata.
    pub fn new(run: impl Into<String>) -> Self {
        Self {
            run: run.into(),
            env: None,
            confirm: false,
            danger: false,
            desc: String::new(),
            group: default_group(),
        }
    }
}

/// The typed form of a validated `shemul.json`.
/// Unknown top-level keys (`$schema`, `version`, `runtime`, ...) are ignored.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub commands: BTreeMap<String, CommandSpec>,
    #[serde(default)]
    pub vars: BTreeMap<String, VarValue>,
    #[serde(default)]
    pub env: BTreeMap<String, EnvBlock>,
}

// --- RUNTIME MODELS ---

/// A command after template substitution, ready to hand to the execution gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    pub name: String,
    pub command: String,
    /// The selected environment block, rendered to strings. Empty when none was selected.
    pub env: BTreeMap<String, String>,
    pub confirm: bool,
    pub danger: bool,
    pub desc: String,
    pub group: String,
}

impl ResolvedCommand {
    /// Returns a copy with `args` appended to the command, space-joined.
    /// `self` is left untouched.
    pub fn with_args(&self, args: &[String]) -> Self {
        let mut extended = self.clone();
        if !args.is_empty() {
            extended.command = format!("{} {}", self.command, args.join(" "));
        }
        extended
    }
}

/// Advisory classification of a project root, based on marker files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Docker,
    Node,
    Python,
    Mixed,
    Unknown,
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Docker => "docker",
            Self::Node => "node",
            Self::Python => "python",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Where the nearest project configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub project_type: ProjectType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_spec_defaults() {
        let spec: CommandSpec = serde_json::from_str(r#"{"run": "npm test"}"#).unwrap();
        assert_eq!(spec, CommandSpec::new("npm test"));
        assert_eq!(spec.group, "core");
        assert!(!spec.confirm && !spec.danger);
    }

    #[test]
    fn test_var_values_keep_their_shape() {
        let vars: BTreeMap<String, VarValue> =
            serde_json::from_str(r#"{"API": "api", "PORT": 8000, "db": {"host": "localhost"}}"#)
                .unwrap();
        assert_eq!(vars["API"], VarValue::Scalar(Scalar::from("api")));
        assert!(matches!(&vars["PORT"], VarValue::Scalar(s) if s.to_string() == "8000"));
        assert!(matches!(&vars["db"], VarValue::Table(t) if t["host"].to_string() == "localhost"));
    }

    #[test]
    fn test_with_args_does_not_mutate_original() {
        let original = ResolvedCommand {
            name: "test".to_string(),
            command: "npm test".to_string(),
            env: BTreeMap::new(),
            confirm: true,
            danger: false,
            desc: "Run tests".to_string(),
            group: "quality".to_string(),
        };

        let extended = original.with_args(&["--flag".to_string()]);

        assert_eq!(extended.command, "npm test --flag");
        assert_eq!(original.command, "npm test");
        assert_eq!(extended.confirm, original.confirm);
        assert_eq!(extended.group, original.group);
        assert_eq!(original.with_args(&[]), original);
    }
}
