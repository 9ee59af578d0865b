// src/constants.rs

/// The name of the configuration file, for both the project and the global scope.
pub const CONFIG_FILENAME: &str = "shemul.json";

/// Sub-directory appended to a config home (`SHEMUL_CONFIG_HOME`, `XDG_CONFIG_HOME`, `~/.config`).
pub const CONFIG_DIR_NAME: &str = "shemul";

/// Sub-directory used under the Windows and macOS application data roots.
pub const PLATFORM_CONFIG_DIR_NAME: &str = "Shemul";

/// Full path override for the global configuration file.
pub const ENV_GLOBAL_CONFIG_PATH: &str = "SHEMUL_GLOBAL_CONFIG_PATH";

/// Directory override for the global configuration (`<dir>/shemul/shemul.json`).
pub const ENV_CONFIG_HOME: &str = "SHEMUL_CONFIG_HOME";

/// Editor overrides, checked in this order.
pub const EDITOR_ENV_VARS: &[&str] = &["SHEMUL_EDITOR", "VISUAL", "EDITOR"];

/// Placeholder replaced with the target path inside an editor command.
pub const EDITOR_FILE_PLACEHOLDER: &str = "{file}";

/// `$schema` URL written into generated configuration files.
pub const SCHEMA_URL: &str = "https://shemul.dev/schema.json";

/// Group assigned to commands that don't declare one.
pub const DEFAULT_GROUP: &str = "core";

/// Built-in subcommand names, used for dispatch and shell completion.
pub const BUILTIN_COMMANDS: &[&str] = &["init", "ls", "info", "help", "doctor", "schema", "_complete"];

/// Marker files probed in a project root to classify it.
pub const DOCKER_MARKERS: &[&str] = &["docker-compose.yml", "compose.yml"];
pub const NODE_MARKERS: &[&str] = &["package.json"];
pub const PYTHON_MARKERS: &[&str] = &["pyproject.toml", "requirements.txt"];
