// src/core/paths.rs

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILENAME, ENV_CONFIG_HOME, ENV_GLOBAL_CONFIG_PATH,
    PLATFORM_CONFIG_DIR_NAME,
};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Could not find the home directory to locate the global config.")]
    HomeDirNotFound,
}

/// The platform families that place the global config differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }
}

/// Returns the path of the global `shemul.json` for the running process.
/// The file may not exist.
pub fn global_config_path() -> Result<PathBuf, PathError> {
    resolve_global_config_path(
        |key| env::var(key).ok(),
        Platform::current(),
        dirs::home_dir(),
    )
}

/// Resolves the global config path from an environment lookup, a platform and a home directory.
///
/// Precedence:
/// 1. `SHEMUL_GLOBAL_CONFIG_PATH` (used as-is, `~` expanded).
/// 2. `SHEMUL_CONFIG_HOME` + `shemul/shemul.json`.
/// 3. The platform default:
///    - Windows: `%APPDATA%` (or `~/AppData/Roaming`) + `Shemul/shemul.json`
///    - macOS: `~/Library/Application Support/Shemul/shemul.json`
///    - other: `$XDG_CONFIG_HOME` (or `~/.config`) + `shemul/shemul.json`
///
/// Empty variables count as unset.
pub fn resolve_global_config_path<F>(
    lookup: F,
    platform: Platform,
    home: Option<PathBuf>,
) -> Result<PathBuf, PathError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(path) = lookup(ENV_GLOBAL_CONFIG_PATH) {
        log::debug!("Global config path overridden by {}", ENV_GLOBAL_CONFIG_PATH);
        return Ok(expand_home(&path, home.as_deref()));
    }

    if let Some(config_home) = lookup(ENV_CONFIG_HOME) {
        return Ok(expand_home(&config_home, home.as_deref())
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILENAME));
    }

    let require_home = || home.clone().ok_or(PathError::HomeDirNotFound);

    let path = match platform {
        Platform::Windows => {
            let base = match lookup("APPDATA") {
                Some(appdata) => expand_home(&appdata, home.as_deref()),
                None => require_home()?.join("AppData").join("Roaming"),
            };
            base.join(PLATFORM_CONFIG_DIR_NAME).join(CONFIG_FILENAME)
        }
        Platform::MacOs => require_home()?
            .join("Library")
            .join("Application Support")
            .join(PLATFORM_CONFIG_DIR_NAME)
            .join(CONFIG_FILENAME),
        Platform::Other => {
            let base = match lookup("XDG_CONFIG_HOME") {
                Some(xdg) => expand_home(&xdg, home.as_deref()),
                None => require_home()?.join(".config"),
            };
            base.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME)
        }
    };

    Ok(path)
}

/// Expands a leading `~` against `home`. Other text is left alone.
fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    let expanded = shellexpand::tilde_with_context(raw, || home.and_then(Path::to_str));
    PathBuf::from(expanded.into_owned())
}
