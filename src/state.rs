// src/state.rs

use crate::core::config_loader::{self, Config, ConfigError};
use crate::core::{config_merger, context_resolver, paths};
use crate::models::ProjectContext;
use std::path::{Path, PathBuf};

/// Everything one invocation knows about its configuration.
/// Built once per process and passed down by reference.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The nearest project, if any.
    pub context: Option<ProjectContext>,
    pub project_config: Option<Config>,
    pub global_config: Option<Config>,
    /// Where the global config lives (or would live). `None` if it can't be located.
    pub global_path: Option<PathBuf>,
    /// Project merged over global.
    pub config: Option<Config>,
}

impl AppState {
    /// Discovers the project from `start` and loads both scopes.
    pub fn load(start: &Path) -> Result<Self, ConfigError> {
        let global_path = match paths::global_config_path() {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        };
        Self::load_with(start, global_path)
    }

    /// Like [`AppState::load`] with an explicit global config location.
    ///
    /// # Errors
    /// Any failure to load the project config, and a schema violation in the global
    /// config. A global config that is missing, unreadable or not JSON is skipped.
    pub fn load_with(start: &Path, global_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let context = context_resolver::discover(start);

        let project_config = context
            .as_ref()
            .map(|ctx| config_loader::load(&ctx.config_path))
            .transpose()?;

        let global_config = match global_path.as_deref() {
            Some(path) => load_global(path)?,
            None => None,
        };

        let config = config_merger::merge(project_config.clone(), global_config.clone());

        Ok(Self {
            context,
            project_config,
            global_config,
            global_path,
            config,
        })
    }

    /// Names of the scopes that contributed to the effective config, project first.
    pub fn active_scopes(&self) -> Vec<&'static str> {
        let mut scopes = Vec::new();
        if self.project_config.is_some() {
            scopes.push("project");
        }
        if self.global_config.is_some() {
            scopes.push("global");
        }
        scopes
    }
}

fn load_global(path: &Path) -> Result<Option<Config>, ConfigError> {
    if !path.exists() {
        log::debug!("No global config at '{}'", path.display());
        return Ok(None);
    }

    match config_loader::load(path) {
        Ok(config) => Ok(Some(config)),
        Err(e) if e.is_unreadable() => {
            log::warn!("Ignoring global config: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CONFIG_FILENAME;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _temp: TempDir,
        project: PathBuf,
        global: PathBuf,
    }

    fn fixture() -> Fixture {
        let temp = tempfile::tempdir().unwrap();
        let project = temp.path().join("project");
        fs::create_dir_all(&project).unwrap();
        let global = temp.path().join("global").join(CONFIG_FILENAME);
        Fixture {
            _temp: temp,
            project,
            global,
        }
    }

    #[test]
    fn test_no_config_anywhere() {
        let f = fixture();
        let state = AppState::load_with(&f.project, Some(f.global.clone())).unwrap();
        assert!(state.config.is_none());
        assert!(state.active_scopes().is_empty());
    }

    #[test]
    fn test_project_merged_over_global() {
        let f = fixture();
        fs::write(
            f.project.join(CONFIG_FILENAME),
            r#"{"commands": {"hello": {"run": "echo project"}}}"#,
        )
        .unwrap();
        fs::create_dir_all(f.global.parent().unwrap()).unwrap();
        fs::write(
            &f.global,
            r#"{"commands": {"hello": {"run": "echo global"}, "g": {"run": "echo g"}}}"#,
        )
        .unwrap();

        let state = AppState::load_with(&f.project, Some(f.global.clone())).unwrap();
        let config = state.config.as_ref().unwrap();
        assert_eq!(config.command("hello").unwrap().run, "echo project");
        assert!(config.has_command("g"));
        assert_eq!(state.active_scopes(), vec!["project", "global"]);
        assert!(state.context.is_some());
    }

    #[test]
    fn test_malformed_global_is_skipped() {
        let f = fixture();
        fs::create_dir_all(f.global.parent().unwrap()).unwrap();
        fs::write(&f.global, "{ not json").unwrap();

        let state = AppState::load_with(&f.project, Some(f.global.clone())).unwrap();
        assert!(state.global_config.is_none());
    }

    #[test]
    fn test_invalid_global_is_fatal() {
        let f = fixture();
        fs::create_dir_all(f.global.parent().unwrap()).unwrap();
        fs::write(&f.global, r#"{"commands": {"x": {}}}"#).unwrap();

        let err = AppState::load_with(&f.project, Some(f.global.clone())).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_malformed_project_is_fatal() {
        let f = fixture();
        fs::write(f.project.join(CONFIG_FILENAME), "{").unwrap();

        let err = AppState::load_with(&f.project, None).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }
}
