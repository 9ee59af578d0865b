// src/core/config_merger.rs

use crate::{core::config_loader::Config, models::ConfigDocument};
use std::collections::BTreeMap;

/// Combines the project and global scopes into the effective configuration.
///
/// - Neither present: `None`.
/// - One present: returned unchanged.
/// - Both present: `commands`, `vars` and `env` are the global maps overlaid by the
///   project maps, key by key. A project command replaces a global command of the same
///   name wholesale. `name` is the project's unless it is empty. The result carries the
///   project's path; the global path is dropped.
pub fn merge(project: Option<Config>, global: Option<Config>) -> Option<Config> {
    let (project, global) = match (project, global) {
        (None, None) => return None,
        (Some(project), None) => return Some(project),
        (None, Some(global)) => return Some(global),
        (Some(project), Some(global)) => (project, global),
    };

    log::debug!(
        "Merging project config '{}' over global config '{}'",
        project.path().display(),
        global.path().display()
    );

    let project_name = project.name();
    let document = ConfigDocument {
        name: if project_name.is_empty() {
            global.name()
        } else {
            project_name
        },
        commands: overlay(global.commands(), project.commands()),
        vars: overlay(global.vars(), project.vars()),
        env: overlay(global.envs(), project.envs()),
    };

    Some(Config::new(document, project.path()))
}

/// `base` with every entry of `top` written over it.
fn overlay<V>(mut base: BTreeMap<String, V>, top: BTreeMap<String, V>) -> BTreeMap<String, V> {
    base.extend(top);
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommandSpec, Scalar, VarValue};
    use std::path::Path;

    fn config(name: &str, path: &str, commands: &[(&str, &str)], vars: &[(&str, &str)]) -> Config {
        let document = ConfigDocument {
            name: name.to_string(),
            commands: commands
                .iter()
                .map(|(k, run)| (k.to_string(), CommandSpec::new(*run)))
                .collect(),
            vars: vars
                .iter()
                .map(|(k, v)| (k.to_string(), VarValue::Scalar(Scalar::from(*v))))
                .collect(),
            env: BTreeMap::new(),
        };
        Config::new(document, path)
    }

    #[test]
    fn test_identity_laws() {
        let x = config("x", "/p/shemul.json", &[("a", "echo a")], &[]);
        assert!(merge(None, None).is_none());
        assert_eq!(merge(Some(x.clone()), None), Some(x.clone()));
        assert_eq!(merge(None, Some(x.clone())), Some(x));
    }

    #[test]
    fn test_project_command_replaces_global_command_verbatim() {
        let mut project_spec = CommandSpec::new("echo project");
        project_spec.desc = "project wins".to_string();
        let mut global_spec = CommandSpec::new("echo global");
        global_spec.danger = true;
        global_spec.group = "ops".to_string();

        let project = Config::new(
            ConfigDocument {
                commands: BTreeMap::from([("hello".to_string(), project_spec.clone())]),
                ..Default::default()
            },
            "/p/shemul.json",
        );
        let global = Config::new(
            ConfigDocument {
                commands: BTreeMap::from([("hello".to_string(), global_spec)]),
                ..Default::default()
            },
            "/g/shemul.json",
        );

        let merged = merge(Some(project), Some(global)).unwrap();
        // No field-level merge: `danger` and `group` from global do not leak through.
        assert_eq!(merged.command("hello"), Some(project_spec));
    }

    #[test]
    fn test_maps_are_unioned_with_project_winning() {
        let project = config(
            "project",
            "/p/shemul.json",
            &[("hello", "echo project"), ("ponly", "echo ponly")],
            &[("SHARED", "p"), ("P", "1")],
        );
        let global = config(
            "global",
            "/g/shemul.json",
            &[("hello", "echo global"), ("gonly", "echo gonly")],
            &[("SHARED", "g"), ("G", "1")],
        );

        let merged = merge(Some(project), Some(global)).unwrap();

        assert_eq!(merged.command_names(), vec!["gonly", "hello", "ponly"]);
        assert_eq!(merged.command("hello").unwrap().run, "echo project");
        let vars = merged.vars();
        assert_eq!(vars.len(), 3);
        assert_eq!(vars["SHARED"], VarValue::Scalar(Scalar::from("p")));
        assert!(vars.contains_key("G") && vars.contains_key("P"));
    }

    #[test]
    fn test_env_blocks_are_replaced_per_key() {
        let mut project_doc = ConfigDocument::default();
        project_doc.env.insert(
            "prod".to_string(),
            BTreeMap::from([("compose".to_string(), Scalar::from("p.yml"))]),
        );
        let mut global_doc = ConfigDocument::default();
        global_doc.env.insert(
            "prod".to_string(),
            BTreeMap::from([
                ("compose".to_string(), Scalar::from("g.yml")),
                ("extra".to_string(), Scalar::from("x")),
            ]),
        );
        global_doc.env.insert("local".to_string(), BTreeMap::new());

        let merged = merge(
            Some(Config::new(project_doc, "/p/shemul.json")),
            Some(Config::new(global_doc, "/g/shemul.json")),
        )
        .unwrap();

        let envs = merged.envs();
        assert_eq!(envs.len(), 2);
        assert_eq!(envs["prod"].len(), 1);
        assert_eq!(envs["prod"]["compose"], Scalar::from("p.yml"));
    }

    #[test]
    fn test_name_falls_back_to_global_and_path_is_project() {
        let project = config("", "/p/shemul.json", &[], &[]);
        let global = config("global", "/g/shemul.json", &[], &[]);

        let merged = merge(Some(project), Some(global)).unwrap();
        assert_eq!(merged.name(), "global");
        assert_eq!(merged.path(), Path::new("/p/shemul.json"));

        let named = merge(
            Some(config("project", "/p/shemul.json", &[], &[])),
            Some(config("global", "/g/shemul.json", &[], &[])),
        )
        .unwrap();
        assert_eq!(named.name(), "project");
    }
}
