// src/cli/handlers/info.rs

use crate::cli::{dispatcher::Invocation, handlers::commons};
use anyhow::Result;

/// Shows the detected project, where each config lives and which scopes are active.
pub fn handle(_args: Vec<String>, invocation: &Invocation) -> Result<i32> {
    let state = invocation.load_state()?;
    let none = t!("info.none");

    let mut lines = Vec::new();
    match &state.context {
        Some(context) => {
            lines.push(format!(t!("info.project_root"), value = context.root.display()));
            lines.push(format!(
                t!("info.project_config"),
                value = context.config_path.display()
            ));
            lines.push(format!(t!("info.project_type"), value = context.project_type));
        }
        None => lines.push(format!(t!("info.project_config"), value = none)),
    }

    let global = match (&state.global_config, &state.global_path) {
        (Some(config), _) => config.path().display().to_string(),
        (None, Some(path)) => format!(t!("info.global_missing"), path = path.display()),
        (None, None) => none.to_string(),
    };
    lines.push(format!(t!("info.global_config"), value = global));

    let scopes = state.active_scopes();
    let active = if scopes.is_empty() {
        none.to_string()
    } else {
        scopes.join(" + ")
    };
    lines.push(format!(t!("info.active_scope"), value = active));

    commons::panel(t!("info.title"), &lines.join("\n"));
    Ok(0)
}
