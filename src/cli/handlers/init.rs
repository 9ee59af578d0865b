// src/cli/handlers/init.rs

use crate::{
    cli::{args::{InitArgs, parse_handler_args}, dispatcher::Invocation, handlers::commons},
    constants::CONFIG_FILENAME,
    core::{paths, templates},
    system::editor,
};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Creates a project or global `shemul.json` from a template.
///
/// An existing config is never overwritten without `--force`; it is opened for
/// editing instead.
pub fn handle(args: Vec<String>, invocation: &Invocation) -> Result<i32> {
    let Some(init_args) = parse_handler_args::<InitArgs>(&args)? else {
        return Ok(0);
    };

    if init_args.list {
        print_templates();
        return Ok(0);
    }

    let scope = if init_args.global {
        t!("init.scope.global")
    } else {
        t!("init.scope.project")
    };
    let target = if init_args.global {
        paths::global_config_path().context(t!("error.global_path"))?
    } else {
        invocation.cwd.join(CONFIG_FILENAME)
    };

    if target.exists() && !init_args.force {
        commons::warn(&format!(
            t!("init.already_exists"),
            scope = scope,
            path = target.display()
        ));
        open_for_edit(&target);
        return Ok(0);
    }

    let template_key = if init_args.template.is_empty() {
        if init_args.global {
            templates::NONE_TEMPLATE
        } else {
            print_templates();
            return Ok(0);
        }
    } else {
        let input = init_args.template.join(" ");
        match templates::resolve_template_key(&input) {
            Some(key) => key,
            None => {
                commons::error(&format!(t!("init.unknown_template"), name = input.trim()));
                print_templates();
                return Ok(1);
            }
        }
    };

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!(t!("error.create_dir"), path = parent.display()))?;
    }

    let project_name = if init_args.global {
        "global".to_string()
    } else {
        invocation
            .cwd
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    };

    templates::write_template_file(template_key, &target, &project_name, init_args.force)?;

    commons::success(&format!(
        t!("init.created"),
        scope = scope,
        path = target.display()
    ));
    commons::info(&format!(t!("init.template_used"), key = template_key));
    commons::info(t!("init.next_step"));
    open_for_edit(&target);

    Ok(0)
}

fn open_for_edit(path: &Path) {
    if editor::open_in_editor(path) {
        commons::info(&format!(t!("init.opened"), path = path.display()));
    } else {
        commons::warn(&format!(t!("init.edit_manually"), path = path.display()));
    }
}

fn print_templates() {
    let rows: Vec<Vec<String>> = templates::list_templates()
        .iter()
        .map(|t| {
            let aliases = templates::template_aliases(t.key)
                .iter()
                .take(2)
                .copied()
                .collect::<Vec<_>>()
                .join(", ");
            vec![
                t.key.to_string(),
                t.desc.to_string(),
                if aliases.is_empty() { "-".to_string() } else { aliases },
            ]
        })
        .collect();

    commons::table(
        t!("init.templates.title"),
        &[
            t!("init.templates.col_template"),
            t!("init.templates.col_description"),
            t!("init.templates.col_aliases"),
        ],
        &rows,
    );
    for line in t!("init.usage").lines() {
        commons::info(line);
    }
}
