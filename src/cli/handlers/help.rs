use crate::{
    cli::{args::{HelpArgs, parse_handler_args}, dispatcher::Invocation, handlers::commons},
    core::command_resolver,
    state::AppState,
};
use anyhow::Result;

/// `help` alone prints the full help; `help <name>` describes a command or a group.
pub fn handle(args: Vec<String>, invocation: &Invocation) -> Result<i32> {
    let Some(help_args) = parse_handler_args::<HelpArgs>(&args)? else {
        return Ok(0);
    };
    let state = invocation.load_state()?;

    let (Some(target), Some(config)) = (help_args.target, state.config.as_ref()) else {
        return show_full_help(&state);
    };

    if config.has_command(&target) {
        let resolved = command_resolver::resolve(config, &target)?;
        let body = format!(
            t!("help.command.body"),
            run = resolved.command,
            desc = if resolved.desc.is_empty() { "-" } else { resolved.desc.as_str() },
            group = resolved.group,
            confirm = resolved.confirm,
            danger = resolved.danger
        );
        commons::panel(&format!(t!("help.command.title"), name = target), &body);
        return Ok(0);
    }

    if let Some(names) = config.grouped_commands().remove(&target) {
        let rows: Vec<Vec<String>> = names.into_iter().map(|name| vec![name]).collect();
        commons::table(
            &format!(t!("help.group.title"), name = target),
            &[t!("help.group.col_command")],
            &rows,
        );
        return Ok(0);
    }

    commons::error(&format!(t!("help.error.unknown_target"), name = target));
    Ok(1)
}

/// Full help: usage, global options, built-in commands and the configured commands.
pub fn show_full_help(state: &AppState) -> Result<i32> {
    commons::panel(
        "Shemul",
        &format!(t!("help.about"), version = env!("CARGO_PKG_VERSION")),
    );
    for line in t!("help.usage").lines() {
        commons::info(line);
    }

    let options = [
        ("-h, --h, --help", t!("help.option.help")),
        ("-v, --v, --version", t!("help.option.version")),
        ("--dry", t!("help.option.dry")),
        ("--trace", t!("help.option.trace")),
    ];
    commons::table(
        t!("help.options.title"),
        &[t!("help.col_option"), t!("help.col_description")],
        &to_rows(&options),
    );

    let builtins = [
        ("init <template>", t!("help.builtin.init")),
        ("init -g [template]", t!("help.builtin.init_global")),
        ("ls", t!("help.builtin.ls")),
        ("info", t!("help.builtin.info")),
        ("help [name|group]", t!("help.builtin.help")),
        ("doctor", t!("help.builtin.doctor")),
        ("schema", t!("help.builtin.schema")),
    ];
    commons::table(
        t!("help.builtins.title"),
        &[t!("help.col_command"), t!("help.col_description")],
        &to_rows(&builtins),
    );

    let Some(config) = state.config.as_ref() else {
        commons::warn(t!("help.no_config"));
        return Ok(0);
    };

    let rows: Vec<Vec<String>> = config
        .commands()
        .into_iter()
        .map(|(name, spec)| {
            let desc = spec.desc.trim();
            vec![
                name,
                spec.group.clone(),
                if desc.is_empty() { "-".to_string() } else { desc.to_string() },
            ]
        })
        .collect();
    commons::table(
        t!("help.commands.title"),
        &[t!("help.col_command"), t!("help.col_group"), t!("help.col_description")],
        &rows,
    );
    Ok(0)
}

fn to_rows(pairs: &[(&str, &str)]) -> Vec<Vec<String>> {
    pairs
        .iter()
        .map(|(a, b)| vec![a.to_string(), b.to_string()])
        .collect()
}
