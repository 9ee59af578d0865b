use crate::cli::{dispatcher::Invocation, handlers};
use anyhow::Result;

/// Lists the effective commands grouped by group, both sorted.
pub fn handle(_args: Vec<String>, invocation: &Invocation) -> Result<i32> {
    let state = invocation.load_state()?;
    let Some(config) = state.config.as_ref() else {
        return handlers::help::show_full_help(&state);
    };

    let rows: Vec<Vec<String>> = config
        .grouped_commands()
        .into_iter()
        .flat_map(|(group, names)| {
            names
                .into_iter()
                .map(move |name| vec![group.clone(), name])
        })
        .collect();

    handlers::commons::table(
        t!("ls.title"),
        &[t!("ls.col_group"), t!("ls.col_command")],
        &rows,
    );
    Ok(0)
}
