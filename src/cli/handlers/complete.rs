use crate::{
    cli::{args::{CompleteArgs, parse_handler_args}, dispatcher::Invocation},
    core::completion,
};
use anyhow::Result;

/// Prints completion candidates for the words typed so far, one per line.
/// Flags are ignored. Without any config only the built-ins are offered.
pub fn handle(args: Vec<String>, invocation: &Invocation) -> Result<i32> {
    let Some(complete_args) = parse_handler_args::<CompleteArgs>(&args)? else {
        return Ok(0);
    };
    let words: Vec<String> = complete_args
        .words
        .into_iter()
        .filter(|w| !w.starts_with('-'))
        .collect();

    let state = invocation.load_state()?;
    let names = state
        .config
        .as_ref()
        .map(|config| config.command_names())
        .unwrap_or_default();

    for candidate in completion::complete(&words, &completion::candidates(&names)) {
        println!("{}", candidate);
    }
    Ok(0)
}
