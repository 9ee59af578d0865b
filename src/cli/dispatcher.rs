use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::{
    cli::{Cli, handlers},
    core::execution_gate::RunMode,
    state::AppState,
};

/// What every handler gets besides its own arguments.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// The directory shemul was started from.
    pub cwd: PathBuf,
    pub mode: RunMode,
}

impl Invocation {
    /// Discovers the project from `cwd` and loads both configuration scopes.
    pub fn load_state(&self) -> Result<AppState> {
        AppState::load(&self.cwd).context(t!("error.loading_config"))
    }
}

/// A built-in subcommand and its handler. The handler's return value is the exit code.
struct CommandDefinition {
    name: &'static str,
    handler: fn(Vec<String>, &Invocation) -> Result<i32>,
}

/// The built-in subcommands. Any other name is looked up in the configuration.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "init",
        handler: handlers::init::handle,
    },
    CommandDefinition {
        name: "ls",
        handler: handlers::ls::handle,
    },
    CommandDefinition {
        name: "info",
        handler: handlers::info::handle,
    },
    CommandDefinition {
        name: "help",
        handler: handlers::help::handle,
    },
    CommandDefinition {
        name: "doctor",
        handler: handlers::doctor::handle,
    },
    CommandDefinition {
        name: "schema",
        handler: handlers::schema::handle,
    },
    CommandDefinition {
        name: "_complete",
        handler: handlers::complete::handle,
    },
];

fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY.iter().find(|cmd| cmd.name == name)
}

/// Routes a parsed command line to its handler and returns the process exit code.
pub fn dispatch(cli: Cli) -> Result<i32> {
    log::debug!("Dispatching: {:?}", cli);

    let invocation = Invocation {
        cwd: std::env::current_dir().context(t!("error.current_dir"))?,
        mode: RunMode {
            dry: cli.dry,
            trace: cli.trace,
        },
    };

    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    let mut args = cli.args.into_iter();
    let name = match args.next() {
        Some(name) if !cli.help => name,
        _ => return handlers::help::handle(Vec::new(), &invocation),
    };
    let rest: Vec<String> = args.collect();

    match find_command(&name) {
        Some(command) => (command.handler)(rest, &invocation),
        None => handlers::run::handle(name, rest, &invocation),
    }
}
