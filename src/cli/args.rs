// src/cli/args.rs
use anyhow::Result;
use clap::{Parser, error::ErrorKind};

/// Parses a handler's arguments. `Ok(None)` means clap printed help or the version
/// and the handler has nothing left to do.
pub fn parse_handler_args<T: Parser>(args: &[String]) -> Result<Option<T>> {
    match T::try_parse_from(args) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[derive(Parser, Debug, Default)]
#[command(name = "shemul init", no_binary_name = true)] // Handlers receive the arguments after the subcommand name.
pub struct InitArgs {
    /// Template name, key or alias. Several words are joined with spaces.
    pub template: Vec<String>,

    /// Create the global config instead of `./shemul.json`.
    #[arg(short, long)]
    pub global: bool,

    /// Overwrite an existing config.
    #[arg(short, long)]
    pub force: bool,

    /// List the available templates.
    #[arg(short, long)]
    pub list: bool,
}

#[derive(Parser, Debug, Default)]
#[command(name = "shemul help", no_binary_name = true)]
pub struct HelpArgs {
    /// A command or group name.
    pub target: Option<String>,
}

#[derive(Parser, Debug, Default)]
#[command(name = "shemul _complete", no_binary_name = true, disable_help_flag = true)]
pub struct CompleteArgs {
    /// The words typed so far.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub words: Vec<String>,
}
