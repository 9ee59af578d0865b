use clap::Parser;

pub mod args;
pub mod dispatcher;
pub mod handlers;

/// shemul: a project-aware task runner.
///
/// Global flags must come before the command name; everything after it is passed
/// through to the command untouched. `shemul --dry deploy --force` prints the
/// resolved `deploy` command with `--force` appended.
#[derive(Parser, Debug, Default)]
#[command(name = "shemul", author, about, long_about = None)]
// Help and version are rendered by shemul itself, with the configured commands included.
#[command(
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Show version.
    #[arg(short = 'v', long = "version", alias = "v")]
    pub version: bool,

    /// Show help.
    #[arg(short = 'h', long = "help", alias = "h")]
    pub help: bool,

    /// Print the resolved command only.
    #[arg(long)]
    pub dry: bool,

    /// Show the resolved command and its env block before running.
    #[arg(long)]
    pub trace: bool,

    /// The command name followed by its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub args: Vec<String>,
}
