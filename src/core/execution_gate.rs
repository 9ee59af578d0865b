//! # Execution Gate
//!
//! Decides what happens to a resolved command: trace it, ask for acknowledgement,
//! print it (dry run) or hand it to the shell. The terminal and the shell are
//! reached only through the [`Interaction`] and [`ShellRunner`] traits.

use crate::models::ResolvedCommand;
use crate::system::executor::ExecutionError;

pub const DANGER_PROMPT: &str = "This command is marked as dangerous. Continue?";
pub const CONFIRM_PROMPT: &str = "Are you sure you want to run this command?";

/// Exit code reported when the user declines a prompt.
pub const ABORTED_EXIT_CODE: i32 = 1;

/// Flags from the command line that change how a command is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunMode {
    pub dry: bool,
    pub trace: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// The shell ran and exited with this code.
    Executed { exit_code: i32 },
    /// Dry run: the command that would have been executed.
    DryRun { command: String },
    /// A prompt was declined; the shell was not invoked.
    Aborted,
}

impl GateOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Executed { exit_code } => *exit_code,
            Self::DryRun { .. } => 0,
            Self::Aborted => ABORTED_EXIT_CODE,
        }
    }
}

/// The user-facing side of the gate.
pub trait Interaction {
    /// Shows the command and its environment block before anything else happens.
    fn trace(&mut self, command: &ResolvedCommand);
    /// Prints the command instead of running it.
    fn dry_run(&mut self, command: &ResolvedCommand);
    /// Asks a yes/no question. A prompt that can't be shown answers `false`.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Runs a command string to completion and reports its exit code.
pub trait ShellRunner {
    fn run(&mut self, command: &str) -> Result<i32, ExecutionError>;
}

pub struct ExecutionGate<'a, I: Interaction, S: ShellRunner> {
    interaction: &'a mut I,
    shell: &'a mut S,
}

impl<'a, I: Interaction, S: ShellRunner> ExecutionGate<'a, I, S> {
    pub fn new(interaction: &'a mut I, shell: &'a mut S) -> Self {
        Self { interaction, shell }
    }

    /// Applies trace, dry-run and the danger/confirm prompts, then runs the command.
    ///
    /// A dry run never prompts. When both flags are set only the danger prompt is shown.
    pub fn run(
        &mut self,
        command: &ResolvedCommand,
        mode: RunMode,
    ) -> Result<GateOutcome, ExecutionError> {
        if mode.trace {
            self.interaction.trace(command);
        }

        if mode.dry {
            log::debug!("Dry run for '{}'", command.name);
            self.interaction.dry_run(command);
            return Ok(GateOutcome::DryRun {
                command: command.command.clone(),
            });
        }

        let prompt = if command.danger {
            Some(DANGER_PROMPT)
        } else if command.confirm {
            Some(CONFIRM_PROMPT)
        } else {
            None
        };

        if let Some(prompt) = prompt {
            if !self.interaction.confirm(prompt) {
                log::debug!("'{}' was not acknowledged, aborting", command.name);
                return Ok(GateOutcome::Aborted);
            }
        }

        let exit_code = self.shell.run(&command.command)?;
        log::debug!("'{}' exited with code {}", command.name, exit_code);
        Ok(GateOutcome::Executed { exit_code })
    }
}
