use crate::{
    cli::{dispatcher::Invocation, handlers::commons},
    core::{
        command_resolver::{self, ResolveError},
        execution_gate::{ExecutionGate, GateOutcome},
    },
    system::executor::SystemShell,
};
use anyhow::{Context, Result};

/// Resolves `name` from the effective configuration and runs it with `args` appended.
/// Returns the command's exit code, or 1 when it is unknown or declined.
pub fn handle(name: String, args: Vec<String>, invocation: &Invocation) -> Result<i32> {
    let state = invocation.load_state()?;

    let Some(config) = state.config.as_ref() else {
        commons::error(t!("run.error.no_config"));
        return Ok(1);
    };

    let resolved = match command_resolver::resolve(config, &name) {
        Ok(resolved) => resolved,
        Err(ResolveError::CommandNotFound { name, suggestions }) => {
            commons::error(&format!(t!("run.error.unknown_command"), name = name));
            if !suggestions.is_empty() {
                commons::info(t!("run.did_you_mean"));
                for suggestion in &suggestions {
                    commons::info(&format!("  {}", suggestion));
                }
            }
            if state.global_config.is_none() {
                commons::info(t!("run.tip.init_global"));
            }
            return Ok(1);
        }
    };

    let command = resolved.with_args(&args);
    let mut interaction = commons::ConsoleInteraction;
    let mut shell = SystemShell;

    let outcome = ExecutionGate::new(&mut interaction, &mut shell)
        .run(&command, invocation.mode)
        .with_context(|| format!(t!("run.error.execution"), name = command.name))?;

    match &outcome {
        GateOutcome::Executed { exit_code: 0 } => commons::success(t!("run.completed")),
        GateOutcome::Executed { exit_code } => {
            commons::error(&format!(t!("run.failed"), code = exit_code));
        }
        GateOutcome::Aborted => commons::warn(t!("run.aborted")),
        GateOutcome::DryRun { .. } => {}
    }

    Ok(outcome.exit_code())
}
