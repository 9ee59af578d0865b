// src/system/executor.rs

use crate::core::execution_gate::ShellRunner;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command as StdCommand, ExitStatus, Output, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
    #[error("Command '{0}' was terminated without an exit code.")]
    NoExitCode(String),
}

/// Runs command strings through the platform shell in the current directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl ShellRunner for SystemShell {
    fn run(&mut self, command: &str) -> Result<i32, ExecutionError> {
        execute_command(command, None)
    }
}

/// `sh -c <line>` on Unix, `cmd /C <line>` on Windows.
fn shell_command(command_line: &str) -> StdCommand {
    let mut command = if cfg!(target_os = "windows") {
        let mut c = StdCommand::new("cmd");
        c.arg("/C");
        c
    } else {
        let mut c = StdCommand::new("sh");
        c.arg("-c");
        c
    };
    command.arg(command_line);
    command
}

/// Executes `command_line` through the shell with inherited stdio and waits for it.
///
/// Returns the process exit code. On Unix a process killed by a signal reports
/// `128 + signal`. An empty command succeeds without spawning anything.
pub fn execute_command(command_line: &str, cwd: Option<&Path>) -> Result<i32, ExecutionError> {
    if command_line.trim().is_empty() {
        return Ok(0);
    }

    let mut command = shell_command(command_line);
    command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    if let Some(cwd) = cwd {
        command.current_dir(dunce::simplified(cwd));
    }

    log::debug!("Spawning: {}", command_line);
    let status = command
        .status()
        .map_err(|e| ExecutionError::CommandFailed(command_line.to_string(), e))?;

    exit_code_of(status).ok_or_else(|| ExecutionError::NoExitCode(command_line.to_string()))
}

/// Runs a program directly with captured output. Used for short probes like `docker info`.
/// A program that isn't installed is reported as `Ok(None)`.
pub fn probe(program: &str, args: &[&str]) -> Result<Option<Output>, ExecutionError> {
    let result = StdCommand::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output();

    match result {
        Ok(output) => Ok(Some(output)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("Probe '{}' not found", program);
            Ok(None)
        }
        Err(e) => Err(ExecutionError::CommandFailed(
            format!("{} {}", program, args.join(" ")),
            e,
        )),
    }
}

#[cfg(unix)]
fn exit_code_of(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
}

#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> Option<i32> {
    status.code()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_succeeds_without_spawning() {
        assert_eq!(execute_command("   ", None).unwrap(), 0);
    }

    #[test]
    fn test_exit_code_is_returned() {
        assert_eq!(execute_command("exit 0", None).unwrap(), 0);
        assert_eq!(execute_command("exit 7", None).unwrap(), 7);
    }

    #[test]
    fn test_shell_features_are_available() {
        let temp = tempfile::tempdir().unwrap();
        let code = execute_command("echo hi > out.txt && test -f out.txt", Some(temp.path())).unwrap();
        assert_eq!(code, 0);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("out.txt")).unwrap(),
            "hi\n"
        );
    }

    #[test]
    fn test_signal_termination_maps_to_128_plus_signal() {
        assert_eq!(execute_command("kill -TERM $$", None).unwrap(), 128 + 15);
    }

    #[test]
    fn test_probe_missing_program_is_none() {
        let output = probe("shemul-definitely-not-installed", &["--version"]).unwrap();
        assert!(output.is_none());
    }

    #[test]
    fn test_probe_captures_output() {
        let output = probe("sh", &["-c", "echo probed"]).unwrap().unwrap();
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "probed\n");
    }
}
