// src/system/editor.rs

use crate::constants::{EDITOR_ENV_VARS, EDITOR_FILE_PLACEHOLDER};
use crate::core::execution_gate::ShellRunner;
use crate::core::paths::Platform;
use crate::system::executor::SystemShell;
use std::env;
use std::path::Path;
use std::process::{Command as StdCommand, Stdio};

/// Opens `path` in the user's editor, or the platform's default opener when none is set.
/// Returns whether it worked; failures are logged, never fatal.
pub fn open_in_editor(path: &Path) -> bool {
    match configured_editor(|key| env::var(key).ok()) {
        Some(editor) => open_with_editor(&editor, path, &mut SystemShell),
        None => open_with_platform_opener(path, Platform::current()),
    }
}

/// The first non-empty of `SHEMUL_EDITOR`, `VISUAL` and `EDITOR`.
pub fn configured_editor<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    EDITOR_ENV_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty())
}

/// `{file}` in the editor command is replaced with the path; otherwise the quoted
/// path is appended.
pub fn editor_command(editor: &str, path: &Path) -> String {
    let file = path.display().to_string();
    if editor.contains(EDITOR_FILE_PLACEHOLDER) {
        editor.replace(EDITOR_FILE_PLACEHOLDER, &file)
    } else {
        format!("{} \"{}\"", editor, file)
    }
}

fn open_with_editor<S: ShellRunner>(editor: &str, path: &Path, shell: &mut S) -> bool {
    let command = editor_command(editor, path);
    log::debug!("Opening editor: {}", command);
    match shell.run(&command) {
        Ok(0) => true,
        Ok(code) => {
            log::warn!("Editor exited with code {}", code);
            false
        }
        Err(e) => {
            log::warn!("Could not start editor: {}", e);
            false
        }
    }
}

fn open_with_platform_opener(path: &Path, platform: Platform) -> bool {
    let mut command = match platform {
        Platform::Windows => {
            let mut c = StdCommand::new("cmd");
            // `start` takes the first quoted argument as a window title.
            c.args(["/C", "start", ""]);
            c
        }
        Platform::MacOs => StdCommand::new("open"),
        Platform::Other => StdCommand::new("xdg-open"),
    };
    command
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    match command.status() {
        Ok(status) => status.success(),
        Err(e) => {
            log::warn!("Could not start the default opener: {}", e);
            false
        }
    }
}
