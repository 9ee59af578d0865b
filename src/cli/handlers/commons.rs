// src/cli/handlers/commons.rs

// Console output shared by the handlers.

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::{
    core::execution_gate::Interaction,
    models::ResolvedCommand,
};

pub fn info(message: &str) {
    println!("{}", format!("INFO: {}", message).cyan());
}

pub fn success(message: &str) {
    println!("{}", format!("OK: {}", message).green());
}

pub fn warn(message: &str) {
    eprintln!("{}", format!("WARN: {}", message).yellow());
}

pub fn error(message: &str) {
    eprintln!("{}", format!("ERROR: {}", message).red());
}

/// Prints `rows` as left-aligned columns under a bold title and header line.
pub fn table(title: &str, headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    println!("\n{}", title.bold());
    println!("{}", render(headers.to_vec()).yellow());
    for row in rows {
        println!("{}", render(row.iter().map(String::as_str).collect()));
    }
}

/// Prints `body` under a titled rule.
pub fn panel(title: &str, body: &str) {
    println!("\n{}", format!("--- {} ---", title).bold());
    for line in body.lines() {
        println!("  {}", line);
    }
}

/// The terminal side of the execution gate: trace panels, dry-run output and
/// `dialoguer` prompts.
#[derive(Debug, Default)]
pub struct ConsoleInteraction;

impl Interaction for ConsoleInteraction {
    fn trace(&mut self, command: &ResolvedCommand) {
        let env = if command.env.is_empty() {
            t!("run.trace.no_env").to_string()
        } else {
            command
                .env
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("\n")
        };
        panel(
            t!("run.trace.title"),
            &format!(t!("run.trace.body"), command = command.command, env = env),
        );
    }

    fn dry_run(&mut self, command: &ResolvedCommand) {
        println!("{}", command.command);
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        match Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                log::warn!("Prompt could not be shown, treating as declined: {}", e);
                false
            }
        }
    }
}
