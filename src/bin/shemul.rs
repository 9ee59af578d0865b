// src/bin/shemul.rs

use clap::Parser;
use colored::*;
use shemul::cli::{Cli, dispatcher};

/// Sets up logging, parses the command line and exits with the dispatched command's code.
fn main() {
    env_logger::init();

    match dispatcher::dispatch(Cli::parse()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}
