// src/cli/handlers/mod.rs

// One module per built-in subcommand, plus `run` for configured commands.

pub mod commons;
pub mod complete;
pub mod doctor;
pub mod help;
pub mod info;
pub mod init;
pub mod ls;
pub mod run;
pub mod schema;
