//! shemul: a project-aware task runner.
//!
//! Commands live in a `shemul.json` found by walking up from the working
//! directory, layered over a user-global `shemul.json`. A command's `run`
//! template is resolved with `{{var}}` / `{{env.key}}` tokens and executed
//! through the platform shell, optionally behind a confirmation prompt.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod state;
pub mod system;
