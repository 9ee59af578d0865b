// src/core/mod.rs

pub mod command_resolver;
pub mod completion;
pub mod config_loader;
pub mod config_merger;
pub mod context_resolver;
pub mod execution_gate;
pub mod interpolator;
pub mod paths;
pub mod suggest;
pub mod templates;
