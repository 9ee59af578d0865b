//! # System Interaction Layer
//!
//! The boundary between shemul's core logic and the operating system.
//!
//! ## Modules
//!
//! - **`executor`**: Runs resolved command strings through the platform shell (`sh -c`
//!   or `cmd /C`) with inherited stdio and reports their exit code. Also hosts the
//!   captured-output probes used by `doctor`.
//! - **`doctor`**: Readiness checks for the docker toolchain.
//! - **`editor`**: Opens a configuration file in the user's editor after `shemul init`.

pub mod doctor;
pub mod editor;
pub mod executor;
