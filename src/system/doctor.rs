// src/system/doctor.rs

use crate::system::executor::{self, ExecutionError};
use std::env;
use std::process::Output;

/// The outcome of one readiness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorCheck {
    pub name: String,
    pub ok: bool,
    pub detail: String,
}

impl DoctorCheck {
    fn new(name: &str, ok: bool, detail: &str) -> Self {
        Self {
            name: name.to_string(),
            ok,
            detail: detail.to_string(),
        }
    }
}

/// Runs the system readiness checks. The daemon and compose checks only run
/// when `docker` is on `PATH`.
pub fn run_checks() -> Vec<DoctorCheck> {
    let docker = if cfg!(target_os = "windows") {
        "docker.exe"
    } else {
        "docker"
    };

    if !is_executable_in_path(docker) {
        return vec![DoctorCheck::new("docker", false, "docker not found")];
    }

    vec![
        DoctorCheck::new("docker", true, "docker found"),
        probe_check(
            "docker daemon",
            executor::probe("docker", &["info"]),
            "docker is running",
            "docker not running",
        ),
        probe_check(
            "docker compose",
            executor::probe("docker", &["compose", "version"]),
            "docker compose available",
            "docker compose unavailable",
        ),
    ]
}

fn probe_check(
    name: &str,
    result: Result<Option<Output>, ExecutionError>,
    ok_detail: &str,
    fail_detail: &str,
) -> DoctorCheck {
    let ok = match result {
        Ok(Some(output)) => output.status.success(),
        Ok(None) => false,
        Err(e) => {
            log::debug!("Check '{}' failed to run: {}", name, e);
            false
        }
    };
    DoctorCheck::new(name, ok, if ok { ok_detail } else { fail_detail })
}

fn is_executable_in_path(executable_name: &str) -> bool {
    if let Some(path_var) = env::var_os("PATH") {
        for path in env::split_paths(&path_var) {
            if path.join(executable_name).is_file() {
                return true;
            }
        }
    }
    false
}
