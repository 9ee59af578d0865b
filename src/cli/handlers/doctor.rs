use crate::{
    cli::{dispatcher::Invocation, handlers::commons},
    system::doctor,
};
use anyhow::Result;

/// Prints the readiness checks as a table. Failed checks are reported, not fatal.
pub fn handle(_args: Vec<String>, _invocation: &Invocation) -> Result<i32> {
    let rows: Vec<Vec<String>> = doctor::run_checks()
        .into_iter()
        .map(|check| {
            let status = if check.ok {
                t!("doctor.status_ok")
            } else {
                t!("doctor.status_fail")
            };
            vec![status.to_string(), check.name, check.detail]
        })
        .collect();

    commons::table(
        t!("doctor.title"),
        &[t!("doctor.col_status"), t!("doctor.col_check"), t!("doctor.col_detail")],
        &rows,
    );
    Ok(0)
}
