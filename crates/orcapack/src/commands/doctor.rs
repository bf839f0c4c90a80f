//! `orcapack doctor`

use anyhow::Result;
use orca_common::doctor::{run_doctor, DoctorStatus};
use owo_colors::OwoColorize;

pub fn run(json: bool) -> Result<()> {
    let report = run_doctor();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("{}", "[TOOLS]".cyan());
    for tool in &report.tools {
        let marker = if tool.available {
            "ok".green().to_string()
        } else {
            "--".yellow().to_string()
        };
        println!("  {}  {:<22} {}", marker, tool.name, tool.status_message.dimmed());
    }

    println!();
    let status = match report.status {
        DoctorStatus::Healthy => report.status.as_str().green().to_string(),
        DoctorStatus::Degraded => report.status.as_str().yellow().to_string(),
        DoctorStatus::Critical => report.status.as_str().red().to_string(),
    };
    println!("  status: {}", status);
    println!();

    Ok(())
}
