//! `orcapack probe`

use anyhow::Result;
use orca_common::env_plan::EnvPlan;
use orca_common::session::SessionContext;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Serialize)]
struct ProbeReport<'a> {
    session: &'a SessionContext,
    plan: &'a EnvPlan,
}

pub fn run(json: bool) -> Result<()> {
    let session = SessionContext::detect();
    let plan = EnvPlan::compute(&session);

    if json {
        let report = ProbeReport {
            session: &session,
            plan: &plan,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("{}", "[SESSION]".cyan());
    println!("  display server: {}", session.display_server.as_str());
    println!(
        "  nvidia:         {}",
        if session.nvidia_ok {
            "driver responding".to_string()
        } else {
            "not detected".dimmed().to_string()
        }
    );
    println!(
        "  zink driver:    {}",
        match &session.zink_driver {
            Some(path) => path.display().to_string(),
            None => "not found".dimmed().to_string(),
        }
    );

    println!();
    println!("{}", "[ENVIRONMENT]".cyan());
    if plan.is_empty() {
        println!("  {}", "no overrides for this session".dimmed());
    } else {
        for var in plan.vars() {
            println!("  {}={}", var.name, var.value);
        }
    }
    println!();

    Ok(())
}
