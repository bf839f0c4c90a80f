//! orcarun - launcher wrapper for OrcaSlicer
//!
//! Probes the session, exports the right graphics variables, then execs the
//! real slicer with every argument forwarded unchanged. The informational
//! lines below go to stdout and are not parsed by anything.

use orca_common::config::LauncherConfig;
use orca_common::env_plan::EnvPlan;
use orca_common::session::SessionContext;
use orcarun::launch;
use owo_colors::OwoColorize;
use std::ffi::OsString;
use std::os::unix::process::CommandExt;

fn main() {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    let config = LauncherConfig::load_or_default();
    let ctx = SessionContext::detect();
    let plan = EnvPlan::compute(&ctx);

    report(&ctx, &plan);

    let bin = launch::resolve_slicer_bin(&config);
    let mut command = launch::build_command(&bin, args, &plan);

    // exec only returns on failure; the slicer's stdio and exit status are
    // the caller's from here on.
    let err = command.exec();
    eprintln!("orcarun: failed to launch {}: {}", bin.display(), err);
    std::process::exit(127);
}

fn report(ctx: &SessionContext, plan: &EnvPlan) {
    let tag = "[orcarun]".cyan().to_string();

    println!("{} session: {}", tag, ctx.display_server.as_str());

    if ctx.display_server.is_wayland() {
        if ctx.nvidia_ok {
            println!("{} nvidia: proprietary driver responding", tag);
            match &ctx.zink_driver {
                Some(path) => {
                    println!("{} zink: {}", tag, path.display());
                    println!("{} routing GL through zink (OpenGL over Vulkan)", tag);
                }
                None => {
                    println!(
                        "{} zink: {}",
                        tag,
                        "not found, falling back to software rendering".yellow()
                    );
                }
            }
        } else {
            println!("{} nvidia: {}", tag, "not detected, no overrides needed".dimmed());
        }
    } else {
        println!("{} x11 session, no overrides needed", tag);
    }

    for var in plan.vars() {
        println!("{} export {}={}", tag, var.name.dimmed(), var.value.dimmed());
    }
}
