//! Building the slicer invocation
//!
//! Arguments are forwarded verbatim: no parsing, no reordering, nothing
//! injected. The wrapper deliberately has no CLI options of its own, so a
//! file named `--help` opens in the slicer instead of printing usage here.

use orca_common::config::LauncherConfig;
use orca_common::env_plan::EnvPlan;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment override for the upstream binary location.
pub const SLICER_BIN_ENV: &str = "ORCA_SLICER_BIN";

/// Name resolved from PATH when nothing else is configured.
pub const SLICER_BIN_DEFAULT: &str = "orca-slicer";

/// Locate the upstream binary: env override, then config, then PATH.
pub fn resolve_slicer_bin(config: &LauncherConfig) -> PathBuf {
    let env_override = std::env::var(SLICER_BIN_ENV).ok();
    resolve_from(env_override.as_deref(), config)
}

pub fn resolve_from(env_override: Option<&str>, config: &LauncherConfig) -> PathBuf {
    if let Some(path) = env_override.filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }
    if let Some(path) = &config.slicer_bin {
        return path.clone();
    }
    PathBuf::from(SLICER_BIN_DEFAULT)
}

/// Assemble the final command: inherited environment plus the computed
/// plan, arguments appended untouched.
pub fn build_command(
    bin: &Path,
    args: impl IntoIterator<Item = OsString>,
    plan: &EnvPlan,
) -> Command {
    let mut command = Command::new(bin);
    command.args(args);
    plan.apply(&mut command);
    command
}
