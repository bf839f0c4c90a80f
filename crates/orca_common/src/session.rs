//! Graphics session probing
//!
//! Detection layers (in order):
//! 1. Environment variables (WAYLAND_DISPLAY)
//! 2. GPU diagnostic tool (nvidia-smi must run and exit 0)
//! 3. Driver files on disk (zink shared object at fixed paths)
//!
//! Every probe is failure-tolerant: a missing tool or file is a negative
//! signal, never an error. Probing is kept separate from planning so the
//! full detection matrix stays unit-testable (see `env_plan`).

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fixed candidate locations for the Mesa zink driver shared object.
///
/// The first is the Arch Linux layout, the second the Debian/Ubuntu
/// multiarch layout.
pub const ZINK_DRIVER_CANDIDATES: [&str; 2] = [
    "/usr/lib/dri/zink_dri.so",
    "/usr/lib/x86_64-linux-gnu/dri/zink_dri.so",
];

/// Which display server the session is running under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayServer {
    Wayland,
    /// X11 or anything else that is not Wayland.
    X11,
}

impl DisplayServer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wayland => "wayland",
            Self::X11 => "x11",
        }
    }

    pub fn is_wayland(&self) -> bool {
        matches!(self, Self::Wayland)
    }
}

/// Everything the launcher needs to know about the current session,
/// read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionContext {
    pub display_server: DisplayServer,
    /// True when nvidia-smi is present and exits successfully.
    pub nvidia_ok: bool,
    /// Path of the zink driver if one of the candidates exists.
    pub zink_driver: Option<PathBuf>,
}

impl SessionContext {
    /// Probe the live session.
    pub fn detect() -> Self {
        let display_server = detect_display_server();
        let nvidia_ok = nvidia_responds();
        // The zink probe only matters on NVIDIA Wayland sessions but is
        // cheap enough to run unconditionally and report in diagnostics.
        let zink_driver = find_zink_driver();

        Self {
            display_server,
            nvidia_ok,
            zink_driver,
        }
    }

    /// Build a context from already-known probe results.
    pub fn from_parts(
        display_server: DisplayServer,
        nvidia_ok: bool,
        zink_driver: Option<PathBuf>,
    ) -> Self {
        Self {
            display_server,
            nvidia_ok,
            zink_driver,
        }
    }
}

fn detect_display_server() -> DisplayServer {
    if is_wayland_value(env::var("WAYLAND_DISPLAY").ok().as_deref()) {
        DisplayServer::Wayland
    } else {
        DisplayServer::X11
    }
}

/// WAYLAND_DISPLAY counts only when set and non-empty.
pub fn is_wayland_value(value: Option<&str>) -> bool {
    value.map(|v| !v.is_empty()).unwrap_or(false)
}

/// Run nvidia-smi and require a clean exit.
///
/// A proprietary-driver install where the kernel module failed to load
/// leaves nvidia-smi on disk but erroring out, so presence alone is not
/// enough.
fn nvidia_responds() -> bool {
    Command::new("nvidia-smi")
        .arg("-L")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn find_zink_driver() -> Option<PathBuf> {
    find_zink_driver_in(&ZINK_DRIVER_CANDIDATES)
}

pub fn find_zink_driver_in(candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(Path::new)
        .find(|path| path.exists())
        .map(Path::to_path_buf)
}
