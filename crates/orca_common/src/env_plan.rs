//! Launch environment computation
//!
//! Pure decision table over a probed [`SessionContext`]: no filesystem or
//! process access happens here, so every row of the Wayland × NVIDIA × zink
//! matrix is testable. Only the seven fixed variable names below are ever
//! set; everything else in the parent environment passes through untouched.

use crate::session::SessionContext;
use serde::Serialize;
use std::process::Command;

pub const GLX_VENDOR: &str = "__GLX_VENDOR_LIBRARY_NAME";
pub const EGL_VENDOR_FILES: &str = "__EGL_VENDOR_LIBRARY_FILENAMES";
pub const MESA_DRIVER_OVERRIDE: &str = "MESA_LOADER_DRIVER_OVERRIDE";
pub const GALLIUM_DRIVER: &str = "GALLIUM_DRIVER";
pub const WEBKIT_DISABLE_DMABUF: &str = "WEBKIT_DISABLE_DMABUF_RENDERER";
pub const GL_SYNC_TO_VBLANK: &str = "__GL_SYNC_TO_VBLANK";
pub const GL_THREADED_OPTIMIZATIONS: &str = "__GL_THREADED_OPTIMIZATIONS";

/// The glvnd vendor file that routes EGL through Mesa.
pub const MESA_EGL_VENDOR_FILE: &str = "/usr/share/glvnd/egl_vendor.d/50_mesa.json";

/// One computed environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnvVar {
    pub name: &'static str,
    pub value: &'static str,
}

/// The set of variables to apply to the child process, in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct EnvPlan {
    vars: Vec<EnvVar>,
}

impl EnvPlan {
    /// Compute the variable set for a session.
    ///
    /// On a Wayland session with a responding NVIDIA driver, GL is routed
    /// through Mesa: via zink when the driver file exists, otherwise via
    /// Mesa's software path (EGL vendor file alone). The WebKit DMA-BUF and
    /// GL tuning variables stay scoped to the NVIDIA branch.
    pub fn compute(ctx: &SessionContext) -> Self {
        let mut vars = Vec::new();

        if ctx.display_server.is_wayland() && ctx.nvidia_ok {
            if ctx.zink_driver.is_some() {
                vars.push(EnvVar {
                    name: GLX_VENDOR,
                    value: "mesa",
                });
                vars.push(EnvVar {
                    name: EGL_VENDOR_FILES,
                    value: MESA_EGL_VENDOR_FILE,
                });
                vars.push(EnvVar {
                    name: MESA_DRIVER_OVERRIDE,
                    value: "zink",
                });
                vars.push(EnvVar {
                    name: GALLIUM_DRIVER,
                    value: "zink",
                });
            } else {
                // Software-rendering fallback.
                vars.push(EnvVar {
                    name: EGL_VENDOR_FILES,
                    value: MESA_EGL_VENDOR_FILE,
                });
            }

            vars.push(EnvVar {
                name: WEBKIT_DISABLE_DMABUF,
                value: "1",
            });
            vars.push(EnvVar {
                name: GL_SYNC_TO_VBLANK,
                value: "0",
            });
            vars.push(EnvVar {
                name: GL_THREADED_OPTIMIZATIONS,
                value: "1",
            });
        }

        Self { vars }
    }

    pub fn vars(&self) -> &[EnvVar] {
        &self.vars
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.vars.iter().find(|v| v.name == name).map(|v| v.value)
    }

    /// Apply the plan on top of the inherited environment.
    pub fn apply(&self, command: &mut Command) {
        for var in &self.vars {
            command.env(var.name, var.value);
        }
    }
}
