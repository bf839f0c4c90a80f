//! Graphics toolchain diagnostics
//!
//! Runs the diagnostic tools the launcher's detection logic (and a person
//! debugging it) relies on, and reports their real exit status without
//! reinterpretation. Only nvidia-smi is essential: everything else merely
//! degrades the report when absent.

use chrono::Utc;
use serde::Serialize;
use std::process::Command;

/// One entry in the diagnostic catalog.
#[derive(Debug, Clone, Copy)]
pub struct ToolCheck {
    pub name: &'static str,
    pub command: &'static str,
    pub args: &'static [&'static str],
    pub essential: bool,
}

/// Tools worth having around when debugging a graphics-stack launch.
pub const TOOL_CATALOG: [ToolCheck; 6] = [
    ToolCheck {
        name: "nvidia-smi",
        command: "nvidia-smi",
        args: &["-L"],
        essential: true,
    },
    ToolCheck {
        name: "vulkaninfo",
        command: "vulkaninfo",
        args: &["--summary"],
        essential: false,
    },
    ToolCheck {
        name: "glxinfo",
        command: "glxinfo",
        args: &["-B"],
        essential: false,
    },
    ToolCheck {
        name: "eglinfo",
        command: "eglinfo",
        args: &[],
        essential: false,
    },
    ToolCheck {
        name: "ldd",
        command: "ldd",
        args: &["--version"],
        essential: false,
    },
    ToolCheck {
        name: "desktop-file-validate",
        command: "desktop-file-validate",
        args: &["--help"],
        essential: false,
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct ToolHealth {
    pub name: String,
    pub available: bool,
    pub status_message: String,
    pub exit_code: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DoctorStatus {
    /// All essential tools work.
    Healthy,
    /// Some optional tools missing.
    Degraded,
    /// An essential tool is missing or failing.
    Critical,
}

impl DoctorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorReport {
    pub status: DoctorStatus,
    pub tools: Vec<ToolHealth>,
    pub checked_at: String,
}

/// Run the full catalog.
pub fn run_doctor() -> DoctorReport {
    run_checks(&TOOL_CATALOG)
}

pub fn run_checks(catalog: &[ToolCheck]) -> DoctorReport {
    let mut tools = Vec::with_capacity(catalog.len());
    let mut critical_failures = 0;
    let mut degraded = false;

    for check in catalog {
        let health = match Command::new(check.command).args(check.args).output() {
            Ok(output) if output.status.success() => ToolHealth {
                name: check.name.to_string(),
                available: true,
                status_message: "OK".to_string(),
                exit_code: output.status.code(),
            },
            Ok(output) => {
                if check.essential {
                    critical_failures += 1;
                } else {
                    degraded = true;
                }
                ToolHealth {
                    name: check.name.to_string(),
                    available: false,
                    status_message: format!("exit {}", output.status.code().unwrap_or(-1)),
                    exit_code: output.status.code(),
                }
            }
            Err(err) => {
                if check.essential {
                    critical_failures += 1;
                } else {
                    degraded = true;
                }
                let message = if err.kind() == std::io::ErrorKind::NotFound {
                    "not installed".to_string()
                } else {
                    format!("error: {}", err)
                };
                ToolHealth {
                    name: check.name.to_string(),
                    available: false,
                    status_message: message,
                    exit_code: None,
                }
            }
        };
        tools.push(health);
    }

    let status = if critical_failures > 0 {
        DoctorStatus::Critical
    } else if degraded {
        DoctorStatus::Degraded
    } else {
        DoctorStatus::Healthy
    };

    DoctorReport {
        status,
        tools,
        checked_at: Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_tool_degrades() {
        let catalog = [
            ToolCheck {
                name: "true",
                command: "true",
                args: &[],
                essential: true,
            },
            ToolCheck {
                name: "no-such-tool",
                command: "orca-launcher-no-such-tool",
                args: &[],
                essential: false,
            },
        ];
        let report = run_checks(&catalog);
        assert_eq!(report.status, DoctorStatus::Degraded);
        assert!(report.tools[0].available);
        assert!(!report.tools[1].available);
        assert_eq!(report.tools[1].status_message, "not installed");
    }

    #[test]
    fn test_missing_essential_tool_is_critical() {
        let catalog = [ToolCheck {
            name: "no-such-tool",
            command: "orca-launcher-no-such-tool",
            args: &[],
            essential: true,
        }];
        let report = run_checks(&catalog);
        assert_eq!(report.status, DoctorStatus::Critical);
    }

    #[test]
    fn test_all_passing_is_healthy() {
        let catalog = [
            ToolCheck {
                name: "true",
                command: "true",
                args: &[],
                essential: true,
            },
            ToolCheck {
                name: "also-true",
                command: "true",
                args: &[],
                essential: false,
            },
        ];
        let report = run_checks(&catalog);
        assert_eq!(report.status, DoctorStatus::Healthy);
        assert!(report.tools.iter().all(|t| t.available));
        assert!(!report.checked_at.is_empty());
    }

    #[test]
    fn test_failing_tool_reports_real_exit_code() {
        let catalog = [ToolCheck {
            name: "false",
            command: "false",
            args: &[],
            essential: false,
        }];
        let report = run_checks(&catalog);
        assert_eq!(report.tools[0].exit_code, Some(1));
        assert_eq!(report.tools[0].status_message, "exit 1");
    }

    #[test]
    fn test_status_names() {
        assert_eq!(DoctorStatus::Healthy.as_str(), "healthy");
        assert_eq!(DoctorStatus::Degraded.as_str(), "degraded");
        assert_eq!(DoctorStatus::Critical.as_str(), "critical");
    }
}
