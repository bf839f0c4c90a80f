//! Shared library for the Orca Launcher workspace.
//!
//! Everything the two binaries have in common lives here: probing the
//! graphics session, computing the launch environment, modelling the
//! desktop entry, assembling the installable bundle, and the diagnostic
//! tool catalog used by `orcapack doctor`.

pub mod bundle;
pub mod config;
pub mod desktop;
pub mod doctor;
pub mod env_plan;
pub mod error;
pub mod libdeps;
pub mod session;

pub use bundle::{assemble, BundleReport, BundleSpec};
pub use config::LauncherConfig;
pub use desktop::DesktopEntry;
pub use doctor::{run_doctor, DoctorReport, DoctorStatus, ToolHealth};
pub use env_plan::{EnvPlan, EnvVar};
pub use error::BundleError;
pub use session::{DisplayServer, SessionContext};
