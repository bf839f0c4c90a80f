//! Launcher configuration
//!
//! Optional TOML file; every field has a default so the launcher works on a
//! machine with no config at all.
//!
//! Discovery chain:
//! 1. $ORCA_LAUNCHER_CONFIG environment variable (explicit override)
//! 2. $XDG_CONFIG_HOME/orca-launcher/config.toml
//! 3. ~/.config/orca-launcher/config.toml
//! 4. /etc/orca-launcher/config.toml
//!
//! A missing file is not an error; a present but malformed one is.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "ORCA_LAUNCHER_CONFIG";

const SYSTEM_CONFIG: &str = "/etc/orca-launcher/config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    /// Absolute path of the upstream slicer binary. When unset the launcher
    /// resolves `orca-slicer` from PATH at exec time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slicer_bin: Option<PathBuf>,

    /// Icon tree copied into the bundle. Optional asset: a missing
    /// directory skips the copy without error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_dir: Option<PathBuf>,

    #[serde(default)]
    pub bundle: BundleConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleConfig {
    /// Install prefix recorded in the bundle manifest.
    #[serde(default = "default_prefix")]
    pub prefix: PathBuf,

    /// Explicit shared-library closure. Empty means: resolve via ldd.
    #[serde(default)]
    pub libraries: Vec<PathBuf>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            libraries: Vec::new(),
        }
    }
}

fn default_prefix() -> PathBuf {
    PathBuf::from("/usr")
}

impl LauncherConfig {
    /// Load from the discovery chain. No file anywhere yields defaults.
    pub fn load() -> Result<Self> {
        match discover_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Like [`load`](Self::load) but never fails: a malformed file is
    /// reported on stderr and replaced by defaults. The launcher uses this
    /// so a broken config cannot keep the slicer from starting.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            eprintln!("orca-launcher: ignoring config: {err:#}");
            Self::default()
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }
}

fn discover_path() -> Option<PathBuf> {
    // 1. Explicit override
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    // 2./3. XDG config dir (dirs honors XDG_CONFIG_HOME and falls back to
    // ~/.config)
    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("orca-launcher").join("config.toml");
        if path.exists() {
            return Some(path);
        }
    }

    // 4. System-wide fallback
    let system = PathBuf::from(SYSTEM_CONFIG);
    if system.exists() {
        return Some(system);
    }

    None
}
