//! Bundle assembly
//!
//! Unions the launcher, the desktop entry, the upstream slicer binary and
//! its shared-library closure into one installable directory tree:
//!
//! ```text
//! <root>/bin/orcarun
//! <root>/bin/orca-slicer
//! <root>/lib/orca-slicer/<libraries>
//! <root>/share/applications/orca-slicer.desktop
//! <root>/share/icons/hicolor/...      (only when the icon source exists)
//! <root>/bundle.manifest.toml
//! ```
//!
//! Icons are an optional asset: a missing source directory skips the copy
//! step without error.

use crate::desktop::DesktopEntry;
use crate::error::BundleError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Name the upstream binary is installed under, regardless of its source
/// file name.
pub const SLICER_BIN_NAME: &str = "orca-slicer";

/// Name of the launcher entry point inside the bundle.
pub const LAUNCHER_BIN_NAME: &str = "orcarun";

pub const MANIFEST_NAME: &str = "bundle.manifest.toml";

/// Inputs to [`assemble`].
#[derive(Debug, Clone)]
pub struct BundleSpec {
    pub output_root: PathBuf,
    pub upstream_bin: PathBuf,
    pub launcher_bin: PathBuf,
    pub desktop_entry: DesktopEntry,
    /// Shared-library closure of the upstream binary.
    pub libraries: Vec<PathBuf>,
    /// Icon tree to copy under `share/icons/hicolor/`.
    pub icon_dir: Option<PathBuf>,
}

/// What ended up in the tree; also serialized as the bundle manifest.
#[derive(Debug, Clone, Serialize)]
pub struct BundleReport {
    pub root: PathBuf,
    pub slicer: PathBuf,
    pub launcher: PathBuf,
    pub desktop_file: PathBuf,
    pub libraries: Vec<String>,
    pub icons_copied: usize,
    pub generated_at: String,
}

/// Produce the install tree for a spec.
pub fn assemble(spec: &BundleSpec) -> Result<BundleReport, BundleError> {
    spec.desktop_entry.validate()?;

    if !spec.upstream_bin.is_file() {
        return Err(BundleError::UpstreamMissing {
            path: spec.upstream_bin.clone(),
        });
    }
    if !spec.launcher_bin.is_file() {
        return Err(BundleError::LauncherMissing {
            path: spec.launcher_bin.clone(),
        });
    }

    let bin_dir = spec.output_root.join("bin");
    let lib_dir = spec.output_root.join("lib").join(SLICER_BIN_NAME);
    let applications_dir = spec.output_root.join("share").join("applications");
    for dir in [&bin_dir, &lib_dir, &applications_dir] {
        fs::create_dir_all(dir).map_err(|e| BundleError::io(dir.clone(), e))?;
    }

    let launcher = bin_dir.join(LAUNCHER_BIN_NAME);
    copy_file(&spec.launcher_bin, &launcher)?;

    let slicer = bin_dir.join(SLICER_BIN_NAME);
    copy_file(&spec.upstream_bin, &slicer)?;

    let mut libraries = Vec::new();
    for lib in &spec.libraries {
        let Some(file_name) = lib.file_name() else {
            warn!(library = %lib.display(), "library path has no file name, skipping");
            continue;
        };
        if !lib.is_file() {
            warn!(library = %lib.display(), "declared library missing, skipping");
            continue;
        }
        copy_file(lib, &lib_dir.join(file_name))?;
        libraries.push(file_name.to_string_lossy().into_owned());
    }

    let desktop_file = applications_dir.join(spec.desktop_entry.file_name());
    fs::write(&desktop_file, spec.desktop_entry.render())
        .map_err(|e| BundleError::io(desktop_file.clone(), e))?;

    let icons_copied = match &spec.icon_dir {
        Some(src) if src.is_dir() => {
            let dst = spec.output_root.join("share").join("icons").join("hicolor");
            copy_tree(src, &dst)?
        }
        Some(src) => {
            info!(icon_dir = %src.display(), "icon source missing, skipping icon install");
            0
        }
        None => 0,
    };

    let report = BundleReport {
        root: spec.output_root.clone(),
        slicer,
        launcher,
        desktop_file,
        libraries,
        icons_copied,
        generated_at: chrono::Utc::now().to_rfc3339(),
    };

    let manifest_path = spec.output_root.join(MANIFEST_NAME);
    let manifest = toml::to_string_pretty(&report)?;
    fs::write(&manifest_path, manifest).map_err(|e| BundleError::io(manifest_path, e))?;

    Ok(report)
}

/// Copy one file, keeping Unix permission bits (fs::copy does).
fn copy_file(src: &Path, dst: &Path) -> Result<(), BundleError> {
    fs::copy(src, dst)
        .map(|_| ())
        .map_err(|e| BundleError::io(dst.to_path_buf(), e))
}

/// Copy a directory tree, returning the number of files copied.
fn copy_tree(src: &Path, dst: &Path) -> Result<usize, BundleError> {
    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| {
            BundleError::io(src.to_path_buf(), e.into())
        })?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| BundleError::io(target.clone(), e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| BundleError::io(parent.to_path_buf(), e))?;
            }
            copy_file(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
