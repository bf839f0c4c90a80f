//! Error types for bundle assembly.

use crate::desktop::DesktopEntryError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("upstream slicer binary not found at {path}")]
    UpstreamMissing { path: PathBuf },

    #[error("launcher binary not found at {path}")]
    LauncherMissing { path: PathBuf },

    #[error("desktop entry is not installable: {0}")]
    InvalidEntry(#[from] DesktopEntryError),

    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize bundle manifest")]
    Manifest(#[from] toml::ser::Error),
}

impl BundleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
