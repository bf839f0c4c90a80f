//! Desktop entry model
//!
//! Freedesktop `.desktop` metadata for the slicer: produced once at
//! packaging time by `orcapack desktop-entry`, consumed by the desktop
//! shell's application menu and file associations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DesktopEntryError {
    #[error("desktop entry has an empty Name")]
    EmptyName,
    #[error("desktop entry has an empty Exec")]
    EmptyExec,
}

/// A single `[Desktop Entry]` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopEntry {
    pub name: String,
    pub generic_name: Option<String>,
    pub comment: Option<String>,
    /// Launch command template. `%U` stands for the files to open.
    pub exec: String,
    pub icon: String,
    pub terminal: bool,
    pub startup_notify: bool,
    pub categories: Vec<String>,
    pub mime_types: Vec<String>,
}

impl DesktopEntry {
    /// The entry shipped for the wrapped slicer. `Exec` points at the
    /// launcher wrapper, never at the upstream binary directly.
    pub fn orca_slicer() -> Self {
        Self {
            name: "OrcaSlicer".to_string(),
            generic_name: Some("3D Printing Slicer".to_string()),
            comment: Some("Prepare 3D models for printing".to_string()),
            exec: "orcarun %U".to_string(),
            icon: "OrcaSlicer".to_string(),
            terminal: false,
            startup_notify: true,
            categories: vec![
                "Graphics".to_string(),
                "3DGraphics".to_string(),
                "Engineering".to_string(),
            ],
            mime_types: vec![
                "model/stl".to_string(),
                "model/3mf".to_string(),
                "application/vnd.ms-3mfdocument".to_string(),
                "application/prs.wavefront-obj".to_string(),
                "application/x-amf".to_string(),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), DesktopEntryError> {
        if self.name.trim().is_empty() {
            return Err(DesktopEntryError::EmptyName);
        }
        if self.exec.trim().is_empty() {
            return Err(DesktopEntryError::EmptyExec);
        }
        Ok(())
    }

    /// Render to `.desktop` file text.
    pub fn render(&self) -> String {
        let mut out = String::from("[Desktop Entry]\n");
        out.push_str("Type=Application\n");
        out.push_str("Version=1.1\n");
        out.push_str(&format!("Name={}\n", self.name));
        if let Some(generic) = &self.generic_name {
            out.push_str(&format!("GenericName={}\n", generic));
        }
        if let Some(comment) = &self.comment {
            out.push_str(&format!("Comment={}\n", comment));
        }
        out.push_str(&format!("Exec={}\n", self.exec));
        out.push_str(&format!("Icon={}\n", self.icon));
        out.push_str(&format!("Terminal={}\n", self.terminal));
        out.push_str(&format!("StartupNotify={}\n", self.startup_notify));
        if !self.categories.is_empty() {
            out.push_str(&format!("Categories={}\n", semicolon_list(&self.categories)));
        }
        if !self.mime_types.is_empty() {
            out.push_str(&format!("MimeType={}\n", semicolon_list(&self.mime_types)));
        }
        out
    }

    /// Conventional file name under `share/applications/`.
    pub fn file_name(&self) -> String {
        "orca-slicer.desktop".to_string()
    }
}

/// Freedesktop list values are semicolon-separated and semicolon-terminated.
fn semicolon_list(items: &[String]) -> String {
    let mut out = items.join(";");
    out.push(';');
    out
}
