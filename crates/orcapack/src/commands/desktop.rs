//! `orcapack desktop-entry`

use anyhow::{Context, Result};
use orca_common::desktop::DesktopEntry;
use std::path::PathBuf;

pub fn run(output: Option<PathBuf>) -> Result<()> {
    let entry = DesktopEntry::orca_slicer();
    entry.validate()?;
    let text = entry.render();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_entry_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("applications").join("orca-slicer.desktop");

        run(Some(path.clone())).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[Desktop Entry]"));
        assert!(text.contains("MimeType=model/stl;"));
    }
}
