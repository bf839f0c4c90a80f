//! Shared-library closure for the upstream binary
//!
//! The bundle carries the slicer's runtime libraries next to it. The set
//! comes from the config file when declared there; otherwise it is resolved
//! by running `ldd` on the binary. Resolution failure degrades to an empty
//! set with a warning, in line with every other probe in this workspace.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::warn;

/// Libraries the dynamic loader provides itself; never copied.
const SKIPPED_PREFIXES: [&str; 2] = ["linux-vdso", "ld-linux"];

/// Either the declared list or an `ldd`-resolved one.
pub fn library_closure(binary: &Path, declared: &[PathBuf]) -> Vec<PathBuf> {
    if !declared.is_empty() {
        return declared.to_vec();
    }
    resolve_with_ldd(binary)
}

pub fn resolve_with_ldd(binary: &Path) -> Vec<PathBuf> {
    let output = match Command::new("ldd").arg(binary).output() {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            warn!(
                binary = %binary.display(),
                exit = output.status.code().unwrap_or(-1),
                "ldd failed, bundling without libraries"
            );
            return Vec::new();
        }
        Err(err) => {
            warn!(binary = %binary.display(), error = %err, "ldd unavailable, bundling without libraries");
            return Vec::new();
        }
    };

    parse_ldd_output(&String::from_utf8_lossy(&output.stdout))
}

/// Extract resolved library paths from `ldd` output.
///
/// Lines look like `libfoo.so.1 => /usr/lib/libfoo.so.1 (0x...)`, with the
/// loader itself listed without an arrow.
pub fn parse_ldd_output(text: &str) -> Vec<PathBuf> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            if SKIPPED_PREFIXES.iter().any(|p| line.starts_with(p)) {
                return None;
            }
            let resolved = line.split(" => ").nth(1)?;
            let path = resolved.split(" (").next()?.trim();
            if path.is_empty() || path == "not found" {
                return None;
            }
            Some(PathBuf::from(path))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
\tlinux-vdso.so.1 (0x00007ffd5a7fe000)
\tlibwebkit2gtk-4.1.so.0 => /usr/lib/libwebkit2gtk-4.1.so.0 (0x00007f2a40000000)
\tlibgtk-3.so.0 => /usr/lib/libgtk-3.so.0 (0x00007f2a3f000000)
\tlibmissing.so.9 => not found
\t/lib64/ld-linux-x86-64.so.2 (0x00007f2a43000000)
";

    #[test]
    fn test_parse_keeps_resolved_paths_only() {
        let libs = parse_ldd_output(SAMPLE);
        assert_eq!(
            libs,
            vec![
                PathBuf::from("/usr/lib/libwebkit2gtk-4.1.so.0"),
                PathBuf::from("/usr/lib/libgtk-3.so.0"),
            ]
        );
    }

    #[test]
    fn test_parse_skips_loader_and_vdso() {
        let libs = parse_ldd_output(SAMPLE);
        assert!(libs.iter().all(|p| !p.to_string_lossy().contains("vdso")));
        assert!(libs.iter().all(|p| !p.to_string_lossy().contains("ld-linux")));
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_ldd_output("").is_empty());
        assert!(parse_ldd_output("\tstatically linked\n").is_empty());
    }

    #[test]
    fn test_declared_list_wins_over_ldd() {
        let declared = vec![PathBuf::from("/usr/lib/libdeclared.so")];
        let libs = library_closure(Path::new("/nonexistent/bin"), &declared);
        assert_eq!(libs, declared);
    }

    #[test]
    fn test_missing_binary_degrades_to_empty_set() {
        let libs = library_closure(Path::new("/nonexistent/bin"), &[]);
        assert!(libs.is_empty());
    }
}
