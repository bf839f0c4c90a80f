//! `orcapack bundle`

use anyhow::{bail, Context, Result};
use orca_common::bundle::{assemble, BundleSpec, LAUNCHER_BIN_NAME};
use orca_common::config::LauncherConfig;
use orca_common::desktop::DesktopEntry;
use orca_common::libdeps::library_closure;
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn run(
    output: PathBuf,
    upstream: Option<PathBuf>,
    launcher: Option<PathBuf>,
    icons: Option<PathBuf>,
) -> Result<()> {
    let config = LauncherConfig::load()?;

    let Some(upstream) = upstream.or_else(|| config.slicer_bin.clone()) else {
        bail!("no upstream binary: pass --upstream or set slicer_bin in the config");
    };

    let launcher = match launcher {
        Some(path) => path,
        None => sibling_launcher().context("could not locate orcarun next to this executable; pass --launcher")?,
    };

    let libraries = library_closure(&upstream, &config.bundle.libraries);

    let spec = BundleSpec {
        output_root: output,
        upstream_bin: upstream,
        launcher_bin: launcher,
        desktop_entry: DesktopEntry::orca_slicer(),
        libraries,
        icon_dir: icons.or_else(|| config.icon_dir.clone()),
    };

    let report = assemble(&spec)?;

    println!();
    println!("{}", "[BUNDLE]".cyan());
    println!("  root:      {}", report.root.display());
    println!("  slicer:    {}", report.slicer.display());
    println!("  launcher:  {}", report.launcher.display());
    println!("  desktop:   {}", report.desktop_file.display());
    if report.libraries.is_empty() {
        println!("  libraries: {}", "(none bundled)".dimmed());
    } else {
        println!("  libraries: {}", report.libraries.len());
    }
    if report.icons_copied == 0 {
        println!("  icons:     {}", "(none)".dimmed());
    } else {
        println!("  icons:     {} files", report.icons_copied);
    }
    println!();

    Ok(())
}

/// The installed layout puts orcarun and orcapack in the same bin dir, so
/// that is the default launcher to bundle.
fn sibling_launcher() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let candidate = exe.parent()?.join(LAUNCHER_BIN_NAME);
    candidate.is_file().then_some(candidate)
}
