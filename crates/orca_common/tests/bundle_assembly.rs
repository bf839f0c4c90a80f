//! Bundle assembly against a real (temporary) filesystem.

use orca_common::bundle::{assemble, BundleSpec, LAUNCHER_BIN_NAME, MANIFEST_NAME, SLICER_BIN_NAME};
use orca_common::desktop::DesktopEntry;
use orca_common::error::BundleError;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    spec: BundleSpec,
}

fn fixture(with_icons: bool) -> Fixture {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    let upstream = root.join("upstream").join("orca-slicer");
    fs::create_dir_all(upstream.parent().unwrap()).unwrap();
    fs::write(&upstream, b"#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(&upstream, fs::Permissions::from_mode(0o755)).unwrap();

    let launcher = root.join("target").join("orcarun");
    fs::create_dir_all(launcher.parent().unwrap()).unwrap();
    fs::write(&launcher, b"#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(&launcher, fs::Permissions::from_mode(0o755)).unwrap();

    let lib = root.join("libs").join("libwebkit2gtk-4.1.so.0");
    fs::create_dir_all(lib.parent().unwrap()).unwrap();
    fs::write(&lib, b"\x7fELF").unwrap();

    let icon_dir = root.join("icons");
    if with_icons {
        let scalable = icon_dir.join("scalable").join("apps");
        fs::create_dir_all(&scalable).unwrap();
        fs::write(scalable.join("OrcaSlicer.svg"), b"<svg/>").unwrap();
        let sized = icon_dir.join("128x128").join("apps");
        fs::create_dir_all(&sized).unwrap();
        fs::write(sized.join("OrcaSlicer.png"), b"png").unwrap();
    }

    let spec = BundleSpec {
        output_root: root.join("out"),
        upstream_bin: upstream,
        launcher_bin: launcher,
        desktop_entry: DesktopEntry::orca_slicer(),
        libraries: vec![lib],
        icon_dir: Some(icon_dir),
    };

    Fixture { _dir: dir, spec }
}

#[test]
fn assemble_produces_the_full_tree() {
    let fx = fixture(true);
    let report = assemble(&fx.spec).unwrap();

    let root = &fx.spec.output_root;
    assert!(root.join("bin").join(LAUNCHER_BIN_NAME).is_file());
    assert!(root.join("bin").join(SLICER_BIN_NAME).is_file());
    assert!(root
        .join("lib")
        .join(SLICER_BIN_NAME)
        .join("libwebkit2gtk-4.1.so.0")
        .is_file());

    let desktop = root
        .join("share")
        .join("applications")
        .join("orca-slicer.desktop");
    assert!(desktop.is_file());
    let text = fs::read_to_string(&desktop).unwrap();
    assert!(text.starts_with("[Desktop Entry]"));
    assert!(text.contains("Exec=orcarun %U"));

    assert!(root
        .join("share")
        .join("icons")
        .join("hicolor")
        .join("scalable")
        .join("apps")
        .join("OrcaSlicer.svg")
        .is_file());
    assert_eq!(report.icons_copied, 2);
    assert_eq!(report.libraries, vec!["libwebkit2gtk-4.1.so.0".to_string()]);
}

#[test]
fn assemble_preserves_executable_bits() {
    let fx = fixture(false);
    assemble(&fx.spec).unwrap();

    let slicer = fx.spec.output_root.join("bin").join(SLICER_BIN_NAME);
    let mode = fs::metadata(&slicer).unwrap().permissions().mode();
    assert_ne!(mode & 0o111, 0, "installed slicer lost its execute bit");
}

#[test]
fn assemble_writes_a_parseable_manifest() {
    let fx = fixture(true);
    assemble(&fx.spec).unwrap();

    let manifest = fx.spec.output_root.join(MANIFEST_NAME);
    let text = fs::read_to_string(&manifest).unwrap();
    let value: toml::Value = text.parse().unwrap();
    assert!(value.get("generated_at").is_some());
    assert!(value.get("libraries").is_some());
}

#[test]
fn missing_icon_dir_skips_without_error() {
    let mut fx = fixture(false);
    fx.spec.icon_dir = Some(PathBuf::from("/nonexistent/orca-icons"));

    let report = assemble(&fx.spec).unwrap();
    assert_eq!(report.icons_copied, 0);
    assert!(!fx.spec.output_root.join("share").join("icons").exists());
}

#[test]
fn missing_upstream_binary_is_an_error() {
    let mut fx = fixture(false);
    fx.spec.upstream_bin = PathBuf::from("/nonexistent/orca-slicer");

    match assemble(&fx.spec) {
        Err(BundleError::UpstreamMissing { path }) => {
            assert_eq!(path, PathBuf::from("/nonexistent/orca-slicer"));
        }
        other => panic!("expected UpstreamMissing, got {:?}", other.map(|r| r.root)),
    }
}

#[test]
fn invalid_desktop_entry_is_rejected_before_any_copy() {
    let mut fx = fixture(false);
    fx.spec.desktop_entry.exec = String::new();

    assert!(matches!(
        assemble(&fx.spec),
        Err(BundleError::InvalidEntry(_))
    ));
    assert!(!fx.spec.output_root.exists());
}

#[test]
fn declared_but_missing_library_is_skipped() {
    let mut fx = fixture(false);
    fx.spec
        .libraries
        .push(PathBuf::from("/nonexistent/libmissing.so.9"));

    let report = assemble(&fx.spec).unwrap();
    assert_eq!(report.libraries, vec!["libwebkit2gtk-4.1.so.0".to_string()]);
}
