//! Packaging and diagnostics CLI for the Orca launcher.

pub mod commands;
