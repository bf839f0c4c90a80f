//! Launcher wrapper for OrcaSlicer.
//!
//! The binary probes the graphics session, prints what it decided, then
//! replaces itself with the real slicer. All launch mechanics live in
//! [`launch`] so they stay testable without exec'ing anything.

pub mod launch;
