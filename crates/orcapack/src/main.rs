//! orcapack - assemble the OrcaSlicer bundle and diagnose the graphics stack

use anyhow::Result;
use clap::{Parser, Subcommand};
use orcapack::commands;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orcapack")]
#[command(about = "Orca Launcher - packaging and graphics diagnostics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the installable bundle tree
    Bundle {
        /// Output root of the bundle
        #[arg(long)]
        output: PathBuf,

        /// Upstream slicer binary (defaults to the configured slicer_bin)
        #[arg(long)]
        upstream: Option<PathBuf>,

        /// Launcher binary to install (defaults to the orcarun next to this
        /// executable)
        #[arg(long)]
        launcher: Option<PathBuf>,

        /// Icon tree to install (defaults to the configured icon_dir)
        #[arg(long)]
        icons: Option<PathBuf>,
    },

    /// Emit the freedesktop .desktop entry
    DesktopEntry {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the detected session and the environment plan
    Probe {
        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },

    /// Check the graphics diagnostic toolchain
    Doctor {
        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("ORCA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bundle {
            output,
            upstream,
            launcher,
            icons,
        } => commands::bundle::run(output, upstream, launcher, icons),
        Commands::DesktopEntry { output } => commands::desktop::run(output),
        Commands::Probe { json } => commands::probe::run(json),
        Commands::Doctor { json } => commands::doctor::run(json),
    }
}
