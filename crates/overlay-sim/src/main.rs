use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    version::{self, VersionArgs},
    wire::{self, WireArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "overlay-sim", about = "Overlay topology wiring CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a population from a YAML config and wire its topology.
    Wire(WireArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,overlay_sim=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Wire(args) => wire::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
