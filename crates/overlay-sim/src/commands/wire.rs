use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use overlay_graph::graph_to_json;
use overlay_sim::{build, TopologyConfig};
use tracing::info;

#[derive(Args, Debug)]
pub struct WireArgs {
    /// YAML topology configuration.
    #[arg(long)]
    pub config: PathBuf,
    /// Overrides the master seed from the config.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Writes the generated edge list as JSON to this path.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &WireArgs) -> Result<(), Box<dyn Error>> {
    let mut config = TopologyConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let wiring = build(&config)?;

    if let Some(out) = &args.out {
        if let Some(parent) = out.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(out, graph_to_json(&wiring.graph)?)?;
        info!(path = %out.display(), "wrote edge list");
    }

    println!("{}", serde_json::to_string_pretty(&wiring.report)?);
    Ok(())
}
