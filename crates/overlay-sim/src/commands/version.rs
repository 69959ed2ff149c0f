use std::error::Error;

use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit JSON including the supported wiring kinds.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    wiring_kinds: [&'static str; 9],
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = VersionInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        wiring_kinds: [
            "ring_lattice",
            "star",
            "regular_rooted_tree",
            "hypercube",
            "watts_strogatz",
            "k_out",
            "scale_free_ba",
            "k_out_undirected",
            "wireless",
        ],
    };
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
