#![deny(missing_docs)]

//! Overlay topology generators over integer-indexed graphs.
//!
//! Generators take any [`overlay_core::Graph`] and add edges to it; the
//! crate also ships the default directed [`AdjacencyGraph`], an
//! [`Undirected`] insertion adapter, degree statistics and a canonical
//! structural hash used to check reproducibility.

mod adjacency;
pub mod generators;
mod hash;
mod matrix;
mod serialization;
mod stats;
mod undirected;

pub use adjacency::AdjacencyGraph;
pub use generators::{
    hypercube, k_out_directed, k_out_undirected, regular_rooted_tree, ring_lattice,
    scale_free_ba, scatter_positions, star, watts_strogatz, wireless_range, RegularityReport,
};
pub use hash::canonical_hash;
pub use serialization::{graph_from_json, graph_to_json, EdgeList};
pub use stats::DegreeSummary;
pub use undirected::Undirected;
