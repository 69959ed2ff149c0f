//! Topology generators.
//!
//! Every generator adds edges to the graph it is handed and never removes
//! any, so generators can be layered onto the same graph. Randomized
//! generators consume their [`RandomSource`](overlay_core::RandomSource) in a
//! fixed order: same seed and parameters, same graph.

mod lattice;
mod random;
mod regular;
mod scale_free;
mod small_world;
mod wireless;

pub use lattice::{hypercube, regular_rooted_tree, ring_lattice, star};
pub use random::k_out_directed;
pub use regular::{k_out_undirected, RegularityReport};
pub use scale_free::scale_free_ba;
pub use small_world::watts_strogatz;
pub use wireless::{scatter_positions, wireless_range};
