use overlay_core::Graph;
use sha2::{Digest, Sha256};

use crate::adjacency::AdjacencyGraph;

/// Computes the canonical structural hash for the provided graph.
///
/// The digest covers the node count and the sorted edge list, so two graphs
/// hash equal exactly when they have the same size and the same edges.
pub fn canonical_hash(graph: &AdjacencyGraph) -> String {
    let mut hasher = Sha256::new();
    hasher.update((graph.size() as u64).to_le_bytes());
    hasher.update((graph.edge_count() as u64).to_le_bytes());
    for (i, j) in graph.edges() {
        hasher.update((i as u64).to_le_bytes());
        hasher.update((j as u64).to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}
