#![deny(missing_docs)]
#![doc = "Core contracts shared by the overlay topology engine: the graph interface consumed by generators, the deterministic randomness contract and the structured error type."]

pub mod errors;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, OverlayError};
pub use rng::{derive_substream_seed, RandomSource, RngHandle};
pub use types::Position;

/// Adjacency structure over the node indices `0..size()`.
///
/// Edges are directed. Undirected topologies are expressed by the caller
/// inserting both `(i, j)` and `(j, i)`. The node count is fixed for the
/// lifetime of a generation call.
pub trait Graph {
    /// Returns the fixed number of nodes.
    fn size(&self) -> usize;

    /// Adds the directed edge `i -> j`.
    ///
    /// Returns `true` when the edge was not present before. Inserting an
    /// existing edge is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not below [`Graph::size`].
    fn set_edge(&mut self, i: usize, j: usize) -> bool;

    /// Returns whether the directed edge `i -> j` exists.
    fn is_edge(&self, i: usize, j: usize) -> bool;

    /// Returns the targets of the edges leaving `i`, in ascending order.
    fn neighbours(&self, i: usize) -> Vec<usize>;

    /// Returns the out-degree of `i`.
    fn degree(&self, i: usize) -> usize {
        self.neighbours(i).len()
    }
}

impl<G: Graph + ?Sized> Graph for &mut G {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn set_edge(&mut self, i: usize, j: usize) -> bool {
        (**self).set_edge(i, j)
    }

    fn is_edge(&self, i: usize, j: usize) -> bool {
        (**self).is_edge(i, j)
    }

    fn neighbours(&self, i: usize) -> Vec<usize> {
        (**self).neighbours(i)
    }

    fn degree(&self, i: usize) -> usize {
        (**self).degree(i)
    }
}
