use std::collections::BTreeSet;

use overlay_core::errors::{ErrorInfo, OverlayError};
use overlay_core::Graph;

/// Directed graph over `0..n` backed by one sorted adjacency set per node.
///
/// Sorted sets keep neighbour iteration order independent of insertion
/// order, which makes hashing and serialized edge lists canonical.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyGraph {
    adjacency: Vec<BTreeSet<usize>>,
}

impl AdjacencyGraph {
    /// Creates a graph with `n` nodes and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); n],
        }
    }

    /// Builds a graph of `n` nodes from an edge list.
    pub fn from_edges(
        n: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, OverlayError> {
        let mut graph = Self::new(n);
        for (i, j) in edges {
            graph.try_set_edge(i, j)?;
        }
        Ok(graph)
    }

    /// Fallible variant of [`Graph::set_edge`] that validates both endpoints.
    pub fn try_set_edge(&mut self, i: usize, j: usize) -> Result<bool, OverlayError> {
        let n = self.adjacency.len();
        if i >= n || j >= n {
            return Err(OverlayError::Graph(
                ErrorInfo::new("index-out-of-range", "edge endpoint outside graph")
                    .with_context("source", i)
                    .with_context("target", j)
                    .with_context("size", n),
            ));
        }
        Ok(self.adjacency[i].insert(j))
    }

    /// Iterates over all directed edges in `(source, target)` order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, targets)| targets.iter().map(move |&j| (i, j)))
    }

    /// Returns the number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum()
    }

    /// Returns the in-degree of every node.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.adjacency.len()];
        for (_, j) in self.edges() {
            degrees[j] += 1;
        }
        degrees
    }

    /// Returns whether every edge has its reverse.
    pub fn is_symmetric(&self) -> bool {
        self.edges().all(|(i, j)| self.adjacency[j].contains(&i))
    }
}

impl Graph for AdjacencyGraph {
    fn size(&self) -> usize {
        self.adjacency.len()
    }

    fn set_edge(&mut self, i: usize, j: usize) -> bool {
        assert!(j < self.adjacency.len(), "edge target {j} outside graph");
        self.adjacency[i].insert(j)
    }

    fn is_edge(&self, i: usize, j: usize) -> bool {
        self.adjacency
            .get(i)
            .map(|targets| targets.contains(&j))
            .unwrap_or(false)
    }

    fn neighbours(&self, i: usize) -> Vec<usize> {
        self.adjacency[i].iter().copied().collect()
    }

    fn degree(&self, i: usize) -> usize {
        self.adjacency[i].len()
    }
}
