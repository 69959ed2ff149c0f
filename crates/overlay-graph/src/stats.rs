use overlay_core::Graph;
use serde::{Deserialize, Serialize};

use crate::adjacency::AdjacencyGraph;

/// Degree statistics of a generated topology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeSummary {
    /// Number of nodes.
    pub nodes: usize,
    /// Number of directed edges.
    pub edges: usize,
    /// Smallest out-degree, zero for an empty graph.
    pub min_out_degree: usize,
    /// Largest out-degree, zero for an empty graph.
    pub max_out_degree: usize,
    /// Mean out-degree, zero for an empty graph.
    pub mean_out_degree: f64,
    /// Largest in-degree, zero for an empty graph.
    pub max_in_degree: usize,
    /// Number of `i -> i` edges.
    pub self_loops: usize,
    /// Whether every edge has its reverse.
    pub symmetric: bool,
}

impl DegreeSummary {
    /// Summarises `graph`.
    pub fn of(graph: &AdjacencyGraph) -> Self {
        let n = graph.size();
        let out: Vec<usize> = (0..n).map(|i| graph.degree(i)).collect();
        let edges = graph.edge_count();
        Self {
            nodes: n,
            edges,
            min_out_degree: out.iter().copied().min().unwrap_or(0),
            max_out_degree: out.iter().copied().max().unwrap_or(0),
            mean_out_degree: if n == 0 { 0.0 } else { edges as f64 / n as f64 },
            max_in_degree: graph.in_degrees().into_iter().max().unwrap_or(0),
            self_loops: (0..n).filter(|&i| graph.is_edge(i, i)).count(),
            symmetric: graph.is_symmetric(),
        }
    }

    /// Histogram of out-degrees: entry `d` counts the nodes with out-degree `d`.
    pub fn out_degree_histogram(graph: &AdjacencyGraph) -> Vec<usize> {
        let mut histogram = Vec::new();
        for i in 0..graph.size() {
            let degree = graph.degree(i);
            if histogram.len() <= degree {
                histogram.resize(degree + 1, 0);
            }
            histogram[degree] += 1;
        }
        histogram
    }
}
