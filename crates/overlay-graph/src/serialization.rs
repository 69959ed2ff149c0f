use overlay_core::errors::{ErrorInfo, OverlayError};
use overlay_core::Graph;
use serde::{Deserialize, Serialize};

use crate::adjacency::AdjacencyGraph;

/// Serializes the graph to a JSON edge list.
pub fn graph_to_json(graph: &AdjacencyGraph) -> Result<String, OverlayError> {
    let serializable = EdgeList::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| OverlayError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON edge list.
pub fn graph_from_json(json: &str) -> Result<AdjacencyGraph, OverlayError> {
    let serializable: EdgeList = serde_json::from_str(json)
        .map_err(|err| OverlayError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

/// Plain edge-list form of an [`AdjacencyGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeList {
    /// Number of nodes.
    pub nodes: usize,
    /// Directed edges as `[source, target]` pairs, sorted.
    pub edges: Vec<(usize, usize)>,
}

impl EdgeList {
    /// Captures the edges of `graph`.
    pub fn from_graph(graph: &AdjacencyGraph) -> Self {
        Self {
            nodes: graph.size(),
            edges: graph.edges().collect(),
        }
    }

    /// Rebuilds the graph, rejecting endpoints outside `0..nodes`.
    pub fn into_graph(self) -> Result<AdjacencyGraph, OverlayError> {
        AdjacencyGraph::from_edges(self.nodes, self.edges)
    }
}
