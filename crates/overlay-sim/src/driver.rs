use overlay_core::errors::OverlayError;
use overlay_core::{Graph, Position, RngHandle};
use overlay_graph::{
    canonical_hash, hypercube, k_out_directed, k_out_undirected, regular_rooted_tree,
    ring_lattice, scale_free_ba, scatter_positions, star, watts_strogatz, wireless_range,
    AdjacencyGraph, DegreeSummary, RegularityReport, Undirected,
};
use overlay_node::{NeighbourList, Network, NodePrototype};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{TopologyConfig, WireStep};

/// What one wiring step did to the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Position of the step in the config.
    pub index: usize,
    /// The step's `kind` tag.
    pub kind: String,
    /// Whether reverse edges were inserted.
    pub undirected: bool,
    /// Directed edges that were not present before the step.
    pub edges_added: usize,
    /// Deviation report of `k_out_undirected` steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regularity: Option<RegularityReport>,
}

/// Summary of a full wiring run, printed by `overlay-sim wire`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WiringReport {
    /// Master seed the steps were derived from.
    pub seed: u64,
    /// Population size.
    pub nodes: usize,
    /// Neighbour links written into the registry.
    pub links: usize,
    /// Canonical hash of the final graph.
    pub hash: String,
    /// Degree statistics of the final graph.
    pub summary: DegreeSummary,
    /// One entry per step, in application order.
    pub steps: Vec<StepReport>,
}

/// Placement drawn by a wireless step.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// One position per node index.
    pub positions: Vec<Position>,
    /// Radio range shared by every node.
    pub range: u64,
}

/// Side results of [`apply_step`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutcome {
    /// Set by `k_out_undirected`.
    pub regularity: Option<RegularityReport>,
    /// Set by `wireless`.
    pub placement: Option<Placement>,
}

/// A wired population together with its graph and report.
#[derive(Debug)]
pub struct Wiring {
    /// The generated topology.
    pub graph: AdjacencyGraph,
    /// Peers whose neighbour lists hold the topology.
    pub network: Network,
    /// Run summary.
    pub report: WiringReport,
}

/// Runs one generator against `graph`, drawing from `rng`.
pub fn apply_step<G: Graph + ?Sized>(
    graph: &mut G,
    step: &WireStep,
    rng: &mut RngHandle,
) -> Result<StepOutcome, OverlayError> {
    let mut outcome = StepOutcome::default();
    match *step {
        WireStep::RingLattice { k, .. } => ring_lattice(graph, k)?,
        WireStep::Star { .. } => star(graph),
        WireStep::RegularRootedTree { k, .. } => regular_rooted_tree(graph, k),
        WireStep::Hypercube { .. } => hypercube(graph),
        WireStep::WattsStrogatz { k, p, .. } => watts_strogatz(graph, k, p, rng)?,
        WireStep::KOut { k, .. } => k_out_directed(graph, k, rng),
        WireStep::ScaleFreeBa { k, .. } => scale_free_ba(graph, k, rng),
        WireStep::KOutUndirected { k } => {
            outcome.regularity = Some(k_out_undirected(graph, k, rng));
        }
        WireStep::Wireless {
            k,
            x_region,
            y_region,
            range,
            ..
        } => {
            let positions = scatter_positions(graph.size(), x_region, y_region, rng)?;
            wireless_range(graph, &positions, range, k)?;
            outcome.placement = Some(Placement { positions, range });
        }
    }
    Ok(outcome)
}

/// Builds the population described by `config` and wires every step into
/// slot 0 of its nodes.
///
/// Step `i` draws from `RngHandle::substream(config.seed, i)`, so adding a
/// step never changes what the earlier ones produce.
pub fn build(config: &TopologyConfig) -> Result<Wiring, OverlayError> {
    let mut graph = AdjacencyGraph::new(config.nodes);
    let mut network = Network::new(NodePrototype::new().with_protocol(NeighbourList::new()));
    network.grow(config.nodes);

    let mut steps = Vec::with_capacity(config.wiring.len());
    for (index, step) in config.wiring.iter().enumerate() {
        let mut rng = RngHandle::substream(config.seed, index as u64);
        let before = graph.edge_count();
        let outcome = if step.undirected() {
            apply_step(&mut Undirected::new(&mut graph), step, &mut rng)?
        } else {
            apply_step(&mut graph, step, &mut rng)?
        };
        if let Some(placement) = &outcome.placement {
            for (node, position) in network.iter_mut().zip(&placement.positions) {
                node.set_position(*position)?;
                node.set_range(placement.range)?;
            }
        }
        let edges_added = graph.edge_count() - before;
        info!(step = index, kind = step.kind(), edges_added, "applied wiring step");
        steps.push(StepReport {
            index,
            kind: step.kind().to_string(),
            undirected: step.undirected(),
            edges_added,
            regularity: outcome.regularity,
        });
    }

    let links = network.wire(0, &graph)?;
    let report = WiringReport {
        seed: config.seed,
        nodes: config.nodes,
        links,
        hash: canonical_hash(&graph),
        summary: DegreeSummary::of(&graph),
        steps,
    };
    info!(nodes = report.nodes, edges = report.summary.edges, hash = %report.hash, "wiring complete");
    Ok(Wiring {
        graph,
        network,
        report,
    })
}
