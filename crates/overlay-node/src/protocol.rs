//! Protocol slots and the optional capabilities a protocol can expose.

use std::fmt;

use crate::ids::NodeId;

/// A protocol module instance living in one slot of a [`Node`](crate::Node).
///
/// Optional capabilities are discovered through explicit queries
/// ([`Protocol::cleanable`], [`Protocol::linkable`]) that return `None` unless
/// the implementation opts in.
pub trait Protocol: fmt::Debug + Send {
    /// Short name used in logs and node dumps.
    fn name(&self) -> &str;

    /// Executes one step for the node `node`, where this instance sits in `slot`.
    fn step(&mut self, node: NodeId, slot: usize);

    /// Deep copy used when nodes are built from a prototype or cloned.
    fn box_clone(&self) -> Box<dyn Protocol>;

    /// Cleanup capability, invoked once when the owning node dies.
    fn cleanable(&mut self) -> Option<&mut dyn Cleanable> {
        None
    }

    /// Neighbour-set capability, used to receive wiring.
    fn linkable(&mut self) -> Option<&mut dyn Linkable> {
        None
    }

    /// Read-only view of the neighbour-set capability; `Some` exactly when
    /// [`Protocol::linkable`] is.
    fn linkable_ref(&self) -> Option<&dyn Linkable> {
        None
    }
}

impl Clone for Box<dyn Protocol> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// Protocols that release resources when their node dies.
pub trait Cleanable {
    /// Called exactly once, on the transition to `DEAD`.
    fn on_kill(&mut self);
}

/// Protocols that hold a set of neighbouring peers.
pub trait Linkable {
    /// Adds `peer`. Returns `false` if it was already a neighbour.
    fn add_neighbour(&mut self, peer: NodeId) -> bool;

    /// Returns whether `peer` is a neighbour.
    fn contains(&self, peer: NodeId) -> bool;

    /// Number of neighbours.
    fn degree(&self) -> usize;

    /// The `i`-th neighbour in insertion order.
    fn neighbour(&self, i: usize) -> Option<NodeId>;
}

/// Plain neighbour list that drivers wire topologies into.
///
/// It does nothing on `step` and forgets its neighbours when the node dies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighbourList {
    neighbours: Vec<NodeId>,
}

impl NeighbourList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Neighbours in insertion order.
    pub fn neighbours(&self) -> &[NodeId] {
        &self.neighbours
    }
}

impl Protocol for NeighbourList {
    fn name(&self) -> &str {
        "neighbour-list"
    }

    fn step(&mut self, _node: NodeId, _slot: usize) {}

    fn box_clone(&self) -> Box<dyn Protocol> {
        Box::new(self.clone())
    }

    fn cleanable(&mut self) -> Option<&mut dyn Cleanable> {
        Some(self)
    }

    fn linkable(&mut self) -> Option<&mut dyn Linkable> {
        Some(self)
    }

    fn linkable_ref(&self) -> Option<&dyn Linkable> {
        Some(self)
    }
}

impl Cleanable for NeighbourList {
    fn on_kill(&mut self) {
        self.neighbours.clear();
    }
}

impl Linkable for NeighbourList {
    fn add_neighbour(&mut self, peer: NodeId) -> bool {
        if self.neighbours.contains(&peer) {
            return false;
        }
        self.neighbours.push(peer);
        true
    }

    fn contains(&self, peer: NodeId) -> bool {
        self.neighbours.contains(&peer)
    }

    fn degree(&self) -> usize {
        self.neighbours.len()
    }

    fn neighbour(&self, i: usize) -> Option<NodeId> {
        self.neighbours.get(i).copied()
    }
}
