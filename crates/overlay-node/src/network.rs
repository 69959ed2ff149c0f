use std::ops::Range;

use overlay_core::errors::{ErrorInfo, OverlayError};
use overlay_core::Graph;
use tracing::debug;

use crate::fail_state::FailState;
use crate::ids::{IdAllocator, NodeId};
use crate::node::{Node, NodePrototype};
use crate::protocol::Linkable;

/// Registry of active peers.
///
/// Nodes sit at dense indices `0..len()` and each node's own index is kept in
/// sync with its position. Removal swaps the last node into the hole, so
/// indices change over time while ids never do. The registry owns the id
/// allocator, so every node it creates or clones gets a fresh id.
#[derive(Debug)]
pub struct Network {
    nodes: Vec<Node>,
    ids: IdAllocator,
    prototype: NodePrototype,
}

impl Network {
    /// Empty registry creating nodes from `prototype`.
    pub fn new(prototype: NodePrototype) -> Self {
        Self::with_allocator(prototype, IdAllocator::new())
    }

    /// Empty registry drawing ids from `ids`.
    pub fn with_allocator(prototype: NodePrototype, ids: IdAllocator) -> Self {
        Self {
            nodes: Vec::new(),
            ids,
            prototype,
        }
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at `index`.
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Mutable node at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    /// Nodes in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Mutable nodes in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    /// Index of the node with id `id`.
    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|node| node.id() == id)
    }

    /// Creates `count` nodes from the prototype and returns their indices.
    pub fn grow(&mut self, count: usize) -> Range<usize> {
        let start = self.nodes.len();
        self.nodes.reserve(count);
        for _ in 0..count {
            let node = Node::from_prototype(&self.prototype, &mut self.ids);
            self.push(node);
        }
        start..self.nodes.len()
    }

    /// Appends a clone of the node at `index` and returns the clone's index.
    ///
    /// Fails for unknown indices and for nodes that were killed in place.
    pub fn clone_node(&mut self, index: usize) -> Result<usize, OverlayError> {
        let source = self.nodes.get(index).ok_or_else(|| unknown_index(index, self.nodes.len()))?;
        let copy = source.duplicate(&mut self.ids)?;
        Ok(self.push(copy))
    }

    /// Removes the node at `index`; the last node takes its place.
    pub fn remove(&mut self, index: usize) -> Result<Node, OverlayError> {
        if index >= self.nodes.len() {
            return Err(unknown_index(index, self.nodes.len()));
        }
        let mut removed = self.nodes.swap_remove(index);
        removed.clear_index();
        if let Some(moved) = self.nodes.get_mut(index) {
            if !moved.is_dead() {
                moved.assign_index(index);
            }
        }
        Ok(removed)
    }

    /// Kills the node at `index` and removes it from the registry.
    pub fn kill(&mut self, index: usize) -> Result<Node, OverlayError> {
        let len = self.nodes.len();
        let node = self.nodes.get_mut(index).ok_or_else(|| unknown_index(index, len))?;
        node.set_fail_state(FailState::Dead)?;
        self.remove(index)
    }

    /// Removes every node that was put to `DEAD` in place, returning them.
    pub fn remove_dead(&mut self) -> Vec<Node> {
        let mut removed = Vec::new();
        let mut index = 0;
        while index < self.nodes.len() {
            if self.nodes[index].is_dead() {
                removed.extend(self.remove(index).ok());
            } else {
                index += 1;
            }
        }
        removed
    }

    /// Copies the edges of `graph` into the linkable protocol at `slot`.
    ///
    /// Graph index `i` is the node at registry index `i`; every edge `i -> j`
    /// adds node `j`'s id to node `i`'s neighbours. Returns the number of
    /// links that were new.
    ///
    /// Every node is checked before any link is added: a size mismatch, a
    /// node killed in place or a slot without the linkable capability leaves
    /// all neighbour sets untouched.
    pub fn wire<G: Graph + ?Sized>(&mut self, slot: usize, graph: &G) -> Result<usize, OverlayError> {
        if graph.size() != self.nodes.len() {
            return Err(OverlayError::Graph(
                ErrorInfo::new("size-mismatch", "graph and registry sizes differ")
                    .with_context("graph", graph.size())
                    .with_context("registry", self.nodes.len()),
            ));
        }
        for node in &self.nodes {
            check_linkable(node, slot)?;
        }

        let ids: Vec<NodeId> = self.nodes.iter().map(Node::id).collect();
        let mut added = 0;
        for (i, node) in self.nodes.iter_mut().enumerate() {
            let linkable = linkable_at(node, slot)?;
            for j in graph.neighbours(i) {
                if linkable.add_neighbour(ids[j]) {
                    added += 1;
                }
            }
        }
        debug!(slot, links = added, "wired graph into registry");
        Ok(added)
    }

    fn push(&mut self, mut node: Node) -> usize {
        let index = self.nodes.len();
        if !node.is_dead() {
            node.assign_index(index);
        }
        self.nodes.push(node);
        index
    }
}

fn check_linkable(node: &Node, slot: usize) -> Result<(), OverlayError> {
    if node.is_dead() {
        return Err(OverlayError::Transition(
            ErrorInfo::new("node-dead", "cannot wire a DEAD node")
                .with_context("node", node.id())
                .with_hint("remove dead nodes before wiring"),
        ));
    }
    match node.protocol(slot).and_then(|protocol| protocol.linkable_ref()) {
        Some(_) => Ok(()),
        None => Err(not_linkable(node.id(), slot)),
    }
}

fn linkable_at(node: &mut Node, slot: usize) -> Result<&mut dyn Linkable, OverlayError> {
    let id = node.id();
    node.protocol_mut(slot)
        .and_then(|protocol| protocol.linkable())
        .ok_or_else(|| not_linkable(id, slot))
}

fn not_linkable(node: NodeId, slot: usize) -> OverlayError {
    OverlayError::Config(
        ErrorInfo::new("protocol-not-linkable", "slot cannot hold neighbours")
            .with_context("slot", slot)
            .with_context("node", node),
    )
}

fn unknown_index(index: usize, len: usize) -> OverlayError {
    OverlayError::Graph(
        ErrorInfo::new("unknown-index", "no node at this registry index")
            .with_context("index", index)
            .with_context("len", len),
    )
}
