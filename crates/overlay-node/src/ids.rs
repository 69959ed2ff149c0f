use std::fmt;

use serde::{Deserialize, Serialize};

/// Durable identity of a peer, independent of its registry position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out strictly increasing [`NodeId`]s.
///
/// The allocator is owned by whoever creates nodes (normally a
/// [`Network`](crate::Network)) and is not synchronised: node creation is
/// expected to happen on a single thread.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Allocator whose first id is `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocator whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Returns a fresh id. Ids are never reused.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`IdAllocator::next_id`] will return.
    pub fn peek(&self) -> NodeId {
        NodeId(self.next)
    }
}
