#![deny(missing_docs)]

//! Peers of an overlay simulation.
//!
//! A [`Node`] carries a durable [`NodeId`], a registry index, a fixed list of
//! protocol slots and a [`FailState`]. The [`Network`] registry keeps nodes
//! densely indexed, builds them from a [`NodePrototype`] and copies generated
//! topologies into their [`Linkable`] protocols.

mod fail_state;
mod ids;
mod network;
mod node;
mod protocol;

pub use fail_state::FailState;
pub use ids::{IdAllocator, NodeId};
pub use network::Network;
pub use node::{Node, NodePrototype};
pub use protocol::{Cleanable, Linkable, NeighbourList, Protocol};
