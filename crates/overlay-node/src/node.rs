use std::fmt;

use overlay_core::errors::{ErrorInfo, OverlayError};
use overlay_core::Position;
use tracing::debug;

use crate::fail_state::FailState;
use crate::ids::{IdAllocator, NodeId};
use crate::protocol::Protocol;

/// Ordered protocol prototypes, one per slot, from which nodes are built.
#[derive(Debug, Clone, Default)]
pub struct NodePrototype {
    protocols: Vec<Box<dyn Protocol>>,
}

impl NodePrototype {
    /// Prototype without protocol slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot holding `protocol`.
    pub fn with_protocol(mut self, protocol: impl Protocol + 'static) -> Self {
        self.protocols.push(Box::new(protocol));
        self
    }

    /// Number of slots.
    pub fn slots(&self) -> usize {
        self.protocols.len()
    }
}

/// One simulated peer.
///
/// The id is fixed at construction. The registry index, position and range
/// can change while the node is alive; once it is `DEAD` they are frozen and
/// the index is gone.
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    index: Option<usize>,
    protocols: Vec<Box<dyn Protocol>>,
    fail_state: FailState,
    position: Option<Position>,
    range: Option<u64>,
}

impl Node {
    /// Builds a node with a fresh id and a deep copy of every prototype slot.
    pub fn from_prototype(prototype: &NodePrototype, ids: &mut IdAllocator) -> Self {
        Self::with_protocols(ids.next_id(), prototype.protocols.clone())
    }

    /// Produces an independent peer with the same protocol configuration.
    ///
    /// The copy gets a fresh id, deep copies of every protocol and the same
    /// fail state, with no registry index, position or range. Dead nodes
    /// cannot be duplicated.
    pub fn duplicate(&self, ids: &mut IdAllocator) -> Result<Self, OverlayError> {
        self.ensure_alive("duplicate")?;
        let mut copy = Self::with_protocols(ids.next_id(), self.protocols.clone());
        copy.fail_state = self.fail_state;
        Ok(copy)
    }

    fn with_protocols(id: NodeId, protocols: Vec<Box<dyn Protocol>>) -> Self {
        Self {
            id,
            index: None,
            protocols,
            fail_state: FailState::Ok,
            position: None,
            range: None,
        }
    }

    /// Durable identity.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Current registry index, `None` outside a registry or once dead.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Moves the node to registry position `index`.
    pub fn set_index(&mut self, index: usize) -> Result<(), OverlayError> {
        self.ensure_alive("set index")?;
        self.index = Some(index);
        Ok(())
    }

    pub(crate) fn assign_index(&mut self, index: usize) {
        self.index = Some(index);
    }

    pub(crate) fn clear_index(&mut self) {
        self.index = None;
    }

    /// Current fail state.
    pub fn fail_state(&self) -> FailState {
        self.fail_state
    }

    /// True iff the node is `OK`.
    pub fn is_up(&self) -> bool {
        self.fail_state == FailState::Ok
    }

    /// True iff the node is `DEAD`.
    pub fn is_dead(&self) -> bool {
        self.fail_state == FailState::Dead
    }

    /// Applies a fail-state transition.
    ///
    /// `OK` and `DOWN` switch freely. Entering `DEAD` drops the index and
    /// runs the cleanup hook of every cleanable protocol once, in slot order.
    /// A dead node only accepts `DEAD` again, which is a no-op; anything else
    /// is rejected and leaves the state untouched.
    pub fn set_fail_state(&mut self, next: FailState) -> Result<(), OverlayError> {
        match (self.fail_state, next) {
            (FailState::Dead, FailState::Dead) => Ok(()),
            (FailState::Dead, _) => Err(OverlayError::Transition(
                ErrorInfo::new("node-dead", "cannot change fail state: node is already DEAD")
                    .with_context("node", self.id)
                    .with_context("requested", next),
            )),
            (_, FailState::Dead) => {
                self.index = None;
                self.fail_state = FailState::Dead;
                for protocol in &mut self.protocols {
                    if let Some(cleanable) = protocol.cleanable() {
                        cleanable.on_kill();
                    }
                }
                debug!(node = self.id.as_raw(), "node died");
                Ok(())
            }
            (_, state) => {
                self.fail_state = state;
                Ok(())
            }
        }
    }

    /// Applies a transition given as a numeric state code.
    pub fn set_fail_state_code(&mut self, code: i32) -> Result<(), OverlayError> {
        let next = FailState::try_from(code)?;
        self.set_fail_state(next)
    }

    /// Protocol in `slot`.
    pub fn protocol(&self, slot: usize) -> Option<&dyn Protocol> {
        self.protocols.get(slot).map(|protocol| protocol.as_ref())
    }

    /// Mutable protocol in `slot`; `None` once the node is dead.
    pub fn protocol_mut(&mut self, slot: usize) -> Option<&mut dyn Protocol> {
        if self.is_dead() {
            return None;
        }
        match self.protocols.get_mut(slot) {
            Some(protocol) => Some(protocol.as_mut()),
            None => None,
        }
    }

    /// Number of protocol slots.
    pub fn protocol_count(&self) -> usize {
        self.protocols.len()
    }

    /// Position on the simulated plane, if placed.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Places the node.
    pub fn set_position(&mut self, position: Position) -> Result<(), OverlayError> {
        self.ensure_alive("set position")?;
        self.position = Some(position);
        Ok(())
    }

    /// Transmission radius, if configured.
    pub fn range(&self) -> Option<u64> {
        self.range
    }

    /// Sets the transmission radius.
    pub fn set_range(&mut self, range: u64) -> Result<(), OverlayError> {
        self.ensure_alive("set range")?;
        self.range = Some(range);
        Ok(())
    }

    fn ensure_alive(&self, operation: &str) -> Result<(), OverlayError> {
        if self.is_dead() {
            return Err(OverlayError::Transition(
                ErrorInfo::new("node-dead", format!("cannot {operation} on a DEAD node"))
                    .with_context("node", self.id),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {} index: ", self.id)?;
        match self.index {
            Some(index) => write!(f, "{index}")?,
            None => write!(f, "-")?,
        }
        write!(f, " state: {}", self.fail_state)?;
        if let Some(position) = self.position {
            write!(f, " position: ({},{})", position.x, position.y)?;
        }
        if let Some(range) = self.range {
            write!(f, " range: {range}")?;
        }
        writeln!(f)?;
        for (slot, protocol) in self.protocols.iter().enumerate() {
            writeln!(f, "protocol[{slot}]={}", protocol.name())?;
        }
        Ok(())
    }
}
