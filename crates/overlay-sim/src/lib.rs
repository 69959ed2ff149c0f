//! Config-driven wiring of overlay topologies onto a peer registry.

pub mod config;
pub mod driver;

pub use config::{TopologyConfig, WireStep};
pub use driver::{apply_step, build, Placement, StepOutcome, StepReport, Wiring, WiringReport};
