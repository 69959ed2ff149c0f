use std::fs;
use std::path::Path;

use overlay_core::errors::{ErrorInfo, OverlayError};
use serde::{Deserialize, Serialize};

/// YAML description of a population and the topology steps wired onto it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopologyConfig {
    /// Population size.
    pub nodes: usize,
    /// Master seed; step `i` draws from substream `i`.
    #[serde(default)]
    pub seed: u64,
    /// Steps applied in order onto the same graph.
    #[serde(default)]
    pub wiring: Vec<WireStep>,
}

impl TopologyConfig {
    /// Parses a YAML document.
    pub fn from_yaml_str(contents: &str) -> Result<Self, OverlayError> {
        serde_yaml::from_str(contents).map_err(|err| {
            OverlayError::Config(
                ErrorInfo::new("invalid-config", err.to_string())
                    .with_hint("check `nodes`, `seed` and the `kind` of every wiring step"),
            )
        })
    }

    /// Reads and parses the YAML file at `path`.
    pub fn load(path: &Path) -> Result<Self, OverlayError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            OverlayError::Io(
                ErrorInfo::new("read-config", err.to_string()).with_context("path", path.display()),
            )
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Renders the configuration back to YAML.
    pub fn to_yaml_string(&self) -> Result<String, OverlayError> {
        serde_yaml::to_string(self)
            .map_err(|err| OverlayError::Serde(ErrorInfo::new("serialize-yaml", err.to_string())))
    }
}

/// One topology generator invocation.
///
/// `undirected: true` routes the generator's edges through the
/// [`Undirected`](overlay_graph::Undirected) adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WireStep {
    /// [`overlay_graph::ring_lattice`].
    RingLattice {
        /// Neighbours per node.
        k: usize,
        /// Insert reverse edges too.
        #[serde(default)]
        undirected: bool,
    },
    /// [`overlay_graph::star`].
    Star {
        /// Insert reverse edges too.
        #[serde(default)]
        undirected: bool,
    },
    /// [`overlay_graph::regular_rooted_tree`].
    RegularRootedTree {
        /// Children per inner node.
        k: usize,
        /// Insert reverse edges too.
        #[serde(default)]
        undirected: bool,
    },
    /// [`overlay_graph::hypercube`].
    Hypercube {
        /// Insert reverse edges too.
        #[serde(default)]
        undirected: bool,
    },
    /// [`overlay_graph::watts_strogatz`].
    WattsStrogatz {
        /// Lattice degree.
        k: usize,
        /// Rewiring probability.
        p: f64,
        /// Insert reverse edges too.
        #[serde(default)]
        undirected: bool,
    },
    /// [`overlay_graph::k_out_directed`].
    KOut {
        /// Out-links per node.
        k: usize,
        /// Insert reverse edges too.
        #[serde(default)]
        undirected: bool,
    },
    /// [`overlay_graph::scale_free_ba`].
    ScaleFreeBa {
        /// Links per joining node.
        k: usize,
        /// Insert reverse edges too.
        #[serde(default)]
        undirected: bool,
    },
    /// [`overlay_graph::k_out_undirected`], symmetric by construction.
    KOutUndirected {
        /// Target degree.
        k: usize,
    },
    /// [`overlay_graph::scatter_positions`] followed by
    /// [`overlay_graph::wireless_range`].
    Wireless {
        /// Link cap per node, `0` for none.
        #[serde(default)]
        k: usize,
        /// Width of the placement region.
        x_region: u64,
        /// Height of the placement region.
        y_region: u64,
        /// Radio range.
        range: u64,
        /// Insert reverse edges too.
        #[serde(default)]
        undirected: bool,
    },
}

impl WireStep {
    /// The `kind` tag of the step.
    pub fn kind(&self) -> &'static str {
        match self {
            WireStep::RingLattice { .. } => "ring_lattice",
            WireStep::Star { .. } => "star",
            WireStep::RegularRootedTree { .. } => "regular_rooted_tree",
            WireStep::Hypercube { .. } => "hypercube",
            WireStep::WattsStrogatz { .. } => "watts_strogatz",
            WireStep::KOut { .. } => "k_out",
            WireStep::ScaleFreeBa { .. } => "scale_free_ba",
            WireStep::KOutUndirected { .. } => "k_out_undirected",
            WireStep::Wireless { .. } => "wireless",
        }
    }

    /// Whether edges go through the undirected adapter.
    pub fn undirected(&self) -> bool {
        match *self {
            WireStep::RingLattice { undirected, .. }
            | WireStep::Star { undirected }
            | WireStep::RegularRootedTree { undirected, .. }
            | WireStep::Hypercube { undirected }
            | WireStep::WattsStrogatz { undirected, .. }
            | WireStep::KOut { undirected, .. }
            | WireStep::ScaleFreeBa { undirected, .. }
            | WireStep::Wireless { undirected, .. } => undirected,
            WireStep::KOutUndirected { .. } => false,
        }
    }
}
