use std::fs;

use overlay_core::errors::OverlayError;
use overlay_core::Graph;
use overlay_node::Linkable;
use overlay_sim::{build, TopologyConfig, WireStep};

const MIXED: &str = r#"
nodes: 120
seed: 42
wiring:
  - kind: scale_free_ba
    k: 3
  - kind: k_out
    k: 4
    undirected: true
  - kind: wireless
    x_region: 1000
    y_region: 1000
    range: 120
"#;

fn config(nodes: usize, seed: u64, wiring: Vec<WireStep>) -> TopologyConfig {
    TopologyConfig {
        nodes,
        seed,
        wiring,
    }
}

#[test]
fn yaml_fills_defaults() {
    let config = TopologyConfig::from_yaml_str(MIXED).unwrap();
    assert_eq!(config.nodes, 120);
    assert_eq!(config.seed, 42);
    assert_eq!(
        config.wiring,
        vec![
            WireStep::ScaleFreeBa {
                k: 3,
                undirected: false
            },
            WireStep::KOut {
                k: 4,
                undirected: true
            },
            WireStep::Wireless {
                k: 0,
                x_region: 1000,
                y_region: 1000,
                range: 120,
                undirected: false
            },
        ]
    );

    let bare = TopologyConfig::from_yaml_str("nodes: 3\n").unwrap();
    assert_eq!(bare.seed, 0);
    assert!(bare.wiring.is_empty());
}

#[test]
fn yaml_round_trips() {
    let config = TopologyConfig::from_yaml_str(MIXED).unwrap();
    let rendered = config.to_yaml_string().unwrap();
    assert_eq!(TopologyConfig::from_yaml_str(&rendered).unwrap(), config);
}

#[test]
fn malformed_configs_are_config_errors() {
    let cases = [
        "nodes: 10\nwiring:\n  - kind: moebius\n",
        "nodes: 10\nwiring:\n  - kind: k_out\n    k: -2\n",
        "nodes: 10\nwiring:\n  - kind: ring_lattice\n    k: 1.5\n",
        "nodes: 10\ncolour: blue\n",
    ];
    for yaml in cases {
        match TopologyConfig::from_yaml_str(yaml) {
            Err(OverlayError::Config(info)) => assert_eq!(info.code, "invalid-config"),
            other => panic!("unexpected result for {yaml:?}: {other:?}"),
        }
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    assert!(matches!(TopologyConfig::load(&path), Err(OverlayError::Io(_))));
}

#[test]
fn load_reads_yaml_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("topology.yaml");
    fs::write(&path, MIXED).unwrap();
    let config = TopologyConfig::load(&path).unwrap();
    assert_eq!(config.wiring.len(), 3);
}

#[test]
fn same_seed_same_topology() {
    let config = TopologyConfig::from_yaml_str(MIXED).unwrap();
    let first = build(&config).unwrap();
    let second = build(&config).unwrap();
    assert_eq!(first.report, second.report);
    assert_eq!(first.graph, second.graph);

    let mut reseeded = config.clone();
    reseeded.seed = 43;
    assert_ne!(build(&reseeded).unwrap().report.hash, first.report.hash);
}

#[test]
fn later_steps_do_not_disturb_earlier_ones() {
    let k_out = WireStep::KOut {
        k: 3,
        undirected: false,
    };
    let alone = build(&config(50, 7, vec![k_out.clone()])).unwrap();
    let layered = build(&config(50, 7, vec![k_out, WireStep::Star { undirected: false }])).unwrap();
    for (i, j) in alone.graph.edges() {
        assert!(layered.graph.is_edge(i, j));
    }
    assert_eq!(alone.report.steps[0], layered.report.steps[0]);
}

#[test]
fn undirected_ring_is_symmetric() {
    let wiring = build(&config(
        6,
        0,
        vec![WireStep::RingLattice {
            k: 1,
            undirected: true,
        }],
    ))
    .unwrap();
    let report = &wiring.report;
    assert!(report.summary.symmetric);
    assert_eq!(report.summary.edges, 12);
    assert_eq!(report.links, 12);
    assert_eq!(report.steps[0].edges_added, 12);
    assert!(report.steps[0].undirected);
}

#[test]
fn neighbour_lists_mirror_the_graph() {
    let config = TopologyConfig::from_yaml_str(MIXED).unwrap();
    let wiring = build(&config).unwrap();
    assert_eq!(wiring.network.len(), config.nodes);
    for (i, node) in wiring.network.iter().enumerate() {
        let list = node.protocol(0).and_then(|p| p.linkable_ref()).unwrap();
        let mut ids: Vec<usize> = (0..list.degree())
            .filter_map(|n| list.neighbour(n))
            .map(|id| id.as_raw() as usize)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, wiring.graph.neighbours(i));
    }
}

#[test]
fn regular_step_reports_deviation() {
    let wiring = build(&config(100, 3, vec![WireStep::KOutUndirected { k: 4 }])).unwrap();
    let step = &wiring.report.steps[0];
    let regularity = step.regularity.as_ref().unwrap();
    assert_eq!(regularity.target_degree, 4);
    assert!(regularity.deviating() <= 4);
    assert!(wiring.report.summary.symmetric);
    assert!(wiring.report.summary.max_out_degree <= 4);
}

#[test]
fn wireless_step_places_nodes() {
    let wiring = build(&config(
        40,
        9,
        vec![WireStep::Wireless {
            k: 3,
            x_region: 100,
            y_region: 50,
            range: 30,
            undirected: false,
        }],
    ))
    .unwrap();
    for node in wiring.network.iter() {
        let position = node.position().unwrap();
        assert!((0..100).contains(&position.x));
        assert!((0..50).contains(&position.y));
        assert_eq!(node.range(), Some(30));
    }
    assert!(wiring.report.summary.max_out_degree <= 3);
    for (i, j) in wiring.graph.edges() {
        let a = wiring.network.get(i).and_then(|n| n.position()).unwrap();
        let b = wiring.network.get(j).and_then(|n| n.position()).unwrap();
        assert!(a.within(&b, 30));
    }
}

#[test]
fn generator_errors_abort_the_run() {
    let result = build(&config(
        5,
        0,
        vec![WireStep::RingLattice {
            k: 10,
            undirected: false,
        }],
    ));
    match result {
        Err(OverlayError::Config(info)) => assert_eq!(info.code, "degree-exceeds-population"),
        other => panic!("unexpected result: {other:?}"),
    }

    let result = build(&config(
        5,
        0,
        vec![WireStep::WattsStrogatz {
            k: 2,
            p: 1.5,
            undirected: false,
        }],
    ));
    assert!(matches!(result, Err(OverlayError::Config(_))));
}
