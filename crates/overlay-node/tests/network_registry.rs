use overlay_core::errors::OverlayError;
use overlay_core::rng::RngHandle;
use overlay_core::Graph;
use overlay_graph::{k_out_undirected, ring_lattice, AdjacencyGraph, Undirected};
use overlay_node::{FailState, Linkable, NeighbourList, Network, Node, NodeId, NodePrototype};
use proptest::prelude::*;

fn network(count: usize) -> Network {
    let mut network = Network::new(NodePrototype::new().with_protocol(NeighbourList::new()));
    network.grow(count);
    network
}

fn indices_consistent(network: &Network) -> bool {
    network.iter().enumerate().all(|(i, node)| node.index() == Some(i))
}

fn neighbour_ids(node: &Node) -> Vec<u64> {
    let list = node.protocol(0).and_then(|p| p.linkable_ref()).unwrap();
    let mut ids: Vec<u64> = (0..list.degree())
        .filter_map(|i| list.neighbour(i))
        .map(|id| id.as_raw())
        .collect();
    ids.sort_unstable();
    ids
}

#[test]
fn grow_assigns_dense_indices() {
    let mut network = network(3);
    assert_eq!(network.grow(2), 3..5);
    assert_eq!(network.len(), 5);
    assert!(indices_consistent(&network));
}

#[test]
fn remove_moves_last_node_into_the_hole() {
    let mut network = network(5);
    let last = network.get(4).unwrap().id();
    let removed = network.remove(1).unwrap();
    assert_eq!(removed.id(), NodeId::from_raw(1));
    assert_eq!(removed.index(), None);
    assert_eq!(network.len(), 4);
    assert_eq!(network.get(1).unwrap().id(), last);
    assert!(indices_consistent(&network));
    assert_eq!(network.position_of(last), Some(1));
}

#[test]
fn removing_the_last_node_moves_nothing() {
    let mut network = network(3);
    network.remove(2).unwrap();
    assert_eq!(network.len(), 2);
    assert!(indices_consistent(&network));
}

#[test]
fn remove_out_of_range_is_an_error() {
    let mut network = network(2);
    match network.remove(2) {
        Err(OverlayError::Graph(info)) => {
            assert_eq!(info.code, "unknown-index");
            assert_eq!(info.context.get("len"), Some(&"2".to_string()));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(network.clone_node(9).is_err());
}

#[test]
fn kill_marks_dead_and_compacts() {
    let mut network = network(4);
    let killed = network.kill(0).unwrap();
    assert!(killed.is_dead());
    assert_eq!(killed.index(), None);
    assert_eq!(network.len(), 3);
    assert!(network.iter().all(|node| !node.is_dead()));
    assert!(indices_consistent(&network));
}

#[test]
fn remove_dead_sweeps_nodes_killed_in_place() {
    let mut network = network(6);
    for index in [1, 4, 5] {
        network.get_mut(index).unwrap().set_fail_state(FailState::Dead).unwrap();
    }
    let removed = network.remove_dead();
    let mut removed_ids: Vec<u64> = removed.iter().map(|node| node.id().as_raw()).collect();
    removed_ids.sort_unstable();
    assert_eq!(removed_ids, vec![1, 4, 5]);
    assert_eq!(network.len(), 3);
    assert!(indices_consistent(&network));
}

#[test]
fn clone_node_appends_with_fresh_id() {
    let mut network = network(2);
    network
        .get_mut(0)
        .and_then(|node| node.protocol_mut(0))
        .and_then(|p| p.linkable())
        .unwrap()
        .add_neighbour(NodeId::from_raw(1));
    let index = network.clone_node(0).unwrap();
    assert_eq!(index, 2);
    let clone = network.get(2).unwrap();
    assert_eq!(clone.id(), NodeId::from_raw(2));
    assert_eq!(clone.index(), Some(2));
    assert_eq!(neighbour_ids(clone), vec![1]);
}

#[test]
fn wire_copies_a_ring_into_neighbour_lists() {
    let mut network = network(5);
    let mut graph = AdjacencyGraph::new(5);
    ring_lattice(&mut Undirected::new(&mut graph), 2).unwrap();
    let added = network.wire(0, &graph).unwrap();
    assert_eq!(added, 10);
    assert_eq!(neighbour_ids(network.get(0).unwrap()), vec![1, 4]);
    assert_eq!(neighbour_ids(network.get(2).unwrap()), vec![1, 3]);
    assert_eq!(network.wire(0, &graph).unwrap(), 0);
}

#[test]
fn wire_follows_current_indices_after_removal() {
    let mut network = network(4);
    network.remove(0).unwrap();
    let mut graph = AdjacencyGraph::new(3);
    graph.set_edge(0, 1);
    network.wire(0, &graph).unwrap();
    // node 3 moved to index 0
    assert_eq!(network.get(0).unwrap().id(), NodeId::from_raw(3));
    assert_eq!(neighbour_ids(network.get(0).unwrap()), vec![1]);
}

#[test]
fn wire_rejects_mismatched_sizes_and_missing_slots() {
    let mut network = network(3);
    assert!(matches!(
        network.wire(0, &AdjacencyGraph::new(4)),
        Err(OverlayError::Graph(_))
    ));
    match network.wire(1, &AdjacencyGraph::new(3)) {
        Err(OverlayError::Config(info)) => assert_eq!(info.code, "protocol-not-linkable"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn wire_with_a_dead_node_changes_nothing() {
    let mut network = network(4);
    network.get_mut(2).unwrap().set_fail_state(FailState::Dead).unwrap();
    let mut graph = AdjacencyGraph::new(4);
    ring_lattice(&mut graph, 2).unwrap();
    match network.wire(0, &graph) {
        Err(OverlayError::Transition(info)) => assert_eq!(info.code, "node-dead"),
        other => panic!("unexpected result: {other:?}"),
    }
    for index in [0, 1, 3] {
        assert!(neighbour_ids(network.get(index).unwrap()).is_empty());
    }

    network.remove_dead();
    let mut graph = AdjacencyGraph::new(3);
    ring_lattice(&mut graph, 2).unwrap();
    assert_eq!(network.wire(0, &graph).unwrap(), 6);
}

#[test]
fn clone_node_rejects_nodes_killed_in_place() {
    let mut network = network(2);
    network.get_mut(1).unwrap().set_fail_state(FailState::Dead).unwrap();
    assert!(matches!(network.clone_node(1), Err(OverlayError::Transition(_))));
    assert_eq!(network.len(), 2);
}

#[test]
fn killed_node_forgets_its_neighbours() {
    let mut network = network(3);
    let mut graph = AdjacencyGraph::new(3);
    graph.set_edge(0, 1);
    graph.set_edge(0, 2);
    network.wire(0, &graph).unwrap();
    let killed = network.kill(0).unwrap();
    assert!(neighbour_ids(&killed).is_empty());
}

proptest! {
    #[test]
    fn removals_keep_indices_dense(count in 1usize..40, picks in proptest::collection::vec(any::<usize>(), 0..40)) {
        let mut network = network(count);
        for pick in picks {
            if network.is_empty() {
                break;
            }
            let index = pick % network.len();
            if pick % 2 == 0 {
                network.remove(index).unwrap();
            } else {
                network.kill(index).unwrap();
            }
            prop_assert!(indices_consistent(&network));
        }
    }

    #[test]
    fn wired_regular_graph_is_mutual(n in 2usize..40, k in 1usize..6, seed in any::<u64>()) {
        let mut network = network(n);
        let mut graph = AdjacencyGraph::new(n);
        let mut rng = RngHandle::from_seed(seed);
        k_out_undirected(&mut graph, k, &mut rng);
        network.wire(0, &graph).unwrap();
        for node in network.iter() {
            let list = node.protocol(0).and_then(|p| p.linkable_ref()).unwrap();
            for i in 0..list.degree() {
                let peer = list.neighbour(i).unwrap();
                let back = network.position_of(peer).and_then(|j| network.get(j)).unwrap();
                let back_list = back.protocol(0).and_then(|p| p.linkable_ref()).unwrap();
                prop_assert!(back_list.contains(node.id()));
            }
        }
    }
}
