use overlay_core::errors::OverlayError;
use overlay_node::{FailState, IdAllocator, Linkable, NeighbourList, Node, NodeId, NodePrototype};

fn prototype() -> NodePrototype {
    NodePrototype::new().with_protocol(NeighbourList::new())
}

#[test]
fn ids_are_distinct_and_increasing() {
    let proto = prototype();
    let mut ids = IdAllocator::new();
    let nodes: Vec<Node> = (0..5).map(|_| Node::from_prototype(&proto, &mut ids)).collect();
    let raw: Vec<u64> = nodes.iter().map(|node| node.id().as_raw()).collect();
    assert_eq!(raw, vec![0, 1, 2, 3, 4]);
    assert_eq!(ids.peek(), NodeId::from_raw(5));
}

#[test]
fn allocator_can_start_elsewhere() {
    let mut ids = IdAllocator::starting_at(100);
    assert_eq!(ids.next_id().as_raw(), 100);
    assert_eq!(ids.next_id().as_raw(), 101);
}

#[test]
fn fresh_node_has_no_placement() {
    let mut ids = IdAllocator::new();
    let node = Node::from_prototype(&prototype(), &mut ids);
    assert!(node.is_up());
    assert_eq!(node.index(), None);
    assert_eq!(node.position(), None);
    assert_eq!(node.range(), None);
    assert_eq!(node.protocol_count(), 1);
    assert_eq!(node.protocol(0).map(|p| p.name()), Some("neighbour-list"));
    assert!(node.protocol(1).is_none());
}

#[test]
fn duplicate_shares_no_protocol_state() {
    let mut ids = IdAllocator::new();
    let mut original = Node::from_prototype(&prototype(), &mut ids);
    original.set_index(3).unwrap();
    original
        .protocol_mut(0)
        .and_then(|p| p.linkable())
        .unwrap()
        .add_neighbour(NodeId::from_raw(42));

    let mut copy = original.duplicate(&mut ids).unwrap();
    assert_ne!(copy.id(), original.id());
    assert_eq!(copy.index(), None);
    assert!(copy.is_up());

    let copied = copy.protocol(0).and_then(|p| p.linkable_ref()).unwrap();
    assert!(copied.contains(NodeId::from_raw(42)));

    copy.protocol_mut(0)
        .and_then(|p| p.linkable())
        .unwrap()
        .add_neighbour(NodeId::from_raw(7));
    let source = original.protocol(0).and_then(|p| p.linkable_ref()).unwrap();
    assert_eq!(source.degree(), 1);
    assert!(!source.contains(NodeId::from_raw(7)));
}

#[test]
fn duplicate_keeps_the_fail_state() {
    let mut ids = IdAllocator::new();
    let mut original = Node::from_prototype(&prototype(), &mut ids);
    original.set_fail_state(FailState::Down).unwrap();
    let copy = original.duplicate(&mut ids).unwrap();
    assert_eq!(copy.fail_state(), FailState::Down);
    assert_eq!(copy.index(), None);
}

#[test]
fn dead_nodes_cannot_be_duplicated() {
    let mut ids = IdAllocator::new();
    let mut original = Node::from_prototype(&prototype(), &mut ids);
    original.set_fail_state(FailState::Dead).unwrap();
    match original.duplicate(&mut ids) {
        Err(OverlayError::Transition(info)) => assert_eq!(info.code, "node-dead"),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(ids.peek(), NodeId::from_raw(1));
}

#[test]
fn display_lists_protocol_slots() {
    let mut ids = IdAllocator::starting_at(9);
    let mut node = Node::from_prototype(&prototype(), &mut ids);
    node.set_index(0).unwrap();
    let text = node.to_string();
    assert!(text.starts_with("ID: 9 index: 0 state: OK"));
    assert!(text.contains("protocol[0]=neighbour-list"));
}
