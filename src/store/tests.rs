use super::*;

use crate::SimplePathGraph;
use crate::model::PositionKind;

//-----------------------------------------------------------------------------

const BASE: &str = "http://example.org/vg/";
const EXTERNAL: &str = "http://example.org/assembly/chr1";

// Nodes 1: GATT, 2: A, 3: CA. Path x visits 1, 2, 3 forward; the external
// path visits 3.
fn example_store() -> GraphStore<SimplePathGraph> {
    let mut graph = SimplePathGraph::new();
    graph.add_node(1, b"GATT".to_vec()).unwrap();
    graph.add_node(2, b"A".to_vec()).unwrap();
    graph.add_node(3, b"CA".to_vec()).unwrap();
    let handles: Vec<usize> = [1, 2, 3].iter()
        .map(|id| support::encode_node(*id, Orientation::Forward))
        .collect();
    graph.add_path("x", handles.clone()).unwrap();
    graph.add_path(EXTERNAL, vec![handles[2]]).unwrap();
    GraphStore::new(graph, BASE).unwrap()
}

//-----------------------------------------------------------------------------

#[test]
fn construction() {
    let graph = SimplePathGraph::new();
    assert!(GraphStore::new(graph, "").is_err(), "An empty base IRI was accepted");
    let store = example_store();
    assert_eq!(store.base(), BASE);
}

#[test]
fn namespaces() {
    let store = example_store();
    assert_eq!(store.node_namespace(), format!("{}node/", BASE));
    assert_eq!(store.path_namespace(0), Some(format!("{}path/x", BASE)));
    assert_eq!(store.path_namespace(1), Some(String::from(EXTERNAL)));
    assert_eq!(store.path_namespace(9), None);
}

//-----------------------------------------------------------------------------

#[test]
fn node_uris() {
    let store = example_store();
    for id in [1, 2, 3] {
        let uri = format!("{}node/{}", BASE, id);
        let node = store.node_from_uri(&uri);
        assert!(node.is_some(), "Node IRI {} did not decode", uri);
        let node = node.unwrap();
        assert_eq!(node.id(), id);
        assert_eq!(node.to_uri(), uri, "Node {} did not round-trip", id);
    }
}

#[test]
fn node_uri_misses() {
    let store = example_store();
    let misses = [
        format!("{}node/4", BASE),
        format!("{}node/", BASE),
        format!("{}node/+1", BASE),
        format!("{}node/1x", BASE),
        format!("{}node/ 1", BASE),
        format!("{}path/1", BASE),
        String::from("http://other.example/node/1"),
        String::from(""),
    ];
    for uri in misses.iter() {
        assert!(store.node_from_uri(uri).is_none(), "Decoded a node from {:?}", uri);
    }
}

//-----------------------------------------------------------------------------

#[test]
fn path_uris() {
    let store = example_store();
    let synthesized = format!("{}path/x", BASE);
    let path = store.path_from_uri(&synthesized).unwrap();
    assert_eq!(path.id(), 0);
    assert_eq!(path.to_uri(), synthesized);

    let external = store.path_from_uri(EXTERNAL).unwrap();
    assert_eq!(external.id(), 1);
    assert_eq!(external.to_uri(), EXTERNAL);
}

#[test]
fn path_uri_misses() {
    let store = example_store();
    let misses = [
        format!("{}path/y", BASE),
        format!("{}path/", BASE),
        String::from("http://example.org/assembly/chr2"),
        // The bare name of a synthesized path is not its IRI.
        String::from("x"),
    ];
    for uri in misses.iter() {
        assert!(store.path_from_uri(uri).is_none(), "Decoded a path from {:?}", uri);
    }
}

//-----------------------------------------------------------------------------

#[test]
fn step_uris() {
    let store = example_store();
    for rank in 0..3 {
        let uri = format!("{}path/x/step/{}", BASE, rank);
        let step = store.step_from_uri(&uri);
        assert!(step.is_some(), "Step IRI {} did not decode", uri);
        let step = step.unwrap();
        assert_eq!(step.path_id(), 0);
        assert_eq!(step.rank(), rank);
        assert_eq!(step.to_uri(), uri, "Step {} did not round-trip", rank);
    }

    let external = format!("{}/step/0", EXTERNAL);
    let step = store.step_from_uri(&external).unwrap();
    assert_eq!(step.path_id(), 1);
    assert_eq!(step.to_uri(), external);
}

#[test]
fn step_uri_misses() {
    let store = example_store();
    let misses = [
        format!("{}path/x/step/3", BASE),
        format!("{}path/x/step/-1", BASE),
        format!("{}path/x/step/one", BASE),
        format!("{}path/x/step/", BASE),
        format!("{}path/y/step/0", BASE),
        format!("{}path/x/position/0", BASE),
    ];
    for uri in misses.iter() {
        assert!(store.step_from_uri(uri).is_none(), "Decoded a step from {:?}", uri);
    }
}

//-----------------------------------------------------------------------------

#[test]
fn position_uris() {
    let store = example_store();
    // Begin coordinates on path x are 0, 5, 7; end coordinates 4, 6, 9.
    for (coordinate, rank) in [(0, 0), (5, 1), (7, 2)] {
        let uri = format!("{}path/x/position/{}", BASE, coordinate);
        let position = store.position_from_uri(&uri);
        assert!(position.is_some(), "Begin IRI {} did not decode", uri);
        let position = position.unwrap();
        assert_eq!(position.kind(), PositionKind::Begin);
        assert_eq!(position.rank(), rank);
        assert_eq!(position.coordinate(), coordinate);
        assert_eq!(position.to_uri(), uri);
    }
    for (coordinate, rank) in [(4, 0), (6, 1), (9, 2)] {
        let uri = format!("{}path/x/position/{}", BASE, coordinate);
        let position = store.position_from_uri(&uri);
        assert!(position.is_some(), "End IRI {} did not decode", uri);
        let position = position.unwrap();
        assert_eq!(position.kind(), PositionKind::End);
        assert_eq!(position.rank(), rank);
        assert_eq!(position.coordinate(), coordinate);
    }
}

#[test]
fn position_uri_misses(){
    let store = example_store();
    let misses = [
        // Coordinate 1 is inside the first step; 100 is past the path.
        format!("{}path/x/position/1", BASE),
        format!("{}path/x/position/100", BASE),
        format!("{}path/x/position/-1", BASE),
        format!("{}path/x/position/", BASE),
        format!("{}path/y/position/0", BASE),
    ];
    for uri in misses.iter() {
        assert!(store.position_from_uri(uri).is_none(), "Decoded a position from {:?}", uri);
    }
}

#[test]
fn external_position_uris() {
    let store = example_store();
    let begin = format!("{}/position/0", EXTERNAL);
    let position = store.position_from_uri(&begin).unwrap();
    assert_eq!(position.path_id(), 1);
    assert_eq!(position.kind(), PositionKind::Begin);
    assert_eq!(position.to_uri(), begin);
}

//-----------------------------------------------------------------------------
