use super::*;

use crate::SimplePathGraph;

use gbwt::Orientation;
use gbwt::support;

//-----------------------------------------------------------------------------

// Path x visits nodes of lengths 4, 1, 2, 1.
fn example_graph() -> SimplePathGraph {
    let mut graph = SimplePathGraph::new();
    graph.add_node(1, b"GATT".to_vec()).unwrap();
    graph.add_node(2, b"A".to_vec()).unwrap();
    graph.add_node(3, b"CA".to_vec()).unwrap();
    graph.add_node(4, b"T".to_vec()).unwrap();
    let handles: Vec<usize> = [1, 2, 3, 4].iter()
        .map(|id| support::encode_node(*id, Orientation::Forward))
        .collect();
    graph.add_path("x", handles).unwrap();
    graph.add_path("empty", Vec::new()).unwrap();
    graph
}

// (rank, begin, end) with the running offset convention.
const EXPECTED: [(usize, usize, usize); 4] = [
    (0, 0, 4),
    (1, 5, 6),
    (2, 7, 9),
    (3, 10, 11),
];

//-----------------------------------------------------------------------------

#[test]
fn point_queries() {
    let graph = example_graph();
    for (rank, begin, end) in EXPECTED.iter() {
        assert_eq!(step_begin(&graph, 0, *rank), Some(*begin), "Wrong begin for rank {}", rank);
        assert_eq!(step_end(&graph, 0, *rank), Some(*end), "Wrong end for rank {}", rank);
    }
}

#[test]
fn point_queries_out_of_range() {
    let graph = example_graph();
    assert_eq!(step_begin(&graph, 0, 4), None);
    assert_eq!(step_end(&graph, 0, 4), None);
    assert_eq!(step_begin(&graph, 1, 0), None, "A step on an empty path has a begin");
    assert_eq!(step_begin(&graph, 7, 0), None, "A step on a nonexistent path has a begin");
}

#[test]
fn bulk_matches_point() {
    let graph = example_graph();
    let bulk = path_positions(&graph, 0).collect_vec();
    assert_eq!(bulk, EXPECTED.to_vec());
    for (rank, begin, end) in bulk {
        assert_eq!(step_begin(&graph, 0, rank), Some(begin), "Bulk begin differs at rank {}", rank);
        assert_eq!(step_end(&graph, 0, rank), Some(end), "Bulk end differs at rank {}", rank);
    }
}

#[test]
fn coordinates_are_monotonic() {
    let graph = example_graph();
    let mut prev_end: Option<usize> = None;
    for (rank, begin, end) in path_positions(&graph, 0) {
        let handle = graph.step_handle(0, rank).unwrap();
        assert_eq!(end, begin + graph.sequence_len(handle).unwrap(), "Wrong length at rank {}", rank);
        if let Some(prev) = prev_end {
            assert_eq!(begin, prev + 1, "Wrong gap before rank {}", rank);
        }
        prev_end = Some(end);
    }
}

#[test]
fn empty_and_missing_paths() {
    let graph = example_graph();
    assert!(path_positions(&graph, 1).collect_vec().is_empty());
    assert!(path_positions(&graph, 7).collect_vec().is_empty());
}

//-----------------------------------------------------------------------------

#[test]
fn index_resolves_boundaries() {
    let graph = example_graph();
    let index = PositionIndex::new(&graph).unwrap();
    for (rank, begin, end) in EXPECTED.iter() {
        assert_eq!(index.step_with_begin(0, *begin), Some(*rank), "No step begins at {}", begin);
        assert_eq!(index.step_with_end(0, *end), Some(*rank), "No step ends at {}", end);
    }
}

#[test]
fn index_rejects_non_boundaries() {
    let graph = example_graph();
    let index = PositionIndex::new(&graph).unwrap();
    // Coordinate 1 is inside the first step; 100 is past the path.
    assert_eq!(index.step_with_begin(0, 1), None);
    assert_eq!(index.step_with_end(0, 1), None);
    assert_eq!(index.step_with_begin(0, 100), None);
    assert_eq!(index.step_with_end(0, 100), None);
    // End of step 0 is not a begin, and begin of step 1 is not an end.
    assert_eq!(index.step_with_begin(0, 4), None);
    assert_eq!(index.step_with_end(0, 5), None);
}

#[test]
fn index_skips_empty_paths() {
    let graph = example_graph();
    let index = PositionIndex::new(&graph).unwrap();
    assert_eq!(index.step_with_begin(1, 0), None);
    assert_eq!(index.step_with_begin(9, 0), None);
}

//-----------------------------------------------------------------------------
