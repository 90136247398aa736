use super::*;

use crate::graph::PathGraph;
use crate::utils;

use std::io::Cursor;

//-----------------------------------------------------------------------------

#[test]
fn example_file() {
    let filename = utils::get_test_data("example.gfa");
    let graph = load_gfa(&filename);
    assert!(graph.is_ok(), "Failed to load {}: {}", filename.display(), graph.err().unwrap());
    let graph = graph.unwrap();

    assert_eq!(graph.node_count(), 15);
    assert_eq!(graph.edge_count(), 21);
    assert_eq!(graph.path_count(), 1);
    assert_eq!(graph.step_count(), 11);

    let forward = support::encode_node(1, Orientation::Forward);
    assert_eq!(graph.sequence(forward), Some(b"CAAATAAG".to_vec()));

    let path = graph.path_by_name("x");
    assert_eq!(path, Some(0));
    let expected: Vec<usize> = [1, 3, 5, 6, 8, 9, 11, 12, 14, 15, 3].iter()
        .map(|id| support::encode_node(*id, Orientation::Forward))
        .collect();
    assert_eq!(graph.steps_of(0).collect_vec(), expected);
}

#[test]
fn records_in_any_order() {
    let data = "P\tx\t2+,1-\t*\nL\t1\t-\t2\t+\t0M\nS\t1\tACGT\nS\t2\tGG\n";
    let graph = parse_gfa(Cursor::new(data)).unwrap();
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    let reverse = support::encode_node(1, Orientation::Reverse);
    assert_eq!(graph.steps_of(0).collect_vec()[1], reverse);
    assert_eq!(graph.sequence(reverse), Some(support::reverse_complement(b"ACGT")));
}

#[test]
fn ignores_unknown_records() {
    let data = "H\tVN:Z:1.0\nS\t1\tACGT\n# comment\nC\t1\t+\t1\t+\t0\t0M\n";
    let graph = parse_gfa(Cursor::new(data)).unwrap();
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn empty_sequence() {
    let data = "S\t1\t*\n";
    let graph = parse_gfa(Cursor::new(data)).unwrap();
    let handle = support::encode_node(1, Orientation::Forward);
    assert_eq!(graph.sequence_len(handle), Some(0));
}

#[test]
fn malformed_records() {
    let cases = [
        "S\t1\n",
        "S\tone\tACGT\n",
        "L\t1\t+\t2\n",
        "S\t1\tA\nS\t2\tC\nL\t1\t?\t2\t+\t0M\n",
        "S\t1\tA\nP\tx\t1*\t*\n",
        "S\t1\tA\nP\tx\t+\t*\n",
        "S\t1\tA\nL\t1\t+\t2\t+\t0M\n",
        "S\t1\tA\nP\tx\t2+\t*\n",
    ];
    for data in cases.iter() {
        assert!(parse_gfa(Cursor::new(*data)).is_err(), "Accepted {:?}", data);
    }
}

//-----------------------------------------------------------------------------
