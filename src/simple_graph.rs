//! A simple in-memory implementation of [`PathGraph`].
//!
//! This is the graph behind the `gfa2rdf` binary and the test suite. Nodes are
//! stored in identifier order, and the graph maintains an exact-sequence index
//! so that [`PathGraph::nodes_with_sequence`] can answer reverse lookups
//! without a scan.

use crate::graph::{Edge, PathGraph};
use crate::ScopedIter;

use gbwt::Orientation;
use gbwt::support;

use std::collections::{BTreeMap, HashMap};

//-----------------------------------------------------------------------------

// A named path over node handles.
#[derive(Clone, Debug)]
struct SimplePath {
    name: String,
    steps: Vec<usize>,
}

/// An in-memory variation graph with paths.
///
/// # Examples
///
/// ```
/// use vg_rdf::{PathGraph, SimplePathGraph};
/// use gbwt::{Orientation, support};
///
/// let mut graph = SimplePathGraph::new();
/// graph.add_node(1, b"GATT".to_vec()).unwrap();
/// graph.add_node(2, b"ACA".to_vec()).unwrap();
/// let first = support::encode_node(1, Orientation::Forward);
/// let second = support::encode_node(2, Orientation::Forward);
/// graph.add_edge(first, second).unwrap();
/// graph.add_path("x", vec![first, second]).unwrap();
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.sequence(second), Some(b"ACA".to_vec()));
/// assert_eq!(graph.path_by_name("x"), Some(0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimplePathGraph {
    // Forward-orientation sequences by node identifier.
    sequences: BTreeMap<usize, Vec<u8>>,

    // Successor handles by source handle.
    successors: BTreeMap<usize, Vec<usize>>,

    // All edges as they were inserted, in sorted order.
    edges: Vec<Edge>,

    paths: Vec<SimplePath>,
    path_ids: HashMap<String, usize>,

    // Forward handles by exact forward sequence.
    sequence_to_nodes: HashMap<Vec<u8>, Vec<usize>>,

    total_steps: usize,
}

impl SimplePathGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        SimplePathGraph::default()
    }

    /// Inserts a node with the given forward sequence.
    pub fn add_node(&mut self, node_id: usize, sequence: Vec<u8>) -> Result<(), String> {
        if self.sequences.contains_key(&node_id) {
            return Err(format!("Duplicate node {}", node_id));
        }
        let handle = support::encode_node(node_id, Orientation::Forward);
        self.sequence_to_nodes.entry(sequence.clone()).or_default().push(handle);
        self.sequences.insert(node_id, sequence);
        Ok(())
    }

    /// Inserts an edge between two oriented handles.
    ///
    /// Both endpoints must already exist.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), String> {
        for handle in [from, to] {
            if !self.sequences.contains_key(&support::node_id(handle)) {
                return Err(format!("Edge endpoint {} does not exist", support::node_id(handle)));
            }
        }
        let edge = Edge::new(from, to);
        match self.edges.binary_search(&edge) {
            Ok(_) => return Ok(()),
            Err(offset) => self.edges.insert(offset, edge),
        }
        self.successors.entry(from).or_default().push(to);
        Ok(())
    }

    /// Inserts a named path visiting the given handles in order.
    pub fn add_path(&mut self, name: &str, steps: Vec<usize>) -> Result<(), String> {
        if self.path_ids.contains_key(name) {
            return Err(format!("Duplicate path {}", name));
        }
        for handle in steps.iter() {
            if !self.sequences.contains_key(&support::node_id(*handle)) {
                return Err(format!("Path {} visits nonexistent node {}", name, support::node_id(*handle)));
            }
        }
        self.path_ids.insert(name.to_string(), self.paths.len());
        self.total_steps += steps.len();
        self.paths.push(SimplePath { name: name.to_string(), steps });
        Ok(())
    }

    // Forward sequence of a node, reverse complemented for reverse handles.
    fn oriented_sequence(&self, handle: usize) -> Option<Vec<u8>> {
        let sequence = self.sequences.get(&support::node_id(handle))?;
        match support::node_orientation(handle) {
            Orientation::Forward => Some(sequence.clone()),
            Orientation::Reverse => Some(support::reverse_complement(sequence)),
        }
    }
}

//-----------------------------------------------------------------------------

impl PathGraph for SimplePathGraph {
    fn node_count(&self) -> usize {
        self.sequences.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn path_count(&self) -> usize {
        self.paths.len()
    }

    fn step_count(&self) -> usize {
        self.total_steps
    }

    fn has_node(&self, node_id: usize) -> bool {
        self.sequences.contains_key(&node_id)
    }

    fn node_handles(&self) -> ScopedIter<'_, usize> {
        ScopedIter::new(
            self.sequences.keys().map(|id| support::encode_node(*id, Orientation::Forward))
        )
    }

    fn sequence(&self, handle: usize) -> Option<Vec<u8>> {
        self.oriented_sequence(handle)
    }

    fn sequence_len(&self, handle: usize) -> Option<usize> {
        self.sequences.get(&support::node_id(handle)).map(|s| s.len())
    }

    fn edges(&self) -> ScopedIter<'_, Edge> {
        ScopedIter::new(self.edges.iter().copied())
    }

    fn successors(&self, handle: usize) -> ScopedIter<'_, usize> {
        match self.successors.get(&handle) {
            Some(v) => ScopedIter::new(v.iter().copied()),
            None => ScopedIter::empty(),
        }
    }

    fn paths(&self) -> ScopedIter<'_, usize> {
        ScopedIter::new(0..self.paths.len())
    }

    fn path_name(&self, path_id: usize) -> Option<String> {
        self.paths.get(path_id).map(|p| p.name.clone())
    }

    fn path_by_name(&self, name: &str) -> Option<usize> {
        self.path_ids.get(name).cloned()
    }

    fn steps_of(&self, path_id: usize) -> ScopedIter<'_, usize> {
        match self.paths.get(path_id) {
            Some(path) => ScopedIter::new(path.steps.iter().copied()),
            None => ScopedIter::empty(),
        }
    }

    fn step_handle(&self, path_id: usize, rank: usize) -> Option<usize> {
        self.paths.get(path_id)?.steps.get(rank).cloned()
    }

    fn nodes_with_sequence(&self, sequence: &[u8]) -> Option<ScopedIter<'_, usize>> {
        match self.sequence_to_nodes.get(sequence) {
            Some(v) => Some(ScopedIter::new(v.iter().copied())),
            None => Some(ScopedIter::empty()),
        }
    }
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_graph() -> SimplePathGraph {
        let mut graph = SimplePathGraph::new();
        graph.add_node(1, b"GATT".to_vec()).unwrap();
        graph.add_node(2, b"A".to_vec()).unwrap();
        graph.add_node(3, b"CA".to_vec()).unwrap();
        let n1 = support::encode_node(1, Orientation::Forward);
        let n2 = support::encode_node(2, Orientation::Forward);
        let n3 = support::encode_node(3, Orientation::Forward);
        graph.add_edge(n1, n2).unwrap();
        graph.add_edge(n2, n3).unwrap();
        graph.add_edge(n1, support::encode_node(3, Orientation::Reverse)).unwrap();
        graph.add_path("x", vec![n1, n2, n3]).unwrap();
        graph
    }

    #[test]
    fn statistics() {
        let graph = tiny_graph();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.path_count(), 1);
        assert_eq!(graph.step_count(), 3);
    }

    #[test]
    fn oriented_sequences() {
        let graph = tiny_graph();
        let forward = support::encode_node(1, Orientation::Forward);
        let reverse = support::encode_node(1, Orientation::Reverse);
        assert_eq!(graph.sequence(forward), Some(b"GATT".to_vec()));
        assert_eq!(graph.sequence(reverse), Some(b"AATC".to_vec()));
        assert_eq!(graph.sequence_len(reverse), Some(4));
        assert_eq!(graph.sequence(support::encode_node(42, Orientation::Forward)), None);
    }

    #[test]
    fn duplicate_and_missing() {
        let mut graph = tiny_graph();
        assert!(graph.add_node(1, b"C".to_vec()).is_err());
        assert!(graph.add_path("x", Vec::new()).is_err());
        let n1 = support::encode_node(1, Orientation::Forward);
        let missing = support::encode_node(9, Orientation::Forward);
        assert!(graph.add_edge(n1, missing).is_err());
        assert!(graph.add_path("y", vec![missing]).is_err());
    }

    #[test]
    fn steps_and_paths() {
        let graph = tiny_graph();
        assert_eq!(graph.path_by_name("x"), Some(0));
        assert_eq!(graph.path_by_name("y"), None);
        assert_eq!(graph.path_name(0), Some(String::from("x")));
        let steps = graph.steps_of(0).collect_vec();
        assert_eq!(steps.len(), 3);
        assert_eq!(graph.step_handle(0, 1), Some(steps[1]));
        assert_eq!(graph.step_handle(0, 3), None);
        assert_eq!(graph.step_handle(7, 0), None);
    }

    #[test]
    fn sequence_index() {
        let graph = tiny_graph();
        let hits = graph.nodes_with_sequence(b"GATT").unwrap().collect_vec();
        assert_eq!(hits, vec![support::encode_node(1, Orientation::Forward)]);
        let empty = graph.nodes_with_sequence(b"TTTT").unwrap().collect_vec();
        assert!(empty.is_empty());
    }

    #[test]
    fn duplicate_edge_is_ignored() {
        let mut graph = tiny_graph();
        let n1 = support::encode_node(1, Orientation::Forward);
        let n2 = support::encode_node(2, Orientation::Forward);
        graph.add_edge(n1, n2).unwrap();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.successors(n1).collect_vec().len(), 2);
    }
}

//-----------------------------------------------------------------------------
