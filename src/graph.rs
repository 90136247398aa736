//! The backing graph interface.
//!
//! A [`PathGraph`] is a read-only variation graph with nodes, edges, and named
//! paths made of steps. Node handles follow the GBWT convention: a handle is a
//! node identifier with an orientation bit, and the helpers in
//! [`gbwt::support`] convert between the two forms.
//!
//! All enumerations return [`ScopedIter`] so that callers can release a
//! partially consumed traversal.

use crate::ScopedIter;

use gbwt::Orientation;
use gbwt::support;

//-----------------------------------------------------------------------------

/// An edge between two oriented node handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    /// Handle the edge leaves from.
    pub from: usize,
    /// Handle the edge arrives at.
    pub to: usize,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(from: usize, to: usize) -> Self {
        Edge { from, to }
    }
}

//-----------------------------------------------------------------------------

/// A read-only variation graph with paths.
///
/// Node handles are `usize` values encoding a node identifier and an
/// orientation. Paths are identified by dense `usize` identifiers in
/// `0..path_count()`, and steps on a path by their rank in `0..len`.
pub trait PathGraph {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph.
    fn edge_count(&self) -> usize;

    /// Returns the number of paths in the graph.
    fn path_count(&self) -> usize;

    /// Returns the total number of steps over all paths.
    fn step_count(&self) -> usize;

    /// Returns `true` if the graph contains a node with the given identifier.
    fn has_node(&self, node_id: usize) -> bool;

    /// Returns the forward handles of all nodes.
    fn node_handles(&self) -> ScopedIter<'_, usize>;

    /// Returns the sequence of the node in the orientation of the handle.
    ///
    /// Returns [`None`] if the node does not exist.
    fn sequence(&self, handle: usize) -> Option<Vec<u8>>;

    /// Returns the length of the node sequence.
    ///
    /// Returns [`None`] if the node does not exist.
    fn sequence_len(&self, handle: usize) -> Option<usize>;

    /// Returns all edges in the graph.
    fn edges(&self) -> ScopedIter<'_, Edge>;

    /// Returns the handles reachable from the given handle by one edge.
    fn successors(&self, handle: usize) -> ScopedIter<'_, usize>;

    /// Returns the identifiers of all paths.
    fn paths(&self) -> ScopedIter<'_, usize>;

    /// Returns the name of the path.
    ///
    /// Returns [`None`] if the path does not exist.
    fn path_name(&self, path_id: usize) -> Option<String>;

    /// Returns the identifier of the path with the given name.
    fn path_by_name(&self, name: &str) -> Option<usize>;

    /// Returns the node handles visited by the path in rank order.
    fn steps_of(&self, path_id: usize) -> ScopedIter<'_, usize>;

    /// Returns the node handle visited by the step with the given rank.
    ///
    /// Returns [`None`] if the path does not exist or the rank is past its end.
    fn step_handle(&self, path_id: usize, rank: usize) -> Option<usize>;

    /// Returns the forward handles of all nodes with the given sequence.
    ///
    /// Returns [`None`] if the graph does not maintain a sequence index, in
    /// which case the caller must fall back to a full scan.
    fn nodes_with_sequence(&self, _sequence: &[u8]) -> Option<ScopedIter<'_, usize>> {
        None
    }

    /// Returns `true` if the handle is in reverse orientation.
    fn is_reverse(&self, handle: usize) -> bool {
        support::node_orientation(handle) == Orientation::Reverse
    }

    /// Returns the handle for the same node in the opposite orientation.
    fn flip(&self, handle: usize) -> usize {
        let (id, orientation) = support::decode_node(handle);
        match orientation {
            Orientation::Forward => support::encode_node(id, Orientation::Reverse),
            Orientation::Reverse => support::encode_node(id, Orientation::Forward),
        }
    }

    /// Returns `true` if the handles refer to the same node in the same
    /// orientation.
    fn equal_nodes(&self, a: usize, b: usize) -> bool {
        a == b
    }
}

//-----------------------------------------------------------------------------
