//! The graph store: a base IRI, a graph, and the URI codec.
//!
//! A [`GraphStore`] ties a [`PathGraph`] to the IRI space of the virtual
//! triples. Encoding lives on the reference types in [`crate::model`]; the
//! decoding functions here are total, mapping every string that is not a
//! well-formed IRI of an existing graph element to [`None`].

use crate::graph::PathGraph;
use crate::model::{NodeRef, PathRef, PositionKind, StepPositionRef, StepRef};
use crate::position::PositionIndex;

use gbwt::Orientation;
use gbwt::support;

#[cfg(test)]
mod tests;

//-----------------------------------------------------------------------------

// The schemes under which a path name is its own IRI.
const EXTERNAL_SCHEMES: [&str; 3] = ["http://", "https://", "ftp://"];

// Digits only; no sign, no whitespace.
fn parse_unsigned(value: &str) -> Option<usize> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<usize>().ok()
}

/// Returns `true` if the path name is an absolute IRI used verbatim.
pub fn is_external_name(name: &str) -> bool {
    EXTERNAL_SCHEMES.iter().any(|scheme| name.starts_with(scheme))
}

//-----------------------------------------------------------------------------

/// A variation graph with the IRI space of its virtual triples.
///
/// # Examples
///
/// ```
/// use vg_rdf::{GraphStore, PathGraph, SimplePathGraph};
/// use gbwt::{Orientation, support};
///
/// let mut graph = SimplePathGraph::new();
/// graph.add_node(1, b"GATT".to_vec()).unwrap();
/// let handle = support::encode_node(1, Orientation::Forward);
/// graph.add_path("x", vec![handle]).unwrap();
///
/// let store = GraphStore::new(graph, "http://example.org/vg/").unwrap();
/// let node = store.node_from_uri("http://example.org/vg/node/1").unwrap();
/// assert_eq!(node.id(), 1);
/// assert_eq!(node.to_uri(), "http://example.org/vg/node/1");
/// assert!(store.node_from_uri("http://example.org/vg/node/2").is_none());
/// ```
pub struct GraphStore<G: PathGraph> {
    graph: G,
    base: String,
    positions: PositionIndex,
}

impl<G: PathGraph> GraphStore<G> {
    /// Creates a store for the graph under the given base IRI.
    ///
    /// Builds the position index, which takes time linear in the total number
    /// of steps.
    pub fn new(graph: G, base: &str) -> Result<Self, String> {
        if base.is_empty() {
            return Err(String::from("The base IRI must not be empty"));
        }
        let positions = PositionIndex::new(&graph)?;
        Ok(GraphStore { graph, base: base.to_string(), positions })
    }

    /// Returns the underlying graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Returns the base IRI.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the coordinate index over the paths.
    pub fn positions(&self) -> &PositionIndex {
        &self.positions
    }

    /// Returns the namespace node IRIs start with.
    pub fn node_namespace(&self) -> String {
        format!("{}node/", self.base)
    }

    /// Returns the IRI of the path, which is also the namespace of its step
    /// and position IRIs.
    ///
    /// Returns [`None`] if the path does not exist.
    pub fn path_namespace(&self, path_id: usize) -> Option<String> {
        let name = self.graph.path_name(path_id)?;
        if is_external_name(&name) {
            Some(name)
        } else {
            Some(format!("{}path/{}", self.base, name))
        }
    }

    /// Decodes a node IRI of the form `{base}node/{id}`.
    ///
    /// Returns a forward-orientation reference, or [`None`] if the IRI does
    /// not parse or the node does not exist.
    pub fn node_from_uri(&self, uri: &str) -> Option<NodeRef<'_, G>> {
        let rest = uri.strip_prefix(&self.base)?.strip_prefix("node/")?;
        let id = parse_unsigned(rest)?;
        if !self.graph.has_node(id) {
            return None;
        }
        Some(NodeRef::new(self, support::encode_node(id, Orientation::Forward)))
    }

    /// Decodes a path IRI, in either the `{base}path/{name}` form or the
    /// external form where the name is the IRI.
    pub fn path_from_uri(&self, uri: &str) -> Option<PathRef<'_, G>> {
        if let Some(name) = uri.strip_prefix(&self.base).and_then(|s| s.strip_prefix("path/")) {
            if let Some(path_id) = self.graph.path_by_name(name) {
                return Some(PathRef::new(self, path_id));
            }
        }
        if is_external_name(uri) {
            if let Some(path_id) = self.graph.path_by_name(uri) {
                return Some(PathRef::new(self, path_id));
            }
        }
        None
    }

    /// Decodes a step IRI of the form `{path}/step/{rank}`.
    ///
    /// The path part is matched up to the last `/step/` in the IRI. Returns
    /// [`None`] unless the path exists and has a step with the given rank.
    pub fn step_from_uri(&self, uri: &str) -> Option<StepRef<'_, G>> {
        let split = uri.rfind("/step/")?;
        let path = self.path_from_uri(&uri[..split])?;
        let rank = parse_unsigned(&uri[split + "/step/".len()..])?;
        self.graph.step_handle(path.id(), rank)?;
        Some(StepRef::new(self, path.id(), rank))
    }

    /// Decodes a position IRI of the form `{path}/position/{coordinate}`.
    ///
    /// The coordinate must be a step boundary on the path. A coordinate that
    /// is both an end and a later begin cannot occur, and begins are resolved
    /// first. The returned reference carries the coordinate.
    pub fn position_from_uri(&self, uri: &str) -> Option<StepPositionRef<'_, G>> {
        let split = uri.rfind("/position/")?;
        let path = self.path_from_uri(&uri[..split])?;
        let coordinate = parse_unsigned(&uri[split + "/position/".len()..])?;
        if let Some(rank) = self.positions.step_with_begin(path.id(), coordinate) {
            return Some(StepPositionRef::with_coordinate(
                self, path.id(), rank, PositionKind::Begin, coordinate
            ));
        }
        if let Some(rank) = self.positions.step_with_end(path.id(), coordinate) {
            return Some(StepPositionRef::with_coordinate(
                self, path.id(), rank, PositionKind::End, coordinate
            ));
        }
        None
    }
}

//-----------------------------------------------------------------------------
