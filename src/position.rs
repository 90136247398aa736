//! Genomic coordinates of path steps.
//!
//! Coordinates on a path start at 0. A step of length `len` starting at
//! coordinate `begin` covers `begin..begin + len`, and the next step starts at
//! `end + 1`. Point queries walk the path; bulk enumeration keeps a running
//! offset and visits each step once. [`PositionIndex`] answers the reverse
//! question, from a coordinate back to a step rank.

use crate::graph::PathGraph;
use crate::ScopedIter;

use simple_sds::sparse_vector::{SparseVector, SparseBuilder};
use simple_sds::ops::PredSucc;

use std::collections::HashMap;

#[cfg(test)]
mod tests;

//-----------------------------------------------------------------------------

/// Returns the begin coordinate of the step with the given rank.
///
/// Returns [`None`] if the path does not exist or the rank is past its end.
/// Takes time linear in the rank.
pub fn step_begin<G: PathGraph>(graph: &G, path_id: usize, rank: usize) -> Option<usize> {
    let mut offset = 0;
    for (r, handle) in graph.steps_of(path_id).enumerate() {
        if r == rank {
            return Some(offset);
        }
        offset += graph.sequence_len(handle)? + 1;
    }
    None
}

/// Returns the end coordinate of the step with the given rank.
///
/// The end of a step is its begin plus its length. Returns [`None`] if the
/// path does not exist or the rank is past its end.
pub fn step_end<G: PathGraph>(graph: &G, path_id: usize, rank: usize) -> Option<usize> {
    let mut offset = 0;
    for (r, handle) in graph.steps_of(path_id).enumerate() {
        let len = graph.sequence_len(handle)?;
        if r == rank {
            return Some(offset + len);
        }
        offset += len + 1;
    }
    None
}

/// Returns `(rank, begin, end)` for every step of the path, in rank order.
///
/// This takes constant time per step, while a point query for each rank would
/// take quadratic time over the path.
pub fn path_positions<G: PathGraph>(graph: &G, path_id: usize) -> ScopedIter<'_, (usize, usize, usize)> {
    let steps = graph.steps_of(path_id);
    ScopedIter::new(steps.enumerate().scan(0, move |offset, (rank, handle)| {
        let len = graph.sequence_len(handle).unwrap_or(0);
        let begin = *offset;
        let end = begin + len;
        *offset = end + 1;
        Some((rank, begin, end))
    }))
}

//-----------------------------------------------------------------------------

/// An index from path coordinates back to step ranks.
///
/// The index stores the begin and end coordinates of every step as sparse
/// bitvectors, one pair per non-empty path. It is built once when the store
/// is created and makes position IRI decoding independent of path length.
///
/// # Examples
///
/// ```
/// use vg_rdf::{PathGraph, PositionIndex, SimplePathGraph};
/// use gbwt::{Orientation, support};
///
/// let mut graph = SimplePathGraph::new();
/// graph.add_node(1, b"GATT".to_vec()).unwrap();
/// graph.add_node(2, b"ACA".to_vec()).unwrap();
/// let first = support::encode_node(1, Orientation::Forward);
/// let second = support::encode_node(2, Orientation::Forward);
/// graph.add_path("x", vec![first, second]).unwrap();
///
/// let index = PositionIndex::new(&graph).unwrap();
/// assert_eq!(index.step_with_begin(0, 0), Some(0));
/// assert_eq!(index.step_with_begin(0, 5), Some(1));
/// assert_eq!(index.step_with_end(0, 4), Some(0));
/// assert_eq!(index.step_with_begin(0, 3), None);
/// ```
#[derive(Clone, Debug)]
pub struct PositionIndex {
    // Maps path identifiers to offsets in the vectors below.
    path_to_offset: HashMap<usize, usize>,

    // Begin coordinates of each step, in rank order.
    begins: Vec<SparseVector>,

    // End coordinates of each step, in rank order.
    ends: Vec<SparseVector>,
}

impl PositionIndex {
    /// Builds the index for all non-empty paths of the graph.
    pub fn new<G: PathGraph>(graph: &G) -> Result<Self, String> {
        let mut path_to_offset: HashMap<usize, usize> = HashMap::new();
        let mut begins: Vec<SparseVector> = Vec::new();
        let mut ends: Vec<SparseVector> = Vec::new();

        for path_id in graph.paths() {
            let positions: Vec<(usize, usize)> = path_positions(graph, path_id)
                .map(|(_, begin, end)| (begin, end))
                .collect_vec();
            if positions.is_empty() {
                continue;
            }
            let universe = positions[positions.len() - 1].1 + 1;
            let mut begin_builder = SparseBuilder::new(universe, positions.len())?;
            let mut end_builder = SparseBuilder::new(universe, positions.len())?;
            for (begin, end) in positions.iter() {
                begin_builder.set(*begin);
                end_builder.set(*end);
            }
            path_to_offset.insert(path_id, begins.len());
            begins.push(SparseVector::try_from(begin_builder)?);
            ends.push(SparseVector::try_from(end_builder)?);
        }

        Ok(PositionIndex { path_to_offset, begins, ends })
    }

    /// Returns the rank of the step that begins at the given coordinate.
    ///
    /// Returns [`None`] if the path is not indexed or no step begins there.
    pub fn step_with_begin(&self, path_id: usize, coordinate: usize) -> Option<usize> {
        let offset = self.path_to_offset.get(&path_id)?;
        let (rank, value) = self.begins[*offset].predecessor(coordinate).next()?;
        if value == coordinate { Some(rank) } else { None }
    }

    /// Returns the rank of the step that ends at the given coordinate.
    ///
    /// Returns [`None`] if the path is not indexed or no step ends there.
    pub fn step_with_end(&self, path_id: usize, coordinate: usize) -> Option<usize> {
        let offset = self.path_to_offset.get(&path_id)?;
        let (rank, value) = self.ends[*offset].predecessor(coordinate).next()?;
        if value == coordinate { Some(rank) } else { None }
    }
}

//-----------------------------------------------------------------------------
