//! # vg-rdf: a pangenome variation graph as a virtual RDF triple store.
//!
//! A variation graph consists of nodes with DNA sequences, edges between
//! oriented nodes, and named paths that visit nodes step by step. This crate
//! presents such a graph as a read-only RDF dataset without materializing a
//! single triple: every statement is derived from the graph on demand, and
//! every IRI encodes the identity of a graph element.
//!
//! The crate builds on the [`gbwt`] crate for node handles and on
//! [`simple_sds`] for the coordinate index over paths.
//!
//! ### Basic concepts
//!
//! Nodes are accessed by handles, which are [`gbwt::GBWT`] node identifiers.
//! A handle encodes both the identifier of the node and its orientation.
//! The IRI of a node hides the orientation; link statements between nodes
//! carry it in their predicates instead.
//!
//! Paths are accessed by dense identifiers. A path named by an absolute
//! `http`, `https`, or `ftp` IRI keeps that IRI; any other path lives under
//! the base IRI of the store. Steps and step positions live under their path.
//!
//! See [`GraphStore`] for the IRI codec, [`TripleEngine`] for pattern queries,
//! and [`PathGraph`] for the graph interface. [`SimplePathGraph`] is an
//! in-memory implementation that can be read from GFA 1 with [`gfa`].

pub mod engine;
pub mod gfa;
pub mod graph;
pub mod iter;
pub mod model;
pub mod position;
pub mod simple_graph;
pub mod statements;
pub mod store;
pub mod utils;
pub mod vocab;

pub use engine::TripleEngine;
pub use graph::{Edge, PathGraph};
pub use iter::ScopedIter;
pub use model::{IriString, Literal, NodeRef, PathRef, PositionKind, SequenceLiteral,
    Statement, StepPositionRef, StepRef, Term};
pub use position::PositionIndex;
pub use simple_graph::SimplePathGraph;
pub use store::GraphStore;
