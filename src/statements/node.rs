//! Node statements: classes, sequences, and links.
//!
//! A node with identifier `n` yields `rdf:type vg:Node` and an `rdf:value`
//! statement with its forward sequence. Every edge yields two link statements
//! from its source node to its target node: one under the orientation-specific
//! predicate and one under `vg:links`.

use super::{filter_object, matches_predicate, node_ref_from_term};
use crate::graph::{Edge, PathGraph};
use crate::model::{IriString, Literal, NodeRef, SequenceLiteral, Statement, Term};
use crate::store::GraphStore;
use crate::vocab::{rdf, vg};
use crate::ScopedIter;

use gbwt::Orientation;
use gbwt::support;

//-----------------------------------------------------------------------------

pub(super) fn admits_predicate(predicate: Option<&IriString>) -> bool {
    match predicate {
        None => true,
        Some(iri) => {
            iri.is(rdf::TYPE) || iri.is(rdf::VALUE) || iri.is(vg::LINKS)
                || link_orientation(iri).is_some()
        }
    }
}

pub(super) fn admits_object<G: PathGraph>(
    store: &GraphStore<G>, object: Option<&Term<'_, G>>
) -> bool {
    match object {
        None => true,
        Some(Term::Literal(Literal::Integer(_))) => false,
        Some(Term::Literal(_)) => true,
        Some(term) => match term.uri() {
            Some(uri) => uri == vg::NODE || store.node_from_uri(&uri).is_some(),
            None => false,
        },
    }
}

pub(super) fn generate<'a, G: PathGraph>(
    store: &'a GraphStore<G>,
    subject: Option<Term<'a, G>>,
    predicate: Option<IriString>,
    object: Option<Term<'a, G>>,
) -> ScopedIter<'a, Statement<'a, G>> {
    match subject {
        Some(term) => match node_ref_from_term(store, &term) {
            Some(node) => filter_object(known_subject(store, node, predicate), object),
            None => ScopedIter::empty(),
        },
        None => unbound_subject(store, predicate, object),
    }
}

pub(super) fn predicate_cardinality<G: PathGraph>(
    store: &GraphStore<G>, predicate: Option<&IriString>
) -> f64 {
    let graph = store.graph();
    let nodes = graph.node_count() as f64;
    let edges = graph.edge_count() as f64;
    match predicate {
        None => 2.0 * (nodes + edges),
        Some(iri) if iri.is(rdf::TYPE) => nodes,
        // Reading a sequence is expensive, so value statements are penalized.
        Some(iri) if iri.is(rdf::VALUE) => 10.0 * nodes,
        Some(iri) if iri.is(vg::LINKS) => edges,
        Some(iri) if link_orientation(iri).is_some() => edges,
        Some(_) => 0.0,
    }
}

pub(super) fn object_cardinality<G: PathGraph>(
    store: &GraphStore<G>, object: Option<&Term<'_, G>>
) -> f64 {
    let nodes = store.graph().node_count() as f64;
    match object {
        None => f64::MAX,
        Some(Term::Literal(Literal::Integer(_))) => 0.0,
        Some(Term::Literal(literal)) => {
            // Short sequences match many nodes.
            if literal.label().len() == 1 { 0.6 * nodes } else { 0.4 * nodes }
        }
        Some(term) => match term.uri() {
            Some(uri) if uri == vg::NODE => nodes,
            Some(uri) if store.node_from_uri(&uri).is_some() => 10.0,
            _ => 0.0,
        },
    }
}

//-----------------------------------------------------------------------------

// The orientation pair of a specific link predicate.
fn link_orientation(predicate: &IriString) -> Option<(Orientation, Orientation)> {
    if predicate.is(vg::LINKS_FORWARD_TO_FORWARD) {
        Some((Orientation::Forward, Orientation::Forward))
    } else if predicate.is(vg::LINKS_FORWARD_TO_REVERSE) {
        Some((Orientation::Forward, Orientation::Reverse))
    } else if predicate.is(vg::LINKS_REVERSE_TO_FORWARD) {
        Some((Orientation::Reverse, Orientation::Forward))
    } else if predicate.is(vg::LINKS_REVERSE_TO_REVERSE) {
        Some((Orientation::Reverse, Orientation::Reverse))
    } else {
        None
    }
}

// The orientation-specific predicate of an edge.
fn link_predicate<G: PathGraph>(store: &GraphStore<G>, edge: Edge) -> &'static str {
    let graph = store.graph();
    match (graph.is_reverse(edge.from), graph.is_reverse(edge.to)) {
        (false, false) => vg::LINKS_FORWARD_TO_FORWARD,
        (false, true) => vg::LINKS_FORWARD_TO_REVERSE,
        (true, false) => vg::LINKS_REVERSE_TO_FORWARD,
        (true, true) => vg::LINKS_REVERSE_TO_REVERSE,
    }
}

// Class and sequence statements for the node, restricted by the predicate.
fn node_triples<'a, G: PathGraph>(
    store: &'a GraphStore<G>, handle: usize, predicate: &Option<IriString>
) -> ScopedIter<'a, Statement<'a, G>> {
    let node = NodeRef::new(store, handle);
    let mut items = Vec::with_capacity(2);
    if matches_predicate(predicate, rdf::TYPE) {
        items.push(Statement::new(
            Term::Node(node),
            IriString::known(rdf::TYPE),
            Term::Iri(IriString::known(vg::NODE)),
        ));
    }
    if matches_predicate(predicate, rdf::VALUE) {
        items.push(Statement::new(
            Term::Node(node),
            IriString::known(rdf::VALUE),
            Term::Literal(Literal::Sequence(SequenceLiteral::new(store, handle))),
        ));
    }
    ScopedIter::from_vec(items)
}

// Link statements for the edge, restricted by the predicate.
fn edge_triples<'a, G: PathGraph>(
    store: &'a GraphStore<G>, edge: Edge, predicate: &Option<IriString>
) -> ScopedIter<'a, Statement<'a, G>> {
    let subject = Term::Node(NodeRef::new(store, edge.from));
    let object = Term::Node(NodeRef::new(store, edge.to));
    let specific = link_predicate(store, edge);
    let mut items = Vec::with_capacity(2);
    if matches_predicate(predicate, specific) {
        items.push(Statement::new(subject.clone(), IriString::known(specific), object.clone()));
    }
    if matches_predicate(predicate, vg::LINKS) {
        items.push(Statement::new(subject, IriString::known(vg::LINKS), object));
    }
    ScopedIter::from_vec(items)
}

// All statements with the given node as the subject.
fn known_subject<'a, G: PathGraph>(
    store: &'a GraphStore<G>, node: NodeRef<'a, G>, predicate: Option<IriString>
) -> ScopedIter<'a, Statement<'a, G>> {
    let graph = store.graph();
    if !graph.has_node(node.id()) {
        return ScopedIter::empty();
    }
    let forward = support::encode_node(node.id(), Orientation::Forward);
    let reverse = support::encode_node(node.id(), Orientation::Reverse);

    let own = node_triples(store, forward, &predicate);
    let forward_pred = predicate.clone();
    let forward_links = graph.successors(forward)
        .flat_map(move |to| edge_triples(store, Edge::new(forward, to), &forward_pred));
    let reverse_links = graph.successors(reverse)
        .flat_map(move |to| edge_triples(store, Edge::new(reverse, to), &predicate));
    own.chain(forward_links).chain(reverse_links)
}

// All node statements matching a pattern with an unbound subject.
fn unbound_subject<'a, G: PathGraph>(
    store: &'a GraphStore<G>,
    predicate: Option<IriString>,
    object: Option<Term<'a, G>>,
) -> ScopedIter<'a, Statement<'a, G>> {
    let graph = store.graph();

    // A literal object can only match a sequence statement.
    if let Some(Term::Literal(literal)) = &object {
        if !matches_predicate(&predicate, rdf::VALUE) {
            return ScopedIter::empty();
        }
        let label = literal.label();
        if !is_dna_sequence(&label) {
            return ScopedIter::empty();
        }
        let nodes = match graph.nodes_with_sequence(label.as_bytes()) {
            Some(hits) => hits,
            None => {
                // No sequence index; scan all nodes.
                let wanted = label.clone().into_bytes();
                graph.node_handles()
                    .filter(move |handle| graph.sequence(*handle).as_deref() == Some(wanted.as_slice()))
            }
        };
        let statements = nodes.map(move |handle| Statement::new(
            Term::Node(NodeRef::new(store, handle)),
            IriString::known(rdf::VALUE),
            Term::Literal(Literal::Sequence(SequenceLiteral::new(store, handle))),
        ));
        return filter_object(statements, object);
    }

    // A bound resource object matches either the class statement or links
    // into one node.
    if let Some(term) = &object {
        if let Term::Iri(iri) = term {
            if iri.is(vg::NODE) {
                if !matches_predicate(&predicate, rdf::TYPE) {
                    return ScopedIter::empty();
                }
                return graph.node_handles().map(move |handle| Statement::new(
                    Term::Node(NodeRef::new(store, handle)),
                    IriString::known(rdf::TYPE),
                    Term::Iri(IriString::known(vg::NODE)),
                ));
            }
        }
        return match node_ref_from_term(store, term) {
            Some(target) => {
                let id = target.id();
                let incoming = graph.edges()
                    .filter(move |edge| support::node_id(edge.to) == id)
                    .flat_map(move |edge| edge_triples(store, edge, &predicate));
                filter_object(incoming, object)
            }
            None => ScopedIter::empty(),
        };
    }

    // Unbound object: every node statement, then every link statement.
    let node_part = if matches_predicate(&predicate, rdf::TYPE) || matches_predicate(&predicate, rdf::VALUE) {
        let node_pred = predicate.clone();
        graph.node_handles().flat_map(move |handle| node_triples(store, handle, &node_pred))
    } else {
        ScopedIter::empty()
    };
    let edge_part = graph.edges().flat_map(move |edge| edge_triples(store, edge, &predicate));
    node_part.chain(edge_part)
}

//-----------------------------------------------------------------------------

/// Returns `true` if the string is a nonempty DNA sequence over `ACGTN`,
/// in either case.
pub(super) fn is_dna_sequence(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| matches!(
        b, b'A' | b'C' | b'G' | b'T' | b'N' | b'a' | b'c' | b'g' | b't' | b'n'
    ))
}

//-----------------------------------------------------------------------------
