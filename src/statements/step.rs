//! Step statements.
//!
//! A step is both a `vg:Step` and a `faldo:Region`. It points at its path
//! with `vg:path`, at its rank with `vg:rank`, at the visited node with
//! `vg:node` or `vg:reverseOfNode` depending on the orientation of the visit,
//! and at its begin and end positions with `faldo:begin` and `faldo:end`.

use super::{filter_object, matches_predicate, node_ref_from_term, path_ref_from_term,
    position_ref_from_term, step_ref_from_term};
use crate::graph::PathGraph;
use crate::model::{IriString, Literal, NodeRef, Statement, StepRef, Term};
use crate::store::GraphStore;
use crate::vocab::{faldo, rdf, vg};
use crate::ScopedIter;

//-----------------------------------------------------------------------------

pub(super) fn admits_predicate(predicate: Option<&IriString>) -> bool {
    match predicate {
        None => true,
        Some(iri) => {
            iri.is(rdf::TYPE) || iri.is(vg::RANK) || iri.is(vg::PATH_PRED)
                || iri.is(vg::NODE_PRED) || iri.is(vg::REVERSE_OF_NODE)
                || iri.is(faldo::BEGIN) || iri.is(faldo::END)
        }
    }
}

pub(super) fn admits_object<G: PathGraph>(
    store: &GraphStore<G>, object: Option<&Term<'_, G>>
) -> bool {
    match object {
        None => true,
        Some(Term::Literal(Literal::Integer(_))) => true,
        Some(Term::Literal(_)) => false,
        Some(term) => match term.uri() {
            Some(uri) => {
                uri == vg::STEP || uri == faldo::REGION
                    || path_ref_from_term(store, term).is_some()
                    || node_ref_from_term(store, term).is_some()
                    || position_ref_from_term(store, term).is_some()
            }
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
        Some(term) => match step_ref_from_term(store, &term) {
            Some(step) => filter_object(known_subject(store, step, &predicate), object),
            None => ScopedIter::empty(),
        },
        None => {
            let graph = store.graph();
            let statements = graph.paths().flat_map(move |path_id| {
                let step_pred = predicate.clone();
                let steps = graph.steps_of(path_id).enumerate();
                ScopedIter::new(steps).flat_map(move |(rank, _)| {
                    known_subject(store, StepRef::new(store, path_id, rank), &step_pred)
                })
            });
            filter_object(statements, object)
        }
    }
}

pub(super) fn predicate_cardinality<G: PathGraph>(
    store: &GraphStore<G>, predicate: Option<&IriString>
) -> f64 {
    let steps = store.graph().step_count() as f64;
    match predicate {
        None => 7.0 * steps,
        Some(iri) if iri.is(rdf::TYPE) => 2.0 * steps,
        // Resolving a boundary coordinate is more expensive than the other
        // members.
        Some(iri) if iri.is(faldo::BEGIN) || iri.is(faldo::END) => 4.0 * steps,
        Some(iri) if iri.is(vg::RANK) || iri.is(vg::PATH_PRED)
            || iri.is(vg::NODE_PRED) || iri.is(vg::REVERSE_OF_NODE) => steps,
        Some(_) => 0.0,
    }
}

//-----------------------------------------------------------------------------

// All statements with the given step as the subject.
fn known_subject<'a, G: PathGraph>(
    store: &'a GraphStore<G>, step: StepRef<'a, G>, predicate: &Option<IriString>
) -> ScopedIter<'a, Statement<'a, G>> {
    let handle = match step.node_handle() {
        Some(handle) => handle,
        None => return ScopedIter::empty(),
    };
    let subject = Term::Step(step);

    let mut items = Vec::with_capacity(8);
    if matches_predicate(predicate, rdf::TYPE) {
        items.push(Statement::new(
            subject.clone(), IriString::known(rdf::TYPE), Term::Iri(IriString::known(vg::STEP))
        ));
        items.push(Statement::new(
            subject.clone(), IriString::known(rdf::TYPE), Term::Iri(IriString::known(faldo::REGION))
        ));
    }
    if matches_predicate(predicate, vg::RANK) {
        items.push(Statement::new(
            subject.clone(), IriString::known(vg::RANK), Term::integer(step.rank() as i64)
        ));
    }
    if matches_predicate(predicate, vg::PATH_PRED) {
        items.push(Statement::new(
            subject.clone(), IriString::known(vg::PATH_PRED), Term::Path(step.path())
        ));
    }
    let visited = Term::Node(NodeRef::new(store, handle));
    if store.graph().is_reverse(handle) {
        if matches_predicate(predicate, vg::REVERSE_OF_NODE) {
            items.push(Statement::new(
                subject.clone(), IriString::known(vg::REVERSE_OF_NODE), visited
            ));
        }
    } else if matches_predicate(predicate, vg::NODE_PRED) {
        items.push(Statement::new(subject.clone(), IriString::known(vg::NODE_PRED), visited));
    }
    if matches_predicate(predicate, faldo::BEGIN) {
        items.push(Statement::new(
            subject.clone(), IriString::known(faldo::BEGIN), Term::Position(step.begin())
        ));
    }
    if matches_predicate(predicate, faldo::END) {
        items.push(Statement::new(
            subject, IriString::known(faldo::END), Term::Position(step.end())
        ));
    }
    ScopedIter::from_vec(items)
}

//-----------------------------------------------------------------------------
