//! Step position statements.
//!
//! Every step has a begin and an end position on its path. A position is a
//! `faldo:Position` and a `faldo:ExactPosition`, carries its coordinate under
//! `faldo:position`, and points back at its path with `faldo:reference`.
//!
//! Enumerating all positions walks each path once with a running offset, so
//! the coordinates come out cached instead of being recomputed per step.

use super::{filter_object, matches_predicate, path_ref_from_term, position_ref_from_term};
use crate::graph::PathGraph;
use crate::model::{IriString, Literal, PositionKind, Statement, StepPositionRef, Term};
use crate::position;
use crate::store::GraphStore;
use crate::vocab::{faldo, rdf};
use crate::ScopedIter;

//-----------------------------------------------------------------------------

pub(super) fn admits_predicate(predicate: Option<&IriString>) -> bool {
    match predicate {
        None => true,
        Some(iri) => {
            iri.is(rdf::TYPE) || iri.is(faldo::POSITION) || iri.is(faldo::REFERENCE)
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
                uri == faldo::POSITION_CLASS || uri == faldo::EXACT_POSITION
                    || path_ref_from_term(store, term).is_some()
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
        Some(term) => match position_ref_from_term(store, &term) {
            Some(position) => filter_object(known_subject(position, &predicate), object),
            None => ScopedIter::empty(),
        },
        None => {
            let graph = store.graph();
            let statements = graph.paths().flat_map(move |path_id| {
                let step_pred = predicate.clone();
                position::path_positions(graph, path_id).flat_map(move |(rank, begin, end)| {
                    let begin_ref = StepPositionRef::with_coordinate(
                        store, path_id, rank, PositionKind::Begin, begin
                    );
                    let end_ref = StepPositionRef::with_coordinate(
                        store, path_id, rank, PositionKind::End, end
                    );
                    known_subject(begin_ref, &step_pred)
                        .chain(known_subject(end_ref, &step_pred))
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
        None => 8.0 * steps,
        Some(iri) if iri.is(rdf::TYPE) => 4.0 * steps,
        Some(iri) if iri.is(faldo::POSITION) || iri.is(faldo::REFERENCE) => 2.0 * steps,
        Some(_) => 0.0,
    }
}

//-----------------------------------------------------------------------------

// All statements with the given position as the subject.
fn known_subject<'a, G: PathGraph>(
    position: StepPositionRef<'a, G>, predicate: &Option<IriString>
) -> ScopedIter<'a, Statement<'a, G>> {
    let subject = Term::Position(position);

    let mut items = Vec::with_capacity(4);
    if matches_predicate(predicate, rdf::TYPE) {
        items.push(Statement::new(
            subject.clone(),
            IriString::known(rdf::TYPE),
            Term::Iri(IriString::known(faldo::POSITION_CLASS)),
        ));
        items.push(Statement::new(
            subject.clone(),
            IriString::known(rdf::TYPE),
            Term::Iri(IriString::known(faldo::EXACT_POSITION)),
        ));
    }
    if matches_predicate(predicate, faldo::POSITION) {
        items.push(Statement::new(
            subject.clone(),
            IriString::known(faldo::POSITION),
            Term::integer(position.coordinate() as i64),
        ));
    }
    if matches_predicate(predicate, faldo::REFERENCE) {
        items.push(Statement::new(
            subject, IriString::known(faldo::REFERENCE), Term::Path(position.path())
        ));
    }
    ScopedIter::from_vec(items)
}

//-----------------------------------------------------------------------------
