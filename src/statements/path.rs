//! Path statements: the `vg:Path` class and the name as an `rdfs:label`.

use super::{filter_object, matches_predicate, path_ref_from_term};
use crate::graph::PathGraph;
use crate::model::{IriString, Literal, PathRef, Statement, Term};
use crate::store::GraphStore;
use crate::vocab::{rdf, rdfs, vg};
use crate::ScopedIter;

//-----------------------------------------------------------------------------

pub(super) fn admits_predicate(predicate: Option<&IriString>) -> bool {
    match predicate {
        None => true,
        Some(iri) => iri.is(rdf::TYPE) || iri.is(rdfs::LABEL),
    }
}

pub(super) fn admits_object<G: PathGraph>(
    _store: &GraphStore<G>, object: Option<&Term<'_, G>>
) -> bool {
    match object {
        None => true,
        Some(Term::Literal(Literal::Integer(_))) => false,
        Some(Term::Literal(_)) => true,
        Some(term) => term.uri().as_deref() == Some(vg::PATH),
    }
}

pub(super) fn generate<'a, G: PathGraph>(
    store: &'a GraphStore<G>,
    subject: Option<Term<'a, G>>,
    predicate: Option<IriString>,
    object: Option<Term<'a, G>>,
) -> ScopedIter<'a, Statement<'a, G>> {
    match subject {
        Some(term) => match path_ref_from_term(store, &term) {
            Some(path) => filter_object(known_subject(store, path, &predicate), object),
            None => ScopedIter::empty(),
        },
        None => {
            let statements = store.graph().paths().flat_map(move |path_id| {
                known_subject(store, PathRef::new(store, path_id), &predicate)
            });
            filter_object(statements, object)
        }
    }
}

pub(super) fn predicate_cardinality<G: PathGraph>(
    store: &GraphStore<G>, predicate: Option<&IriString>
) -> f64 {
    let paths = store.graph().path_count() as f64;
    match predicate {
        None => 2.0 * paths,
        Some(iri) if iri.is(rdf::TYPE) || iri.is(rdfs::LABEL) => paths,
        Some(_) => 0.0,
    }
}

//-----------------------------------------------------------------------------

// All statements with the given path as the subject.
fn known_subject<'a, G: PathGraph>(
    store: &'a GraphStore<G>, path: PathRef<'a, G>, predicate: &Option<IriString>
) -> ScopedIter<'a, Statement<'a, G>> {
    let name = match store.graph().path_name(path.id()) {
        Some(name) => name,
        None => return ScopedIter::empty(),
    };
    let subject = Term::Path(path);

    let mut items = Vec::with_capacity(2);
    if matches_predicate(predicate, rdf::TYPE) {
        items.push(Statement::new(
            subject.clone(), IriString::known(rdf::TYPE), Term::Iri(IriString::known(vg::PATH))
        ));
    }
    if matches_predicate(predicate, rdfs::LABEL) {
        items.push(Statement::new(
            subject, IriString::known(rdfs::LABEL), Term::Literal(Literal::String(name))
        ));
    }
    ScopedIter::from_vec(items)
}

//-----------------------------------------------------------------------------
