//! The virtual triple engine.
//!
//! [`TripleEngine`] answers triple patterns over a [`GraphStore`]. It never
//! materializes the graph as triples: a query interns the pattern constants,
//! asks each statement generator whether the pattern could match any of its
//! statements, and concatenates the matching generators' lazy outputs.
//! The store is read-only, and every mutating operation fails.

use crate::graph::PathGraph;
use crate::model::{IriString, Statement, Term};
use crate::statements::{self, Generator};
use crate::store::GraphStore;
use crate::vocab::{faldo, rdfs, vg};
use crate::ScopedIter;

#[cfg(test)]
mod tests;

//-----------------------------------------------------------------------------

const READ_ONLY: &str = "The triple store is read-only";

/// A virtual triple store over a graph.
///
/// # Examples
///
/// ```
/// use vg_rdf::{GraphStore, SimplePathGraph, Term, TripleEngine};
/// use vg_rdf::vocab::{rdf, vg};
/// use gbwt::{Orientation, support};
///
/// let mut graph = SimplePathGraph::new();
/// graph.add_node(1, b"GATT".to_vec()).unwrap();
/// graph.add_node(2, b"ACA".to_vec()).unwrap();
/// let store = GraphStore::new(graph, "http://example.org/vg/").unwrap();
/// let engine = TripleEngine::new(&store);
///
/// // Two nodes, each with a class statement.
/// let types = engine.query(
///     None, Some(vg_rdf::IriString::known(rdf::TYPE)), Some(Term::iri(vg::NODE))
/// );
/// assert_eq!(types.count(), 2);
/// ```
pub struct TripleEngine<'a, G: PathGraph> {
    store: &'a GraphStore<G>,
}

impl<'a, G: PathGraph> TripleEngine<'a, G> {
    /// Creates an engine over the store.
    pub fn new(store: &'a GraphStore<G>) -> Self {
        TripleEngine { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &'a GraphStore<G> {
        self.store
    }

    /// Returns the statements matching the pattern.
    ///
    /// An unbound component matches everything. The result is lazy, and
    /// closing it closes every generator output opened so far. The statement
    /// order is fixed for a given store and pattern.
    pub fn query(
        &self,
        subject: Option<Term<'a, G>>,
        predicate: Option<IriString>,
        object: Option<Term<'a, G>>,
    ) -> ScopedIter<'a, Statement<'a, G>> {
        // Rewrite the pattern so that vocabulary constants are shared.
        let subject = subject.map(Term::interned);
        let predicate = predicate.map(IriString::interned);
        let object = object.map(Term::interned);

        let store = self.store;
        let mut result = ScopedIter::empty();
        for generator in statements::ALL {
            if generator.admits_subject(subject.as_ref())
                && generator.admits_predicate(predicate.as_ref())
                && generator.admits_object(store, object.as_ref())
            {
                result = result.chain(generator.generate(
                    store, subject.clone(), predicate.clone(), object.clone()
                ));
            }
        }
        result
    }

    /// Estimates the number of statements matching the pattern.
    ///
    /// The estimate is the maximum over the statement families, which makes it
    /// a ranking signal rather than a count. For a pattern with only the
    /// predicate bound it is an upper bound on the true count within each
    /// family.
    pub fn estimate_cardinality(
        &self,
        subject: Option<&Term<'a, G>>,
        predicate: Option<&IriString>,
        object: Option<&Term<'a, G>>,
    ) -> f64 {
        let mut result = 0.0f64;
        for generator in statements::ALL {
            result = result.max(generator.estimate_cardinality(
                self.store, subject, predicate, object
            ));
        }
        result
    }

    /// Returns an estimate for a single statement family.
    pub fn estimate_family_cardinality(
        &self,
        family: Generator,
        subject: Option<&Term<'a, G>>,
        predicate: Option<&IriString>,
        object: Option<&Term<'a, G>>,
    ) -> f64 {
        family.estimate_cardinality(self.store, subject, predicate, object)
    }

    /// Returns the namespace prefixes the store suggests for serialization.
    pub fn namespaces(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("vg", vg::NAMESPACE),
            ("faldo", faldo::NAMESPACE),
            ("rdfs", rdfs::NAMESPACE),
        ]
    }

    /// Returns the namespace for the prefix, if the store suggests one.
    pub fn namespace(&self, prefix: &str) -> Option<&'static str> {
        self.namespaces().iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, namespace)| *namespace)
    }

    /// Fails: the store is derived from the graph and cannot be changed.
    pub fn add_statement(
        &self, _subject: &Term<'a, G>, _predicate: &IriString, _object: &Term<'a, G>
    ) -> Result<(), String> {
        Err(String::from(READ_ONLY))
    }

    /// Fails: the store is derived from the graph and cannot be changed.
    pub fn remove_statement(
        &self,
        _subject: Option<&Term<'a, G>>,
        _predicate: Option<&IriString>,
        _object: Option<&Term<'a, G>>,
    ) -> Result<(), String> {
        Err(String::from(READ_ONLY))
    }

    /// Fails: the store is derived from the graph and cannot be changed.
    pub fn clear(&self) -> Result<(), String> {
        Err(String::from(READ_ONLY))
    }

    /// Fails: the namespace table is fixed.
    pub fn set_namespace(&self, _prefix: &str, _namespace: &str) -> Result<(), String> {
        Err(String::from(READ_ONLY))
    }

    /// Fails: the namespace table is fixed.
    pub fn remove_namespace(&self, _prefix: &str) -> Result<(), String> {
        Err(String::from(READ_ONLY))
    }
}

//-----------------------------------------------------------------------------
