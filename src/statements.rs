//! Statement generators.
//!
//! Each generator owns one family of virtual triples: node statements, step
//! statements, step position statements, and path statements. A generator can
//! tell whether a pattern component could ever match one of its statements,
//! estimate how many statements a pattern selects, and produce the matching
//! statements lazily.
//!
//! The set of families is closed, so the generators form an enum with match
//! dispatch instead of a trait object.

use crate::graph::PathGraph;
use crate::model::{IriString, NodeRef, PathRef, Statement, StepPositionRef, StepRef, Term};
use crate::store::GraphStore;
use crate::ScopedIter;

mod node;
mod path;
mod step;
mod step_position;


//-----------------------------------------------------------------------------

/// The statement families of the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Generator {
    /// Node classes, sequences, and links between nodes.
    Node,
    /// Step classes and the step's path, node, rank, and region boundaries.
    Step,
    /// Begin and end positions of steps.
    StepPosition,
    /// Path classes and labels.
    Path,
}

/// All generators, in the order their statements are concatenated.
pub const ALL: [Generator; 4] = [
    Generator::Node,
    Generator::Step,
    Generator::StepPosition,
    Generator::Path,
];

impl Generator {
    /// Returns `true` if a statement of this family could have the given
    /// subject. An unbound subject always matches; a literal never does.
    pub fn admits_subject<G: PathGraph>(self, subject: Option<&Term<'_, G>>) -> bool {
        match subject {
            None => true,
            Some(term) => !term.is_literal(),
        }
    }

    /// Returns `true` if this family has statements with the given predicate.
    pub fn admits_predicate(self, predicate: Option<&IriString>) -> bool {
        match self {
            Generator::Node => node::admits_predicate(predicate),
            Generator::Step => step::admits_predicate(predicate),
            Generator::StepPosition => step_position::admits_predicate(predicate),
            Generator::Path => path::admits_predicate(predicate),
        }
    }

    /// Returns `true` if a statement of this family could have the given
    /// object.
    pub fn admits_object<G: PathGraph>(
        self, store: &GraphStore<G>, object: Option<&Term<'_, G>>
    ) -> bool {
        match self {
            Generator::Node => node::admits_object(store, object),
            Generator::Step => step::admits_object(store, object),
            Generator::StepPosition => step_position::admits_object(store, object),
            Generator::Path => path::admits_object(store, object),
        }
    }

    /// Returns the statements of this family that match the pattern.
    ///
    /// Every returned statement is consistent with each bound component.
    pub fn generate<'a, G: PathGraph>(
        self,
        store: &'a GraphStore<G>,
        subject: Option<Term<'a, G>>,
        predicate: Option<IriString>,
        object: Option<Term<'a, G>>,
    ) -> ScopedIter<'a, Statement<'a, G>> {
        match self {
            Generator::Node => node::generate(store, subject, predicate, object),
            Generator::Step => step::generate(store, subject, predicate, object),
            Generator::StepPosition => step_position::generate(store, subject, predicate, object),
            Generator::Path => path::generate(store, subject, predicate, object),
        }
    }

    /// Estimates the number of statements selected by the predicate alone.
    ///
    /// For an admitted predicate the estimate is at least the number of
    /// statements the family holds under it.
    pub fn estimate_predicate_cardinality<G: PathGraph>(
        self, store: &GraphStore<G>, predicate: Option<&IriString>
    ) -> f64 {
        match self {
            Generator::Node => node::predicate_cardinality(store, predicate),
            Generator::Step => step::predicate_cardinality(store, predicate),
            Generator::StepPosition => step_position::predicate_cardinality(store, predicate),
            Generator::Path => path::predicate_cardinality(store, predicate),
        }
    }

    /// Estimates the number of statements selected by the full pattern as the
    /// minimum over the three components.
    pub fn estimate_cardinality<G: PathGraph>(
        self,
        store: &GraphStore<G>,
        subject: Option<&Term<'_, G>>,
        predicate: Option<&IriString>,
        object: Option<&Term<'_, G>>,
    ) -> f64 {
        if !self.admits_subject(subject)
            || !self.admits_predicate(predicate)
            || !self.admits_object(store, object)
        {
            return 0.0;
        }
        let subject_estimate = match subject {
            None => f64::MAX,
            Some(term) if term.is_literal() => 0.0,
            Some(_) => 10.0,
        };
        let object_estimate = match self {
            Generator::Node => node::object_cardinality(store, object),
            _ => match object {
                None => f64::MAX,
                Some(_) => 10.0,
            },
        };
        let predicate_estimate = self.estimate_predicate_cardinality(store, predicate);
        subject_estimate.min(predicate_estimate).min(object_estimate)
    }
}

//-----------------------------------------------------------------------------

// Shared helpers for the generator modules.

// A bound predicate matches the constant; an unbound predicate matches all.
fn matches_predicate(predicate: &Option<IriString>, constant: &'static str) -> bool {
    match predicate {
        None => true,
        Some(iri) => iri.is(constant),
    }
}

// Keeps the statements whose object equals the bound object.
fn filter_object<'a, G: PathGraph>(
    statements: ScopedIter<'a, Statement<'a, G>>,
    object: Option<Term<'a, G>>,
) -> ScopedIter<'a, Statement<'a, G>> {
    match object {
        None => statements,
        Some(object) => statements.filter(move |statement| *statement.object() == object),
    }
}

// Resolves a subject or object term to a node, if it refers to one.
fn node_ref_from_term<'a, G: PathGraph>(
    store: &'a GraphStore<G>, term: &Term<'a, G>
) -> Option<NodeRef<'a, G>> {
    match term {
        Term::Node(node) => Some(*node),
        Term::Iri(iri) => store.node_from_uri(iri.as_str()),
        _ => None,
    }
}

fn path_ref_from_term<'a, G: PathGraph>(
    store: &'a GraphStore<G>, term: &Term<'a, G>
) -> Option<PathRef<'a, G>> {
    match term {
        Term::Path(path) => Some(*path),
        Term::Iri(iri) => store.path_from_uri(iri.as_str()),
        _ => None,
    }
}

fn step_ref_from_term<'a, G: PathGraph>(
    store: &'a GraphStore<G>, term: &Term<'a, G>
) -> Option<StepRef<'a, G>> {
    match term {
        Term::Step(step) => Some(*step),
        Term::Iri(iri) => store.step_from_uri(iri.as_str()),
        _ => None,
    }
}

fn position_ref_from_term<'a, G: PathGraph>(
    store: &'a GraphStore<G>, term: &Term<'a, G>
) -> Option<StepPositionRef<'a, G>> {
    match term {
        Term::Position(position) => Some(*position),
        Term::Iri(iri) => store.position_from_uri(iri.as_str()),
        _ => None,
    }
}

//-----------------------------------------------------------------------------
