//! RDF terms backed by the graph.
//!
//! The store never materializes triples. Subjects and objects are lightweight
//! references into the graph: a [`NodeRef`] is a node handle, a [`StepRef`] is
//! a path identifier with a rank, and so on. Each reference renders its IRI on
//! demand and compares through the graph, so two references are equal exactly
//! when their IRIs are.
//!
//! [`IriString`] distinguishes vocabulary constants from other IRIs. Constants
//! compare by pointer identity first, which makes predicate dispatch in the
//! statement generators cheap.

use crate::graph::PathGraph;
use crate::position;
use crate::store::GraphStore;
use crate::vocab::{self, xsd};

use gbwt::support;

use std::fmt;


//-----------------------------------------------------------------------------

/// An IRI that may be one of the shared vocabulary constants.
///
/// # Examples
///
/// ```
/// use vg_rdf::IriString;
/// use vg_rdf::vocab;
///
/// let iri = IriString::new("http://biohackathon.org/resource/vg#Node");
/// assert!(iri.is(vocab::vg::NODE));
/// let other = IriString::new("http://example.org/vg/node/1");
/// assert!(!other.is(vocab::vg::NODE));
/// ```
#[derive(Clone, Debug)]
pub enum IriString {
    /// A shared vocabulary constant.
    Known(&'static str),
    /// Any other IRI.
    Owned(String),
}

impl IriString {
    /// Creates an IRI, interning it against the vocabulary constants.
    pub fn new(iri: &str) -> Self {
        match vocab::intern(iri) {
            Some(constant) => IriString::Known(constant),
            None => IriString::Owned(iri.to_string()),
        }
    }

    /// Creates an IRI from a known vocabulary constant.
    pub fn known(constant: &'static str) -> Self {
        IriString::Known(constant)
    }

    /// Returns the IRI as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            IriString::Known(constant) => constant,
            IriString::Owned(iri) => iri,
        }
    }

    /// Returns `true` if this IRI is the given vocabulary constant.
    ///
    /// Compares by pointer identity first and falls back to string equality,
    /// so the result does not depend on whether the IRI was interned.
    pub fn is(&self, constant: &'static str) -> bool {
        match self {
            IriString::Known(c) => std::ptr::eq(c.as_ptr(), constant.as_ptr()) || *c == constant,
            IriString::Owned(iri) => iri == constant,
        }
    }

    /// Returns an interned copy if the IRI matches a vocabulary constant.
    pub fn interned(self) -> Self {
        match self {
            IriString::Owned(iri) => IriString::new(&iri),
            known => known,
        }
    }
}

impl PartialEq for IriString {
    fn eq(&self, other: &Self) -> bool {
        if let (IriString::Known(a), IriString::Known(b)) = (self, other) {
            if std::ptr::eq(a.as_ptr(), b.as_ptr()) {
                return true;
            }
        }
        self.as_str() == other.as_str()
    }
}

impl Eq for IriString {}

impl fmt::Display for IriString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

//-----------------------------------------------------------------------------

/// A graph node as an RDF resource.
///
/// The IRI is `{base}node/{id}` and hides the orientation of the handle.
pub struct NodeRef<'a, G: PathGraph> {
    handle: usize,
    store: &'a GraphStore<G>,
}

impl<'a, G: PathGraph> NodeRef<'a, G> {
    /// Creates a reference to the node behind the handle.
    pub fn new(store: &'a GraphStore<G>, handle: usize) -> Self {
        NodeRef { handle, store }
    }

    /// Returns the oriented node handle.
    pub fn handle(&self) -> usize {
        self.handle
    }

    /// Returns the node identifier.
    pub fn id(&self) -> usize {
        support::node_id(self.handle)
    }

    /// Returns the IRI of the node.
    pub fn to_uri(&self) -> String {
        format!("{}{}", self.store.node_namespace(), self.id())
    }
}

impl<'a, G: PathGraph> PartialEq for NodeRef<'a, G> {
    fn eq(&self, other: &Self) -> bool {
        let graph = self.store.graph();
        if graph.is_reverse(self.handle) == graph.is_reverse(other.handle) {
            graph.equal_nodes(self.handle, other.handle)
        } else {
            graph.equal_nodes(self.handle, graph.flip(other.handle))
        }
    }
}

impl<'a, G: PathGraph> Eq for NodeRef<'a, G> {}

impl<'a, G: PathGraph> Clone for NodeRef<'a, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, G: PathGraph> Copy for NodeRef<'a, G> {}

impl<'a, G: PathGraph> fmt::Display for NodeRef<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.to_uri())
    }
}

impl<'a, G: PathGraph> fmt::Debug for NodeRef<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

//-----------------------------------------------------------------------------

/// A path as an RDF resource.
///
/// A path with an absolute `http`, `https`, or `ftp` name uses the name as its
/// IRI; any other path gets `{base}path/{name}`.
pub struct PathRef<'a, G: PathGraph> {
    path_id: usize,
    store: &'a GraphStore<G>,
}

impl<'a, G: PathGraph> PathRef<'a, G> {
    /// Creates a reference to the path.
    pub fn new(store: &'a GraphStore<G>, path_id: usize) -> Self {
        PathRef { path_id, store }
    }

    /// Returns the path identifier.
    pub fn id(&self) -> usize {
        self.path_id
    }

    /// Returns the name of the path.
    pub fn name(&self) -> Option<String> {
        self.store.graph().path_name(self.path_id)
    }

    /// Returns the IRI of the path.
    pub fn to_uri(&self) -> String {
        self.store.path_namespace(self.path_id).unwrap_or_default()
    }
}

impl<'a, G: PathGraph> PartialEq for PathRef<'a, G> {
    fn eq(&self, other: &Self) -> bool {
        self.path_id == other.path_id
    }
}

impl<'a, G: PathGraph> Eq for PathRef<'a, G> {}

impl<'a, G: PathGraph> Clone for PathRef<'a, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, G: PathGraph> Copy for PathRef<'a, G> {}

impl<'a, G: PathGraph> fmt::Display for PathRef<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.to_uri())
    }
}

impl<'a, G: PathGraph> fmt::Debug for PathRef<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

//-----------------------------------------------------------------------------

/// A step on a path as an RDF resource.
///
/// The IRI is `{path}/step/{rank}`.
pub struct StepRef<'a, G: PathGraph> {
    path_id: usize,
    rank: usize,
    store: &'a GraphStore<G>,
}

impl<'a, G: PathGraph> StepRef<'a, G> {
    /// Creates a reference to the step with the given rank.
    pub fn new(store: &'a GraphStore<G>, path_id: usize, rank: usize) -> Self {
        StepRef { path_id, rank, store }
    }

    /// Returns the identifier of the path the step is on.
    pub fn path_id(&self) -> usize {
        self.path_id
    }

    /// Returns the rank of the step on its path.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns the path as a reference.
    pub fn path(&self) -> PathRef<'a, G> {
        PathRef::new(self.store, self.path_id)
    }

    /// Returns the node handle the step visits.
    pub fn node_handle(&self) -> Option<usize> {
        self.store.graph().step_handle(self.path_id, self.rank)
    }

    /// Returns the begin position of the step.
    pub fn begin(&self) -> StepPositionRef<'a, G> {
        StepPositionRef::new(self.store, self.path_id, self.rank, PositionKind::Begin)
    }

    /// Returns the end position of the step.
    pub fn end(&self) -> StepPositionRef<'a, G> {
        StepPositionRef::new(self.store, self.path_id, self.rank, PositionKind::End)
    }

    /// Returns the IRI of the step.
    pub fn to_uri(&self) -> String {
        format!("{}/step/{}", self.path().to_uri(), self.rank)
    }
}

impl<'a, G: PathGraph> PartialEq for StepRef<'a, G> {
    fn eq(&self, other: &Self) -> bool {
        self.path_id == other.path_id && self.rank == other.rank
    }
}

impl<'a, G: PathGraph> Eq for StepRef<'a, G> {}

impl<'a, G: PathGraph> Clone for StepRef<'a, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, G: PathGraph> Copy for StepRef<'a, G> {}

impl<'a, G: PathGraph> fmt::Display for StepRef<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.to_uri())
    }
}

impl<'a, G: PathGraph> fmt::Debug for StepRef<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

//-----------------------------------------------------------------------------

/// Whether a position marks the begin or the end of a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PositionKind {
    /// First coordinate of the step.
    Begin,
    /// One past the last coordinate of the step.
    End,
}

/// A begin or end position of a step as an RDF resource.
///
/// The IRI is `{path}/position/{coordinate}`. Bulk enumeration caches the
/// coordinate; a reference without a cache computes it with a point query
/// when first needed.
pub struct StepPositionRef<'a, G: PathGraph> {
    path_id: usize,
    rank: usize,
    kind: PositionKind,
    cached: Option<usize>,
    store: &'a GraphStore<G>,
}

impl<'a, G: PathGraph> StepPositionRef<'a, G> {
    /// Creates a position reference that computes its coordinate on demand.
    pub fn new(store: &'a GraphStore<G>, path_id: usize, rank: usize, kind: PositionKind) -> Self {
        StepPositionRef { path_id, rank, kind, cached: None, store }
    }

    /// Creates a position reference with a known coordinate.
    pub fn with_coordinate(
        store: &'a GraphStore<G>, path_id: usize, rank: usize, kind: PositionKind, coordinate: usize
    ) -> Self {
        StepPositionRef { path_id, rank, kind, cached: Some(coordinate), store }
    }

    /// Returns the identifier of the path the position is on.
    pub fn path_id(&self) -> usize {
        self.path_id
    }

    /// Returns the rank of the step this position belongs to.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns whether this is a begin or an end position.
    pub fn kind(&self) -> PositionKind {
        self.kind
    }

    /// Returns the path as a reference.
    pub fn path(&self) -> PathRef<'a, G> {
        PathRef::new(self.store, self.path_id)
    }

    /// Returns the coordinate of the position on its path.
    pub fn coordinate(&self) -> usize {
        if let Some(coordinate) = self.cached {
            return coordinate;
        }
        let graph = self.store.graph();
        let computed = match self.kind {
            PositionKind::Begin => position::step_begin(graph, self.path_id, self.rank),
            PositionKind::End => position::step_end(graph, self.path_id, self.rank),
        };
        computed.unwrap_or(0)
    }

    /// Returns the IRI of the position.
    pub fn to_uri(&self) -> String {
        format!("{}/position/{}", self.path().to_uri(), self.coordinate())
    }
}

impl<'a, G: PathGraph> PartialEq for StepPositionRef<'a, G> {
    fn eq(&self, other: &Self) -> bool {
        self.path_id == other.path_id && self.coordinate() == other.coordinate()
    }
}

impl<'a, G: PathGraph> Eq for StepPositionRef<'a, G> {}

impl<'a, G: PathGraph> Clone for StepPositionRef<'a, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, G: PathGraph> Copy for StepPositionRef<'a, G> {}

impl<'a, G: PathGraph> fmt::Display for StepPositionRef<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.to_uri())
    }
}

impl<'a, G: PathGraph> fmt::Debug for StepPositionRef<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

//-----------------------------------------------------------------------------

/// A node sequence as a lazy string literal.
///
/// The sequence is read from the graph when the label is needed, not when the
/// literal is created.
pub struct SequenceLiteral<'a, G: PathGraph> {
    handle: usize,
    store: &'a GraphStore<G>,
}

impl<'a, G: PathGraph> SequenceLiteral<'a, G> {
    /// Creates a literal for the sequence of the node behind the handle.
    pub fn new(store: &'a GraphStore<G>, handle: usize) -> Self {
        SequenceLiteral { handle, store }
    }

    /// Returns the sequence as a string.
    pub fn label(&self) -> String {
        match self.store.graph().sequence(self.handle) {
            Some(sequence) => String::from_utf8_lossy(&sequence).into_owned(),
            None => String::new(),
        }
    }
}

impl<'a, G: PathGraph> Clone for SequenceLiteral<'a, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, G: PathGraph> Copy for SequenceLiteral<'a, G> {}

//-----------------------------------------------------------------------------

/// A literal value.
pub enum Literal<'a, G: PathGraph> {
    /// A plain string, typed `xsd:string`.
    String(String),
    /// An integer, typed `xsd:integer`.
    Integer(i64),
    /// A node sequence read on demand, typed `xsd:string`.
    Sequence(SequenceLiteral<'a, G>),
}

impl<'a, G: PathGraph> Literal<'a, G> {
    /// Returns the label of the literal.
    pub fn label(&self) -> String {
        match self {
            Literal::String(s) => s.clone(),
            Literal::Integer(i) => i.to_string(),
            Literal::Sequence(s) => s.label(),
        }
    }

    /// Returns the datatype IRI of the literal.
    pub fn datatype(&self) -> &'static str {
        match self {
            Literal::String(_) | Literal::Sequence(_) => xsd::STRING,
            Literal::Integer(_) => xsd::INTEGER,
        }
    }
}

impl<'a, G: PathGraph> PartialEq for Literal<'a, G> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Literal::Integer(a), Literal::Integer(b)) => a == b,
            (Literal::Integer(_), _) | (_, Literal::Integer(_)) => false,
            // String and sequence literals are both xsd:string.
            (a, b) => a.label() == b.label(),
        }
    }
}

impl<'a, G: PathGraph> Eq for Literal<'a, G> {}

impl<'a, G: PathGraph> Clone for Literal<'a, G> {
    fn clone(&self) -> Self {
        match self {
            Literal::String(s) => Literal::String(s.clone()),
            Literal::Integer(i) => Literal::Integer(*i),
            Literal::Sequence(s) => Literal::Sequence(*s),
        }
    }
}

impl<'a, G: PathGraph> fmt::Display for Literal<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(i) => write!(f, "\"{}\"^^<{}>", i, xsd::INTEGER),
            _ => write!(f, "\"{}\"", self.label()),
        }
    }
}

impl<'a, G: PathGraph> fmt::Debug for Literal<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

//-----------------------------------------------------------------------------

/// Any RDF term the store can produce or accept in a pattern.
pub enum Term<'a, G: PathGraph> {
    /// A plain IRI.
    Iri(IriString),
    /// A literal value.
    Literal(Literal<'a, G>),
    /// A node resource.
    Node(NodeRef<'a, G>),
    /// A path resource.
    Path(PathRef<'a, G>),
    /// A step resource.
    Step(StepRef<'a, G>),
    /// A step position resource.
    Position(StepPositionRef<'a, G>),
}

impl<'a, G: PathGraph> Term<'a, G> {
    /// Creates an IRI term, interning it against the vocabulary.
    pub fn iri(iri: &str) -> Self {
        Term::Iri(IriString::new(iri))
    }

    /// Creates a string literal term.
    pub fn string(value: &str) -> Self {
        Term::Literal(Literal::String(value.to_string()))
    }

    /// Creates an integer literal term.
    pub fn integer(value: i64) -> Self {
        Term::Literal(Literal::Integer(value))
    }

    /// Returns `true` if the term is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Returns the IRI of the term, unless it is a literal.
    pub fn uri(&self) -> Option<String> {
        match self {
            Term::Iri(iri) => Some(iri.as_str().to_string()),
            Term::Literal(_) => None,
            Term::Node(n) => Some(n.to_uri()),
            Term::Path(p) => Some(p.to_uri()),
            Term::Step(s) => Some(s.to_uri()),
            Term::Position(p) => Some(p.to_uri()),
        }
    }

    /// Returns an interned copy of a plain IRI term; other terms are
    /// returned unchanged.
    pub fn interned(self) -> Self {
        match self {
            Term::Iri(iri) => Term::Iri(iri.interned()),
            other => other,
        }
    }
}

impl<'a, G: PathGraph> PartialEq for Term<'a, G> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Literal(a), Term::Literal(b)) => a == b,
            (Term::Literal(_), _) | (_, Term::Literal(_)) => false,
            (Term::Node(a), Term::Node(b)) => a == b,
            (Term::Position(a), Term::Position(b)) => a == b,
            (a, b) => a.uri() == b.uri(),
        }
    }
}

impl<'a, G: PathGraph> Eq for Term<'a, G> {}

impl<'a, G: PathGraph> Clone for Term<'a, G> {
    fn clone(&self) -> Self {
        match self {
            Term::Iri(iri) => Term::Iri(iri.clone()),
            Term::Literal(l) => Term::Literal(l.clone()),
            Term::Node(n) => Term::Node(*n),
            Term::Path(p) => Term::Path(*p),
            Term::Step(s) => Term::Step(*s),
            Term::Position(p) => Term::Position(*p),
        }
    }
}

impl<'a, G: PathGraph> fmt::Display for Term<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => fmt::Display::fmt(iri, f),
            Term::Literal(l) => fmt::Display::fmt(l, f),
            Term::Node(n) => fmt::Display::fmt(n, f),
            Term::Path(p) => fmt::Display::fmt(p, f),
            Term::Step(s) => fmt::Display::fmt(s, f),
            Term::Position(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl<'a, G: PathGraph> fmt::Debug for Term<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

//-----------------------------------------------------------------------------

/// A virtual triple.
pub struct Statement<'a, G: PathGraph> {
    subject: Term<'a, G>,
    predicate: IriString,
    object: Term<'a, G>,
}

impl<'a, G: PathGraph> Statement<'a, G> {
    /// Creates a new statement.
    pub fn new(subject: Term<'a, G>, predicate: IriString, object: Term<'a, G>) -> Self {
        Statement { subject, predicate, object }
    }

    /// Returns the subject of the statement.
    pub fn subject(&self) -> &Term<'a, G> {
        &self.subject
    }

    /// Returns the predicate of the statement.
    pub fn predicate(&self) -> &IriString {
        &self.predicate
    }

    /// Returns the object of the statement.
    pub fn object(&self) -> &Term<'a, G> {
        &self.object
    }
}

impl<'a, G: PathGraph> PartialEq for Statement<'a, G> {
    fn eq(&self, other: &Self) -> bool {
        self.subject == other.subject
            && self.predicate == other.predicate
            && self.object == other.object
    }
}

impl<'a, G: PathGraph> Eq for Statement<'a, G> {}

impl<'a, G: PathGraph> Clone for Statement<'a, G> {
    fn clone(&self) -> Self {
        Statement {
            subject: self.subject.clone(),
            predicate: self.predicate.clone(),
            object: self.object.clone(),
        }
    }
}

impl<'a, G: PathGraph> fmt::Display for Statement<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

impl<'a, G: PathGraph> fmt::Debug for Statement<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

//-----------------------------------------------------------------------------
