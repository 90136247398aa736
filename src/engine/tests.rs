use super::*;

use crate::gfa;
use crate::utils;
use crate::vocab::rdf;
use crate::SimplePathGraph;

//-----------------------------------------------------------------------------

const BASE: &str = "http://example.org/vg/";

// 15 nodes, 21 edges, and path x visiting 1, 3, 5, 6, 8, 9, 11, 12, 14, 15, 3.
fn example_store() -> GraphStore<SimplePathGraph> {
    let graph = gfa::load_gfa(utils::get_test_data("example.gfa")).unwrap();
    GraphStore::new(graph, BASE).unwrap()
}

fn count<'a>(
    engine: &TripleEngine<'a, SimplePathGraph>,
    subject: Option<Term<'a, SimplePathGraph>>,
    predicate: Option<IriString>,
    object: Option<Term<'a, SimplePathGraph>>,
) -> usize {
    engine.query(subject, predicate, object).count()
}

//-----------------------------------------------------------------------------

#[test]
fn full_dump() {
    let store = example_store();
    let engine = TripleEngine::new(&store);

    // Nodes: 2 * (15 + 21); steps: 7 * 11; positions: 8 * 11; paths: 2.
    let statements = engine.query(None, None, None).collect_vec();
    assert_eq!(statements.len(), 239, "Wrong statement count for the full dump");

    // The dump is deterministic.
    let again = engine.query(None, None, None).collect_vec();
    assert_eq!(statements, again, "The full dump is not reproducible");
}

#[test]
fn node_types() {
    let store = example_store();
    let engine = TripleEngine::new(&store);
    let statements = engine.query(
        None, Some(IriString::known(rdf::TYPE)), Some(Term::iri(vg::NODE))
    ).collect_vec();
    assert_eq!(statements.len(), 15, "Wrong node class statement count");
    for (offset, statement) in statements.iter().enumerate() {
        let expected = format!("{}node/{}", BASE, offset + 1);
        assert_eq!(statement.subject().uri(), Some(expected), "Wrong node at offset {}", offset);
    }
}

#[test]
fn step_types_and_ranks() {
    let store = example_store();
    let engine = TripleEngine::new(&store);

    let statements = engine.query(
        None, Some(IriString::known(rdf::TYPE)), Some(Term::iri(vg::STEP))
    ).collect_vec();
    assert_eq!(statements.len(), 11, "Wrong step class statement count");
    for (rank, statement) in statements.iter().enumerate() {
        let expected = format!("{}path/x/step/{}", BASE, rank);
        assert_eq!(statement.subject().uri(), Some(expected), "Wrong step at rank {}", rank);
    }
}

#[test]
fn first_step_begins_at_zero() {
    let store = example_store();
    let engine = TripleEngine::new(&store);
    let statements = engine.query(
        Some(Term::iri(&format!("{}path/x/step/0", BASE))),
        Some(IriString::known(faldo::BEGIN)),
        None,
    ).collect_vec();
    assert_eq!(statements.len(), 1);
    assert_eq!(
        statements[0].object().uri(),
        Some(format!("{}path/x/position/0", BASE))
    );
}

#[test]
fn path_label() {
    let store = example_store();
    let engine = TripleEngine::new(&store);
    let statements = engine.query(
        Some(Term::iri(&format!("{}path/x", BASE))),
        Some(IriString::known(crate::vocab::rdfs::LABEL)),
        None,
    ).collect_vec();
    assert_eq!(statements.len(), 1);
    assert_eq!(*statements[0].object(), Term::string("x"));
}

//-----------------------------------------------------------------------------

#[test]
fn interning_does_not_change_results() {
    let store = example_store();
    let engine = TripleEngine::new(&store);

    // The same pattern with shared constants and with freshly built strings.
    let with_constants = engine.query(
        None, Some(IriString::known(rdf::TYPE)), Some(Term::iri(vg::STEP))
    ).collect_vec();
    let type_copy = String::from(rdf::TYPE);
    let step_copy = String::from(vg::STEP);
    let with_strings = engine.query(
        None,
        Some(IriString::Owned(type_copy)),
        Some(Term::Iri(IriString::Owned(step_copy))),
    ).collect_vec();
    assert_eq!(with_constants, with_strings, "Interned and plain patterns differ");
}

#[test]
fn unknown_pattern_components() {
    let store = example_store();
    let engine = TripleEngine::new(&store);
    assert_eq!(count(&engine, None, Some(IriString::new("http://example.org/unknown")), None), 0);
    assert_eq!(count(&engine, Some(Term::iri("http://example.org/unknown")), None, None), 0);
    assert_eq!(count(&engine, Some(Term::string("GATT")), None, None), 0,
        "A literal subject matched");
    assert_eq!(count(&engine, None, None, Some(Term::iri(&format!("{}node/99", BASE)))), 0);
}

#[test]
fn early_close() {
    let store = example_store();
    let engine = TripleEngine::new(&store);
    let mut statements = engine.query(None, None, None);
    assert!(statements.next().is_some());
    statements.close();
    assert!(statements.next().is_none(), "A closed query returned a statement");
    statements.close();
}

//-----------------------------------------------------------------------------

#[test]
fn cardinality_ranking() {
    let store = example_store();
    let engine = TripleEngine::new(&store);

    // The unrestricted estimate comes from the largest family.
    let unrestricted = engine.estimate_cardinality(None, None, None);
    assert_eq!(unrestricted, 88.0, "Wrong unrestricted estimate");

    // A rarer pattern gets a smaller estimate.
    let labels = engine.estimate_cardinality(
        None, Some(&IriString::known(crate::vocab::rdfs::LABEL)), None
    );
    assert!(labels < unrestricted);
    assert!(labels >= 1.0, "The label estimate is below the actual count");

    let nothing = engine.estimate_cardinality(
        None, Some(&IriString::new("http://example.org/unknown")), None
    );
    assert_eq!(nothing, 0.0);

    let one_family = engine.estimate_family_cardinality(
        Generator::Path, None, None, None
    );
    assert_eq!(one_family, 2.0);
}

//-----------------------------------------------------------------------------

#[test]
fn read_only() {
    let store = example_store();
    let engine = TripleEngine::new(&store);
    let subject = Term::iri(&format!("{}node/1", BASE));
    let object = Term::iri(vg::NODE);
    assert!(engine.add_statement(&subject, &IriString::known(rdf::TYPE), &object).is_err());
    assert!(engine.remove_statement(Some(&subject), None, None).is_err());
    assert!(engine.clear().is_err());
    assert!(engine.set_namespace("ex", "http://example.org/").is_err());
    assert!(engine.remove_namespace("vg").is_err());
}

#[test]
fn namespaces() {
    let store = example_store();
    let engine = TripleEngine::new(&store);
    let namespaces = engine.namespaces();
    assert_eq!(namespaces.len(), 3);
    assert_eq!(engine.namespace("vg"), Some(vg::NAMESPACE));
    assert_eq!(engine.namespace("faldo"), Some(faldo::NAMESPACE));
    assert_eq!(engine.namespace("ex"), None);
}

//-----------------------------------------------------------------------------
