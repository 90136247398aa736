//! RDF vocabulary constants used by the virtual triples.
//!
//! Every predicate and class IRI the store can emit lives here as a shared
//! `&'static str`. [`intern`] maps an equal string onto the shared constant,
//! which lets later comparisons use pointer identity before falling back to
//! string equality.

//-----------------------------------------------------------------------------

/// RDF core vocabulary.
pub mod rdf {
    /// The class membership predicate.
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// The structured value predicate; used for node sequences.
    pub const VALUE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#value";
}

/// RDF Schema vocabulary.
pub mod rdfs {
    /// Namespace prefix IRI.
    pub const NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// Human-readable name; used for path names.
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
}

/// XML Schema datatypes.
pub mod xsd {
    /// Plain string datatype.
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// Integer datatype.
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
}

/// The variation graph vocabulary.
pub mod vg {
    /// Namespace prefix IRI.
    pub const NAMESPACE: &str = "http://biohackathon.org/resource/vg#";

    /// Class of graph nodes.
    pub const NODE: &str = "http://biohackathon.org/resource/vg#Node";
    /// Class of paths.
    pub const PATH: &str = "http://biohackathon.org/resource/vg#Path";
    /// Class of path steps.
    pub const STEP: &str = "http://biohackathon.org/resource/vg#Step";

    /// Rank of a step on its path.
    pub const RANK: &str = "http://biohackathon.org/resource/vg#rank";
    /// Path of a step.
    pub const PATH_PRED: &str = "http://biohackathon.org/resource/vg#path";
    /// Node visited by a step in forward orientation.
    pub const NODE_PRED: &str = "http://biohackathon.org/resource/vg#node";
    /// Node visited by a step in reverse orientation.
    pub const REVERSE_OF_NODE: &str = "http://biohackathon.org/resource/vg#reverseOfNode";

    /// An edge between two nodes, regardless of orientations.
    pub const LINKS: &str = "http://biohackathon.org/resource/vg#links";
    /// Edge from a forward node to a forward node.
    pub const LINKS_FORWARD_TO_FORWARD: &str = "http://biohackathon.org/resource/vg#linksForwardToForward";
    /// Edge from a forward node to a reverse node.
    pub const LINKS_FORWARD_TO_REVERSE: &str = "http://biohackathon.org/resource/vg#linksForwardToReverse";
    /// Edge from a reverse node to a forward node.
    pub const LINKS_REVERSE_TO_FORWARD: &str = "http://biohackathon.org/resource/vg#linksReverseToForward";
    /// Edge from a reverse node to a reverse node.
    pub const LINKS_REVERSE_TO_REVERSE: &str = "http://biohackathon.org/resource/vg#linksReverseToReverse";
}

/// The FALDO positioning vocabulary.
pub mod faldo {
    /// Namespace prefix IRI.
    pub const NAMESPACE: &str = "http://biohackathon.org/resource/faldo#";

    /// Class of regions with a begin and an end.
    pub const REGION: &str = "http://biohackathon.org/resource/faldo#Region";
    /// Class of positions.
    pub const POSITION_CLASS: &str = "http://biohackathon.org/resource/faldo#Position";
    /// Class of exactly known positions.
    pub const EXACT_POSITION: &str = "http://biohackathon.org/resource/faldo#ExactPosition";

    /// Begin position of a region.
    pub const BEGIN: &str = "http://biohackathon.org/resource/faldo#begin";
    /// End position of a region.
    pub const END: &str = "http://biohackathon.org/resource/faldo#end";
    /// Coordinate of a position.
    pub const POSITION: &str = "http://biohackathon.org/resource/faldo#position";
    /// Sequence the position is on.
    pub const REFERENCE: &str = "http://biohackathon.org/resource/faldo#reference";
}

//-----------------------------------------------------------------------------

// All constants that interning recognizes.
static ALL: [&str; 24] = [
    rdf::TYPE, rdf::VALUE,
    rdfs::LABEL,
    xsd::STRING, xsd::INTEGER,
    vg::NODE, vg::PATH, vg::STEP,
    vg::RANK, vg::PATH_PRED, vg::NODE_PRED, vg::REVERSE_OF_NODE,
    vg::LINKS,
    vg::LINKS_FORWARD_TO_FORWARD, vg::LINKS_FORWARD_TO_REVERSE,
    vg::LINKS_REVERSE_TO_FORWARD, vg::LINKS_REVERSE_TO_REVERSE,
    faldo::REGION, faldo::POSITION_CLASS, faldo::EXACT_POSITION,
    faldo::BEGIN, faldo::END, faldo::POSITION, faldo::REFERENCE,
];

/// Returns the shared constant equal to the given IRI, if there is one.
///
/// # Examples
///
/// ```
/// use vg_rdf::vocab;
///
/// let iri = String::from("http://biohackathon.org/resource/vg#Node");
/// assert_eq!(vocab::intern(&iri), Some(vocab::vg::NODE));
/// assert_eq!(vocab::intern("http://example.org/unknown"), None);
/// ```
pub fn intern(iri: &str) -> Option<&'static str> {
    ALL.iter().find(|c| **c == iri).copied()
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_finds_constants() {
        for constant in ALL {
            let copy = String::from(constant);
            let interned = intern(&copy);
            assert_eq!(interned, Some(constant), "No constant for {}", constant);
            assert!(
                std::ptr::eq(interned.unwrap().as_ptr(), constant.as_ptr()),
                "Interning {} did not return the shared constant", constant
            );
        }
    }

    #[test]
    fn intern_rejects_unknown() {
        assert_eq!(intern("http://example.org/vg/node/1"), None);
        assert_eq!(intern(""), None);
        assert_eq!(intern("http://biohackathon.org/resource/vg#node "), None);
    }
}

//-----------------------------------------------------------------------------
