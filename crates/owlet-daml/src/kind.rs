//! Node categories and the equivalence relations each one honours

use owlet_core::vocabulary::*;
use owlet_core::Node;
use serde::{Deserialize, Serialize};

const CLASS_RELATIONS: &[&str] = &[DAML_EQUIVALENT_TO, DAML_SAME_CLASS_AS];
const PROPERTY_RELATIONS: &[&str] = &[DAML_EQUIVALENT_TO, DAML_SAME_PROPERTY_AS];
const INSTANCE_RELATIONS: &[&str] = &[DAML_EQUIVALENT_TO, DAML_SAME_INDIVIDUAL_AS];
const COMMON_RELATIONS: &[&str] = &[DAML_EQUIVALENT_TO];
const OWL_CLASS_RELATIONS: &[&str] = &[OWL_EQUIVALENT_CLASS];
const OWL_PROPERTY_RELATIONS: &[&str] = &[OWL_EQUIVALENT_PROPERTY];
const OWL_INSTANCE_RELATIONS: &[&str] = &[OWL_SAME_AS];
const NO_RELATIONS: &[&str] = &[];

/// The role a node plays in a DAML ontology, decided from its `rdf:type`
/// values. The kind picks which "same-as" relations define its equivalence
/// class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Class,
    Property,
    /// An individual: typed, but neither a class nor a property
    Instance,
    /// A resource with no type information
    Common,
    Literal,
}

impl NodeKind {
    /// Kind implied by a single `rdf:type` IRI, if it is a DAML, RDFS or OWL
    /// meta-type.
    pub fn from_type_tag(type_iri: &str) -> Option<NodeKind> {
        match type_iri {
            DAML_CLASS | RDFS_CLASS | OWL_CLASS | DAML_RESTRICTION => Some(NodeKind::Class),
            RDF_PROPERTY
            | DAML_PROPERTY
            | DAML_OBJECT_PROPERTY
            | DAML_DATATYPE_PROPERTY
            | DAML_TRANSITIVE_PROPERTY
            | DAML_UNIQUE_PROPERTY
            | DAML_UNAMBIGUOUS_PROPERTY
            | OWL_OBJECT_PROPERTY
            | OWL_DATATYPE_PROPERTY
            | OWL_TRANSITIVE_PROPERTY => Some(NodeKind::Property),
            DAML_THING | OWL_THING | OWL_NAMED_INDIVIDUAL => Some(NodeKind::Instance),
            _ => None,
        }
    }

    /// Classify a resource from all of its types.
    ///
    /// Property beats class beats instance. A type that is not a meta-type
    /// marks the node as an instance of that (user) class.
    pub fn classify<'a, I>(types: I) -> NodeKind
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let mut kind = NodeKind::Common;
        for ty in types {
            let candidate = ty
                .as_iri()
                .and_then(NodeKind::from_type_tag)
                .unwrap_or(NodeKind::Instance);
            if candidate.rank() > kind.rank() {
                kind = candidate;
            }
        }
        kind
    }

    fn rank(self) -> u8 {
        match self {
            NodeKind::Literal | NodeKind::Common => 0,
            NodeKind::Instance => 1,
            NodeKind::Class => 2,
            NodeKind::Property => 3,
        }
    }

    /// Predicates whose (symmetric, transitive) closure forms the equivalence
    /// class of a node of this kind
    pub fn equivalence_predicates(self, include_owl: bool) -> Vec<Node> {
        let (daml, owl) = match self {
            NodeKind::Class => (CLASS_RELATIONS, OWL_CLASS_RELATIONS),
            NodeKind::Property => (PROPERTY_RELATIONS, OWL_PROPERTY_RELATIONS),
            NodeKind::Instance => (INSTANCE_RELATIONS, OWL_INSTANCE_RELATIONS),
            NodeKind::Common => (COMMON_RELATIONS, OWL_INSTANCE_RELATIONS),
            NodeKind::Literal => (NO_RELATIONS, NO_RELATIONS),
        };

        let mut predicates: Vec<Node> = daml.iter().map(Node::iri).collect();
        if include_owl {
            predicates.extend(owl.iter().map(Node::iri));
        }
        predicates
    }
}
