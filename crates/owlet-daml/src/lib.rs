//! # owlet-daml
//!
//! Equivalence-aware traversal of DAML+OIL ontologies.
//!
//! DAML lets an ontology declare that two classes, properties or individuals
//! are the same thing (`daml:sameClassAs`, `daml:samePropertyAs`,
//! `daml:sameIndividualAs`, `daml:equivalentTo`). Queries over such a graph
//! should treat every member of an equivalence class as interchangeable. This
//! crate provides:
//!
//! - [`PropertyIterator`]: the closure of a property from a set of roots,
//!   optionally transitive and reflexive, widened by equivalence
//! - [`EquivalenceResolver`]: the capability that computes equivalence
//!   classes, implemented by [`DamlModel`]
//! - [`EquivalentSelector`]: statement patterns that match up to equivalence
//!
//! ```
//! use owlet_core::{Node, Triple};
//! use owlet_daml::{DamlModel, PropertyIterator};
//!
//! let knows = "http://example.org/knows";
//! let mut model = DamlModel::empty();
//! model.add(Triple::iris("http://example.org/a", knows, "http://example.org/b")).unwrap();
//! model.add(Triple::iris("http://example.org/b", knows, "http://example.org/c")).unwrap();
//!
//! let reached: Vec<Node> = PropertyIterator::new(
//!     &model,
//!     Node::iri("http://example.org/a"),
//!     Some(Node::iri(knows)),
//!     None,
//!     true,
//!     false,
//! )
//! .collect();
//!
//! assert_eq!(reached, vec![Node::iri("http://example.org/b"), Node::iri("http://example.org/c")]);
//! ```

mod accessors;
pub mod config;
pub mod kind;
pub mod model;
pub mod property_iter;
pub mod resolver;
pub mod selector;

pub use config::DamlConfig;
pub use kind::NodeKind;
pub use model::DamlModel;
pub use property_iter::PropertyIterator;
pub use resolver::{EquivalenceResolver, OntologyGraph};
pub use selector::EquivalentSelector;

use owlet_core::GraphError;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DamlError {
    #[error("Iterator exhausted")]
    Exhausted,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(String),
}
