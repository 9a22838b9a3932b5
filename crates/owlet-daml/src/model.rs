//! A statement store viewed as a DAML ontology

use crate::config::DamlConfig;
use crate::kind::NodeKind;
use crate::property_iter::PropertyIterator;
use crate::resolver::EquivalenceResolver;
use crate::DamlError;
use owlet_core::vocabulary::{self, DAML_TYPE, RDF_TYPE};
use owlet_core::{GraphError, Node, Triple, TripleSource};
use owlet_store::GraphStore;
use tracing::warn;

/// Wraps a [`TripleSource`] with DAML semantics: node kinds, equivalence
/// classes and the closure accessors built on them.
///
/// The wrapped source is the only state besides [`DamlConfig`]; nothing
/// derived is cached, so every answer reflects the statements present at the
/// time it is asked.
#[derive(Debug, Clone)]
pub struct DamlModel<S = GraphStore> {
    store: S,
    config: DamlConfig,
}

impl<S: TripleSource> DamlModel<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, DamlConfig::default())
    }

    pub fn with_config(store: S, config: DamlConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn config(&self) -> &DamlConfig {
        &self.config
    }

    /// Flip the global equivalence switch. Iterators already built keep the
    /// setting they were built with.
    pub fn set_use_equivalence(&mut self, enabled: bool) {
        self.config.use_equivalence = enabled;
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Direct `rdf:type` (or `daml:type`) values of a node
    pub(crate) fn declared_types(&self, node: &Node) -> Vec<Node> {
        if !node.is_resource() {
            return Vec::new();
        }

        let mut types: Vec<Node> = Vec::new();
        for predicate in [RDF_TYPE, DAML_TYPE] {
            match self.store.objects_of(node, &Node::iri(predicate)) {
                Ok(found) => {
                    for ty in found {
                        if !types.contains(&ty) {
                            types.push(ty);
                        }
                    }
                }
                Err(e) => warn!(node = %node, error = %e, "type lookup failed"),
            }
        }
        types
    }
}

impl DamlModel<GraphStore> {
    /// Model over an empty in-memory store
    pub fn empty() -> Self {
        Self::new(GraphStore::new())
    }

    pub fn add(&mut self, triple: Triple) -> Result<bool, DamlError> {
        Ok(self.store.add(triple)?)
    }

    pub fn add_all<I: IntoIterator<Item = Triple>>(&mut self, triples: I) -> Result<usize, DamlError> {
        Ok(self.store.add_all(triples)?)
    }

    pub fn remove(&mut self, triple: &Triple) -> bool {
        self.store.remove(triple)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Default for DamlModel<GraphStore> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: TripleSource> TripleSource for DamlModel<S> {
    fn find(
        &self,
        subject: Option<&Node>,
        predicate: Option<&Node>,
        object: Option<&Node>,
    ) -> Result<Vec<Triple>, GraphError> {
        self.store.find(subject, predicate, object)
    }

    fn objects_of(&self, subject: &Node, predicate: &Node) -> Result<Vec<Node>, GraphError> {
        self.store.objects_of(subject, predicate)
    }

    fn subjects_of(&self, object: &Node, predicate: &Node) -> Result<Vec<Node>, GraphError> {
        self.store.subjects_of(object, predicate)
    }

    fn contains_triple(&self, triple: &Triple) -> Result<bool, GraphError> {
        self.store.contains_triple(triple)
    }
}

impl<S: TripleSource> EquivalenceResolver for DamlModel<S> {
    fn equivalence_enabled(&self) -> bool {
        self.config.use_equivalence
    }

    fn node_kind(&self, node: &Node) -> NodeKind {
        if node.is_literal() {
            return NodeKind::Literal;
        }
        NodeKind::classify(&self.declared_types(node))
    }

    /// Symmetric, transitive closure of the kind's same-as relations. A
    /// built-in property that DAML restates (`daml:subClassOf` for
    /// `rdfs:subClassOf`, ...) also counts its counterpart.
    fn equivalents_as(&self, node: &Node, kind: NodeKind) -> Vec<Node> {
        if !self.config.use_equivalence || node.is_literal() || kind == NodeKind::Literal {
            return vec![node.clone()];
        }

        let relations = kind.equivalence_predicates(self.config.include_owl_equivalence);
        let mut roots = vec![node.clone()];
        if let Some(alias) = node.as_iri().and_then(vocabulary::builtin_alias) {
            roots.push(Node::iri(alias));
        }

        PropertyIterator::over_predicates(self, roots, relations.clone(), relations, true, true)
            .collect()
    }

    fn sub_properties_of(&self, property: &Node) -> Vec<Node> {
        PropertyIterator::with_roots(
            self,
            [property.clone()],
            None,
            Some(vocabulary::rdfs_subproperty_of()),
            true,
            false,
            true,
        )
        .collect()
    }
}
