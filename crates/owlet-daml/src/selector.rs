//! Statement patterns that match up to declared equivalence

use crate::kind::NodeKind;
use crate::resolver::{EquivalenceResolver, OntologyGraph};
use crate::DamlError;
use itertools::{iproduct, Itertools};
use owlet_core::{Node, Triple};
use serde::{Deserialize, Serialize};

/// A (subject, predicate, object) pattern where `None` is a wildcard and a
/// bound component also matches anything declared equivalent to it.
///
/// Only the pattern side is expanded. A pattern naming `x` matches a statement
/// about `y` when `x` and `y` are declared equivalent, but the statement's own
/// components are never expanded, so the relation is not symmetric if a
/// node's class depends on its kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EquivalentSelector {
    pub subject: Option<Node>,
    pub predicate: Option<Node>,
    pub object: Option<Node>,
}

impl EquivalentSelector {
    pub fn new(subject: Option<Node>, predicate: Option<Node>, object: Option<Node>) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Pattern with every position a wildcard
    pub fn any() -> Self {
        Self::default()
    }

    pub fn is_wildcard(&self) -> bool {
        self.subject.is_none() && self.predicate.is_none() && self.object.is_none()
    }

    /// Whether `triple` matches this pattern
    pub fn test<R>(&self, triple: &Triple, resolver: &R) -> bool
    where
        R: EquivalenceResolver + ?Sized,
    {
        Self::component_matches(self.subject.as_ref(), &triple.subject, None, resolver)
            && Self::component_matches(
                self.predicate.as_ref(),
                &triple.predicate,
                Some(NodeKind::Property),
                resolver,
            )
            && Self::component_matches(self.object.as_ref(), &triple.object, None, resolver)
    }

    /// All statements of `graph` matching this pattern, without duplicates,
    /// grouped by the pattern alternative that found them
    pub fn select<G>(&self, graph: &G) -> Result<Vec<Triple>, DamlError>
    where
        G: OntologyGraph + ?Sized,
    {
        let subjects = Self::alternatives(self.subject.as_ref(), None, graph);
        let predicates = Self::alternatives(self.predicate.as_ref(), Some(NodeKind::Property), graph);
        let objects = Self::alternatives(self.object.as_ref(), None, graph);

        let mut matched = Vec::new();
        for (s, p, o) in iproduct!(&subjects, &predicates, &objects) {
            matched.extend(graph.find(s.as_ref(), p.as_ref(), o.as_ref())?);
        }
        Ok(matched.into_iter().unique().collect())
    }

    fn component_matches<R>(
        pattern: Option<&Node>,
        candidate: &Node,
        kind: Option<NodeKind>,
        resolver: &R,
    ) -> bool
    where
        R: EquivalenceResolver + ?Sized,
    {
        let Some(pattern) = pattern else {
            return true;
        };
        if pattern == candidate {
            return true;
        }
        if !pattern.is_resource() || !resolver.equivalence_enabled() {
            return false;
        }
        Self::expand(pattern, kind, resolver).contains(candidate)
    }

    fn expand<R>(node: &Node, kind: Option<NodeKind>, resolver: &R) -> Vec<Node>
    where
        R: EquivalenceResolver + ?Sized,
    {
        match kind {
            Some(kind) => resolver.equivalents_as(node, kind),
            None => resolver.equivalents_of(node),
        }
    }

    fn alternatives<R>(pattern: Option<&Node>, kind: Option<NodeKind>, resolver: &R) -> Vec<Option<Node>>
    where
        R: EquivalenceResolver + ?Sized,
    {
        match pattern {
            None => vec![None],
            Some(node) => Self::expand(node, kind, resolver)
                .into_iter()
                .map(Some)
                .collect(),
        }
    }
}
