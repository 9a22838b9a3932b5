//! Pattern-based statement lookup

use crate::model::{Node, Triple};

/// Errors raised by a graph store while answering a query or applying a change
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Invalid statement: {0}")]
    InvalidStatement(String),
}

/// Read access to a set of statements by (subject, predicate, object) pattern.
///
/// `None` in a pattern position is a wildcard. Implementations return
/// statements in a stable order so that traversals over them are repeatable.
pub trait TripleSource {
    /// All statements matching the pattern
    fn find(
        &self,
        subject: Option<&Node>,
        predicate: Option<&Node>,
        object: Option<&Node>,
    ) -> Result<Vec<Triple>, GraphError>;

    /// Objects of statements `subject predicate ?o`
    fn objects_of(&self, subject: &Node, predicate: &Node) -> Result<Vec<Node>, GraphError> {
        Ok(self
            .find(Some(subject), Some(predicate), None)?
            .into_iter()
            .map(|t| t.object)
            .collect())
    }

    /// Subjects of statements `?s predicate object`
    fn subjects_of(&self, object: &Node, predicate: &Node) -> Result<Vec<Node>, GraphError> {
        Ok(self
            .find(None, Some(predicate), Some(object))?
            .into_iter()
            .map(|t| t.subject)
            .collect())
    }

    fn contains_triple(&self, triple: &Triple) -> Result<bool, GraphError> {
        Ok(!self
            .find(Some(&triple.subject), Some(&triple.predicate), Some(&triple.object))?
            .is_empty())
    }
}

impl<T: TripleSource + ?Sized> TripleSource for &T {
    fn find(
        &self,
        subject: Option<&Node>,
        predicate: Option<&Node>,
        object: Option<&Node>,
    ) -> Result<Vec<Triple>, GraphError> {
        (**self).find(subject, predicate, object)
    }

    fn objects_of(&self, subject: &Node, predicate: &Node) -> Result<Vec<Node>, GraphError> {
        (**self).objects_of(subject, predicate)
    }

    fn subjects_of(&self, object: &Node, predicate: &Node) -> Result<Vec<Node>, GraphError> {
        (**self).subjects_of(object, predicate)
    }

    fn contains_triple(&self, triple: &Triple) -> Result<bool, GraphError> {
        (**self).contains_triple(triple)
    }
}

/// Statements held in a plain vector, scanned linearly.
///
/// Handy for fixtures and for wrapping the output of another query.
impl TripleSource for [Triple] {
    fn find(
        &self,
        subject: Option<&Node>,
        predicate: Option<&Node>,
        object: Option<&Node>,
    ) -> Result<Vec<Triple>, GraphError> {
        Ok(self
            .iter()
            .filter(|t| subject.map_or(true, |s| &t.subject == s))
            .filter(|t| predicate.map_or(true, |p| &t.predicate == p))
            .filter(|t| object.map_or(true, |o| &t.object == o))
            .cloned()
            .collect())
    }
}

impl TripleSource for Vec<Triple> {
    fn find(
        &self,
        subject: Option<&Node>,
        predicate: Option<&Node>,
        object: Option<&Node>,
    ) -> Result<Vec<Triple>, GraphError> {
        self.as_slice().find(subject, predicate, object)
    }
}
