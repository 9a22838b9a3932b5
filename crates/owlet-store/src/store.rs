//! In-memory triple store with per-position indexing

use owlet_core::{GraphError, Node, Triple, TripleSource};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use tracing::debug;

type Postings = SmallVec<[usize; 8]>;

/// Below this many slots tombstones are left in place
const COMPACT_MIN_SLOTS: usize = 1024;

/// In-memory graph store with indexing for fast pattern queries.
///
/// Statements keep their insertion order; every query returns matches in that
/// order. Removal leaves a tombstone slot which is reclaimed once tombstones
/// outnumber live statements.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Statement slots, `None` once removed
    slots: Vec<Option<Triple>>,
    /// Subject index: subject -> ascending slot indices
    subject_index: HashMap<Node, Postings>,
    /// Predicate index: predicate -> ascending slot indices
    predicate_index: HashMap<Node, Postings>,
    /// Object index: object -> ascending slot indices
    object_index: HashMap<Node, Postings>,
    /// Number of live statements
    live: usize,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from statements, skipping duplicates
    pub fn from_triples<I: IntoIterator<Item = Triple>>(triples: I) -> Result<Self, GraphError> {
        let mut store = Self::new();
        store.add_all(triples)?;
        Ok(store)
    }

    /// Add a statement. Returns `false` if it was already present.
    ///
    /// Literal subjects and non-IRI predicates are rejected.
    pub fn add(&mut self, triple: Triple) -> Result<bool, GraphError> {
        if triple.subject.is_literal() {
            return Err(GraphError::InvalidStatement(format!(
                "literal in subject position: {}",
                triple
            )));
        }
        if triple.predicate.as_iri().is_none() {
            return Err(GraphError::InvalidStatement(format!(
                "predicate must be an IRI: {}",
                triple
            )));
        }
        if self.find_exact_index(&triple).is_some() {
            return Ok(false);
        }

        let index = self.slots.len();
        self.subject_index.entry(triple.subject.clone()).or_default().push(index);
        self.predicate_index.entry(triple.predicate.clone()).or_default().push(index);
        self.object_index.entry(triple.object.clone()).or_default().push(index);
        self.slots.push(Some(triple));
        self.live += 1;

        Ok(true)
    }

    /// Add several statements, returning how many were new
    pub fn add_all<I: IntoIterator<Item = Triple>>(&mut self, triples: I) -> Result<usize, GraphError> {
        let mut added = 0;
        for triple in triples {
            if self.add(triple)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Remove a statement. Returns `false` if it was not present.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        let Some(index) = self.find_exact_index(triple) else {
            return false;
        };

        self.slots[index] = None;
        Self::unindex(&mut self.subject_index, &triple.subject, index);
        Self::unindex(&mut self.predicate_index, &triple.predicate, index);
        Self::unindex(&mut self.object_index, &triple.object, index);
        self.live -= 1;

        let tombstones = self.slots.len() - self.live;
        if self.slots.len() >= COMPACT_MIN_SLOTS && tombstones > self.live {
            self.compact();
        }

        true
    }

    /// Remove every statement matching the pattern, returning how many went
    pub fn remove_matching(
        &mut self,
        subject: Option<&Node>,
        predicate: Option<&Node>,
        object: Option<&Node>,
    ) -> usize {
        let doomed = self.find_triples(subject, predicate, object);
        doomed.iter().filter(|t| self.remove(t)).count()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live statements in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> + '_ {
        self.slots.iter().flatten()
    }

    /// Find triples matching a pattern, in insertion order
    pub fn find_triples(
        &self,
        subject: Option<&Node>,
        predicate: Option<&Node>,
        object: Option<&Node>,
    ) -> Vec<Triple> {
        self.candidate_indices(subject, predicate, object)
            .into_iter()
            .filter_map(|index| self.slots.get(index).and_then(Option::as_ref))
            .cloned()
            .collect()
    }

    /// Clear all statements
    pub fn clear(&mut self) {
        self.slots.clear();
        self.subject_index.clear();
        self.predicate_index.clear();
        self.object_index.clear();
        self.live = 0;
    }

    pub fn statistics(&self) -> StoreStatistics {
        StoreStatistics {
            total_triples: self.live,
            distinct_subjects: self.subject_index.len(),
            distinct_predicates: self.predicate_index.len(),
            distinct_objects: self.object_index.len(),
            tombstones: self.slots.len() - self.live,
        }
    }

    /// Drop tombstones and rebuild all indices (expensive operation)
    pub fn compact(&mut self) {
        let before = self.slots.len();
        let triples: Vec<Triple> = std::mem::take(&mut self.slots).into_iter().flatten().collect();

        self.subject_index.clear();
        self.predicate_index.clear();
        self.object_index.clear();

        for (index, triple) in triples.iter().enumerate() {
            self.subject_index.entry(triple.subject.clone()).or_default().push(index);
            self.predicate_index.entry(triple.predicate.clone()).or_default().push(index);
            self.object_index.entry(triple.object.clone()).or_default().push(index);
        }
        self.slots = triples.into_iter().map(Some).collect();

        debug!(before, after = self.slots.len(), "compacted graph store");
    }

    fn unindex(index: &mut HashMap<Node, Postings>, key: &Node, slot: usize) {
        if let Some(postings) = index.get_mut(key) {
            postings.retain(|i| *i != slot);
            if postings.is_empty() {
                index.remove(key);
            }
        }
    }

    fn postings<'a>(index: &'a HashMap<Node, Postings>, key: &Node) -> &'a [usize] {
        index.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Pick the narrowest indices for the bound positions and intersect them
    fn candidate_indices(
        &self,
        subject: Option<&Node>,
        predicate: Option<&Node>,
        object: Option<&Node>,
    ) -> Postings {
        let s = subject.map(|s| Self::postings(&self.subject_index, s));
        let p = predicate.map(|p| Self::postings(&self.predicate_index, p));
        let o = object.map(|o| Self::postings(&self.object_index, o));

        match (s, p, o) {
            (Some(s), Some(p), Some(o)) => {
                let sp = Self::intersect_indices(s, p);
                Self::intersect_indices(&sp, o)
            }
            (Some(a), Some(b), None) | (Some(a), None, Some(b)) | (None, Some(a), Some(b)) => {
                Self::intersect_indices(a, b)
            }
            (Some(a), None, None) | (None, Some(a), None) | (None, None, Some(a)) => {
                SmallVec::from_slice(a)
            }
            (None, None, None) => self
                .slots
                .iter()
                .enumerate()
                .filter(|(_, slot)| slot.is_some())
                .map(|(i, _)| i)
                .collect(),
        }
    }

    fn find_exact_index(&self, triple: &Triple) -> Option<usize> {
        self.candidate_indices(Some(&triple.subject), Some(&triple.predicate), Some(&triple.object))
            .first()
            .copied()
    }

    /// Intersect two sorted index vectors
    fn intersect_indices(a: &[usize], b: &[usize]) -> Postings {
        let mut result = SmallVec::new();
        let mut i = 0;
        let mut j = 0;

        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    result.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }

        result
    }
}

impl TripleSource for GraphStore {
    fn find(
        &self,
        subject: Option<&Node>,
        predicate: Option<&Node>,
        object: Option<&Node>,
    ) -> Result<Vec<Triple>, GraphError> {
        Ok(self.find_triples(subject, predicate, object))
    }

    fn objects_of(&self, subject: &Node, predicate: &Node) -> Result<Vec<Node>, GraphError> {
        Ok(self
            .candidate_indices(Some(subject), Some(predicate), None)
            .into_iter()
            .filter_map(|index| self.slots.get(index).and_then(Option::as_ref))
            .map(|t| t.object.clone())
            .collect())
    }

    fn subjects_of(&self, object: &Node, predicate: &Node) -> Result<Vec<Node>, GraphError> {
        Ok(self
            .candidate_indices(None, Some(predicate), Some(object))
            .into_iter()
            .filter_map(|index| self.slots.get(index).and_then(Option::as_ref))
            .map(|t| t.subject.clone())
            .collect())
    }

    fn contains_triple(&self, triple: &Triple) -> Result<bool, GraphError> {
        Ok(self.find_exact_index(triple).is_some())
    }
}

impl Extend<Triple> for GraphStore {
    /// Invalid statements are skipped with a debug event
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            if let Err(e) = self.add(triple) {
                debug!(error = %e, "skipping statement");
            }
        }
    }
}

/// Store statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStatistics {
    pub total_triples: usize,
    pub distinct_subjects: usize,
    pub distinct_predicates: usize,
    pub distinct_objects: usize,
    pub tombstones: usize,
}
