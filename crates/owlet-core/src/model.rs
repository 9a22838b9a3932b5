//! Node and statement models for DAML/RDF graphs

use lazy_static::lazy_static;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, RwLock};

lazy_static! {
    static ref STRING_POOL: RwLock<HashSet<Arc<str>>> = RwLock::new(HashSet::new());
}

/// Interned string that reuses memory for identical strings.
///
/// Equality and hashing are by value, so two interned strings created from
/// the same text are interchangeable as map keys.
///
/// The pool is process-wide and only grows: strings are never evicted, even
/// after every `InternedString` holding them has been dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InternedString(Arc<str>);

impl InternedString {
    /// Create a new interned string, reusing existing instances when possible
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let text = s.as_ref();

        {
            let pool = STRING_POOL.read().unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(interned) = pool.get(text) {
                return InternedString(Arc::clone(interned));
            }
        }

        let mut pool = STRING_POOL.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(interned) = pool.get(text) {
            return InternedString(Arc::clone(interned));
        }
        let interned: Arc<str> = Arc::from(text);
        pool.insert(Arc::clone(&interned));
        InternedString(interned)
    }

    /// Get the string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for InternedString {
    fn from(s: String) -> Self {
        InternedString::new(s)
    }
}

impl From<&str> for InternedString {
    fn from(s: &str) -> Self {
        InternedString::new(s)
    }
}

impl fmt::Display for InternedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for InternedString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for InternedString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InternedString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(InternedString::new(s))
    }
}

/// RDF literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub lexical: InternedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<InternedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<InternedString>,
}

/// A graph vertex: IRI, blank node or literal.
///
/// Nodes carry no behaviour beyond identity; two nodes are the same vertex
/// exactly when they compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Node {
    Iri(InternedString),
    Blank(InternedString),
    Literal(Literal),
}

impl Node {
    pub fn iri<S: AsRef<str>>(iri: S) -> Self {
        Node::Iri(InternedString::new(iri))
    }

    pub fn blank<S: AsRef<str>>(label: S) -> Self {
        Node::Blank(InternedString::new(label))
    }

    /// Plain literal without datatype or language tag
    pub fn literal<S: AsRef<str>>(lexical: S) -> Self {
        Node::Literal(Literal {
            lexical: InternedString::new(lexical),
            datatype: None,
            language: None,
        })
    }

    pub fn typed_literal<S: AsRef<str>, D: AsRef<str>>(lexical: S, datatype: D) -> Self {
        Node::Literal(Literal {
            lexical: InternedString::new(lexical),
            datatype: Some(InternedString::new(datatype)),
            language: None,
        })
    }

    pub fn lang_literal<S: AsRef<str>, L: AsRef<str>>(lexical: S, language: L) -> Self {
        Node::Literal(Literal {
            lexical: InternedString::new(lexical),
            datatype: None,
            language: Some(InternedString::new(language.as_ref().to_ascii_lowercase())),
        })
    }

    /// True for IRIs and blank nodes, the nodes that can carry statements
    /// and therefore take part in equivalence declarations.
    pub fn is_resource(&self) -> bool {
        !self.is_literal()
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri.as_str()),
            _ => None,
        }
    }

    /// IRI, blank label or literal lexical form
    pub fn as_str(&self) -> &str {
        match self {
            Node::Iri(s) | Node::Blank(s) => s.as_str(),
            Node::Literal(lit) => lit.lexical.as_str(),
        }
    }

    /// True if this node is the IRI `iri`
    pub fn is_iri(&self, iri: &str) -> bool {
        self.as_iri() == Some(iri)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{}>", iri),
            Node::Blank(label) => write!(f, "_:{}", label),
            Node::Literal(lit) => {
                write!(f, "\"{}\"", lit.lexical)?;
                if let Some(lang) = &lit.language {
                    write!(f, "@{}", lang)
                } else if let Some(dt) = &lit.datatype {
                    write!(f, "^^<{}>", dt)
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// RDF statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Node,
    pub predicate: Node,
    pub object: Node,
}

impl Triple {
    pub fn new(subject: Node, predicate: Node, object: Node) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Statement whose three positions are IRIs
    pub fn iris(subject: &str, predicate: &str, object: &str) -> Self {
        Self::new(Node::iri(subject), Node::iri(predicate), Node::iri(object))
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
