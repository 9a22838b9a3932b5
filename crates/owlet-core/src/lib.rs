//! # owlet-core
//!
//! Node and statement model shared by the owlet crates, the DAML+OIL / RDFS /
//! OWL vocabulary, and the [`TripleSource`] capability every graph store
//! offers to the traversal layer.

pub mod model;
pub mod source;
pub mod vocabulary;

pub use model::*;
pub use source::*;
