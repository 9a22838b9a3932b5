//! # owlet-store
//!
//! Indexed in-memory triple store. Implements [`owlet_core::TripleSource`] so
//! the DAML traversal layer can run directly over it.

pub mod store;

pub use store::*;
