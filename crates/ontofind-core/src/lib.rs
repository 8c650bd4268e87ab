//! ontofind-core — stemmed label lookup for ontology entities.
//!
//! This crate exposes the layers of the entity finder as public modules, plus
//! the shared types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! Ontology ──► Stemmer ──► Phrases ──► EntityIndex
//!                 │                        │
//! query ──────────┘                        └──► EntityFinder ──► MatchEntry
//! ```
//!
//! The index is built in one synchronous pass per ontology and is read-only
//! afterwards. A built [`EntityFinder`] can be shared across threads for
//! concurrent queries.

pub mod config;
pub mod error;
pub mod finder;
pub mod index;
pub mod obo;
pub mod ontology;
pub mod phrases;
pub mod stemmer;
pub mod types;
pub mod vocab;

pub use error::{FinderError, Result};
pub use finder::{sort_matches, EntityFinder, IndexStats};
pub use index::EntityIndex;
pub use ontology::{EntityDecl, EntityRef, InMemoryOntology, Ontology};
pub use stemmer::Stemmer;
pub use types::{AnnotationContent, AnnotationValue, Entity, EntityKind, MatchEntry, MatchKind};
pub use vocab::LabelProperty;
