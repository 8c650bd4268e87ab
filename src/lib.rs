//! ontofind — find ontology terms by label and synonym.
//!
//! This crate re-exports [`ontofind_core`] so that integration tests and the
//! binary can import everything from one place, and adds the [`catalog`]
//! module that reads term catalogs from disk.
//!
//! # Architecture
//!
//! ```text
//! catalog.json ──► InMemoryOntology ──► EntityFinder ──► MatchRecord ──► stdout
//!                  (catalog)            (core)           (catalog)
//! ```
//!
//! All file I/O lives here; the core only indexes and searches.

pub mod catalog;

pub use ontofind_core::*;
