//! Core types for ontofind-core.
//!
//! This module defines the data structures shared across all layers: the
//! [`Entity`] handle contract, the [`EntityKind`] discriminant, the
//! [`AnnotationValue`] read from an ontology, and the [`MatchEntry`] returned
//! by a search.

use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// An opaque handle to an ontology entity.
///
/// The finder only needs to store, compare and hand back entity handles; the
/// IRI is exposed so that callers can render or sort results.
pub trait Entity: Clone + Eq + Hash {
    /// Stable display identifier, normally the entity's full IRI.
    fn iri(&self) -> &str;
}

/// Which kind of OWL entity a handle refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Class,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    NamedIndividual,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Class => write!(f, "class"),
            EntityKind::ObjectProperty => write!(f, "object property"),
            EntityKind::DataProperty => write!(f, "data property"),
            EntityKind::AnnotationProperty => write!(f, "annotation property"),
            EntityKind::NamedIndividual => write!(f, "named individual"),
        }
    }
}

/// The object of an annotation assertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationContent {
    /// A text literal. Only literals are ever indexed.
    Literal(String),
    /// An IRI value, e.g. the target of `rdfs:seeAlso`.
    Iri(String),
}

/// One annotation asserted on an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnotationValue {
    /// Annotation property IRI. Ontologies hand these to the finder fully
    /// expanded; the term catalog format also accepts CURIEs until they are
    /// expanded on load.
    pub property: String,
    pub value: AnnotationContent,
}

impl AnnotationValue {
    pub fn literal(property: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: AnnotationContent::Literal(text.into()),
        }
    }

    pub fn iri(property: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: AnnotationContent::Iri(target.into()),
        }
    }

    /// The literal text, or `None` for IRI-valued annotations.
    pub fn as_literal(&self) -> Option<&str> {
        match &self.value {
            AnnotationContent::Literal(text) => Some(text),
            AnnotationContent::Iri(_) => None,
        }
    }
}

/// How a query matched an indexed label or synonym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchKind {
    /// The stemmed query equals the whole stemmed label.
    Full,
    /// The stemmed query equals a proper contiguous fragment of the label.
    #[serde(rename = "SUBPHRASE")]
    SubPhrase,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchKind::Full => write!(f, "FULL"),
            MatchKind::SubPhrase => write!(f, "SUBPHRASE"),
        }
    }
}

/// A single search hit, borrowed from the index that produced it.
///
/// `property` is the short name (CURIE) of the annotation property that
/// carried the matching text, and `literal` is that text as written in the
/// ontology, before stemming.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct MatchEntry<'a, E> {
    pub entity: &'a E,
    pub property: &'a str,
    pub literal: &'a str,
    pub kind: MatchKind,
}

impl<E> Clone for MatchEntry<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for MatchEntry<'_, E> {}

impl<E: Entity> MatchEntry<'_, E> {
    /// `(iri, property, literal, kind)` with owned strings, the shape callers
    /// usually render or compare against.
    pub fn to_tuple(&self) -> (String, String, String, MatchKind) {
        (
            self.entity.iri().to_string(),
            self.property.to_string(),
            self.literal.to_string(),
            self.kind,
        )
    }
}
