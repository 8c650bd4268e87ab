//! Well-known ontology prefixes and the label/synonym annotation properties.
//!
//! The built-in prefix table is a compile-time [`phf::Map`]. [`Prefixes`]
//! layers user-supplied prefixes over it for CURIE expansion and shortening.

use crate::error::{FinderError, Result};
use phf::phf_map;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Static vocabulary
// ---------------------------------------------------------------------------

pub static WELL_KNOWN_PREFIXES: phf::Map<&'static str, &'static str> = phf_map! {
    "rdf" => "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
    "rdfs" => "http://www.w3.org/2000/01/rdf-schema#",
    "owl" => "http://www.w3.org/2002/07/owl#",
    "xsd" => "http://www.w3.org/2001/XMLSchema#",
    "oboInOwl" => "http://www.geneontology.org/formats/oboInOwl#",
    "skos" => "http://www.w3.org/2004/02/skos/core#",
    "obo" => "http://purl.obolibrary.org/obo/",
    "dc" => "http://purl.org/dc/elements/1.1/",
    "dcterms" => "http://purl.org/dc/terms/",
};

/// Annotation properties whose literals name an entity: `rdfs:label`, the
/// OboInOwl synonym properties and the SKOS lexical labels.
pub const DEFAULT_LABEL_PROPERTIES: &[&str] = &[
    "rdfs:label",
    "oboInOwl:hasSynonym",
    "oboInOwl:hasExactSynonym",
    "oboInOwl:hasNarrowSynonym",
    "oboInOwl:hasBroadSynonym",
    "oboInOwl:hasRelatedSynonym",
    "skos:prefLabel",
    "skos:altLabel",
    "skos:hiddenLabel",
];

// ---------------------------------------------------------------------------
// LabelProperty
// ---------------------------------------------------------------------------

/// An annotation property whose literal values are indexed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelProperty {
    /// Full property IRI, matched against annotation values.
    pub iri: String,
    /// Name reported in search results, e.g. `skos:altLabel`.
    pub short_name: String,
}

impl LabelProperty {
    pub fn new(iri: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            iri: iri.into(),
            short_name: short_name.into(),
        }
    }

    /// Resolve a CURIE or full IRI. The short name is the CURIE form when a
    /// known prefix covers the IRI, otherwise the IRI itself.
    pub fn resolve(id: &str, prefixes: &Prefixes) -> Result<Self> {
        let iri = prefixes.expand(id)?;
        let short_name = prefixes.shorten(&iri);
        Ok(Self { iri, short_name })
    }
}

/// The nine default label properties, resolved against the built-in prefixes.
pub fn default_label_properties() -> Vec<LabelProperty> {
    DEFAULT_LABEL_PROPERTIES
        .iter()
        .filter_map(|curie| {
            let (prefix, local) = curie.split_once(':')?;
            let namespace = WELL_KNOWN_PREFIXES.get(prefix)?;
            Some(LabelProperty::new(format!("{namespace}{local}"), *curie))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Prefixes
// ---------------------------------------------------------------------------

/// Prefix → namespace table: built-ins plus configured extras. Extras win
/// when both define the same prefix.
#[derive(Debug, Clone, Default)]
pub struct Prefixes {
    extra: BTreeMap<String, String>,
}

impl Prefixes {
    pub fn well_known() -> Self {
        Self::default()
    }

    pub fn with_extra(extra: BTreeMap<String, String>) -> Self {
        Self { extra }
    }

    pub fn insert(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.extra.insert(prefix.into(), namespace.into());
    }

    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.extra
            .get(prefix)
            .map(String::as_str)
            .or_else(|| WELL_KNOWN_PREFIXES.get(prefix).copied())
    }

    /// Expand `prefix:local` to a full IRI. Anything containing `://` is
    /// already a full IRI and is returned unchanged.
    pub fn expand(&self, id: &str) -> Result<String> {
        if id.contains("://") {
            return Ok(id.to_string());
        }
        let (prefix, local) = id
            .split_once(':')
            .filter(|(prefix, _)| !prefix.is_empty())
            .ok_or_else(|| FinderError::InvalidCurie(id.to_string()))?;
        let namespace = self.namespace(prefix).ok_or_else(|| FinderError::UnknownPrefix {
            prefix: prefix.to_string(),
            curie: id.to_string(),
        })?;
        Ok(format!("{namespace}{local}"))
    }

    /// Compact an IRI to `prefix:local` using the longest matching namespace.
    /// Returns the IRI unchanged if no namespace applies.
    pub fn shorten(&self, iri: &str) -> String {
        let extra = self.extra.iter().map(|(p, ns)| (p.as_str(), ns.as_str()));
        let builtin = WELL_KNOWN_PREFIXES
            .entries()
            .filter(|(prefix, _)| !self.extra.contains_key(**prefix))
            .map(|(p, ns)| (*p, *ns));

        extra
            .chain(builtin)
            .filter(|(_, ns)| iri.len() > ns.len() && iri.starts_with(ns))
            .max_by(|(pa, a), (pb, b)| a.len().cmp(&b.len()).then_with(|| pb.cmp(pa)))
            .map(|(prefix, ns)| format!("{prefix}:{}", &iri[ns.len()..]))
            .unwrap_or_else(|| iri.to_string())
    }
}
