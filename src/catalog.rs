//! Term catalogs — JSON snapshots of an ontology's entities and annotations.
//!
//! A catalog is a serialized [`InMemoryOntology`]: the ontology IRI, its
//! entities with their annotation values, and its imports, nested. Annotation
//! properties may be written as CURIEs and are expanded on load.
//!
//! ```json
//! {
//!   "iri": "http://purl.obolibrary.org/obo/toef.owl",
//!   "entities": [
//!     { "iri": "http://purl.obolibrary.org/obo/TOEF_0001",
//!       "kind": "object_property",
//!       "annotations": [
//!         { "property": "rdfs:label", "value": { "literal": "has object" } }
//!       ] }
//!   ],
//!   "imports": []
//! }
//! ```

use anyhow::Context;
use ontofind_core::obo::iri_to_obo_id;
use ontofind_core::vocab::Prefixes;
use ontofind_core::{Entity, EntityRef, InMemoryOntology, MatchEntry, MatchKind};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read and parse a catalog file.
pub fn load_catalog(path: &Path, prefixes: &Prefixes) -> anyhow::Result<InMemoryOntology> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading term catalog {}", path.display()))?;
    parse_catalog(&text, prefixes).with_context(|| format!("loading term catalog {}", path.display()))
}

/// Parse catalog JSON and expand CURIE property names.
pub fn parse_catalog(json: &str, prefixes: &Prefixes) -> anyhow::Result<InMemoryOntology> {
    let mut ontology: InMemoryOntology =
        serde_json::from_str(json).context("catalog is not a valid ontology document")?;
    ontology.expand_property_curies(prefixes)?;
    Ok(ontology)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// An owned, printable search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub iri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obo_id: Option<String>,
    pub property: String,
    pub literal: String,
    pub kind: MatchKind,
}

impl MatchRecord {
    pub fn from_match(entry: &MatchEntry<'_, EntityRef>, with_obo_id: bool) -> Self {
        let iri = entry.entity.iri();
        Self {
            iri: iri.to_string(),
            obo_id: with_obo_id.then(|| iri_to_obo_id(iri).ok()).flatten(),
            property: entry.property.to_string(),
            literal: entry.literal.to_string(),
            kind: entry.kind,
        }
    }
}

/// One tab-separated line per record: IRI, OBO ID, property, literal, match
/// kind. The OBO ID column is always present and left empty when there is none.
pub fn render_tsv(records: &[MatchRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            record.iri,
            record.obo_id.as_deref().unwrap_or_default(),
            record.property,
            record.literal,
            record.kind
        );
    }
    out
}
