//! OBO Foundry identifiers.
//!
//! Converts between OBO IDs (`PO:0000003`) and OBO Foundry term IRIs
//! (`http://purl.obolibrary.org/obo/PO_0000003`). Used to render search
//! results in the short form curators usually type.

use crate::error::{FinderError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub const OBO_BASE_IRI: &str = "http://purl.obolibrary.org/obo/";

// Format per http://www.obofoundry.org/id-policy.html
static OBO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]+(_[A-Za-z]+)?:\d+$").expect("OBO ID pattern must compile")
});

static RAW_OBO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<idspace>[A-Za-z]+(_[A-Za-z]+)?)_(?P<localid>\d+)$")
        .expect("raw OBO ID pattern must compile")
});

pub fn is_obo_id(id: &str) -> bool {
    OBO_ID.is_match(id)
}

/// `http://purl.obolibrary.org/obo/PO_0000003` → `PO:0000003`.
pub fn iri_to_obo_id(iri: &str) -> Result<String> {
    let local = iri
        .strip_prefix(OBO_BASE_IRI)
        .ok_or_else(|| FinderError::NotOboIri(iri.to_string()))?;
    let caps = RAW_OBO_ID
        .captures(local)
        .ok_or_else(|| FinderError::NotOboIri(iri.to_string()))?;
    Ok(format!("{}:{}", &caps["idspace"], &caps["localid"]))
}

/// `PO:0000003` → `http://purl.obolibrary.org/obo/PO_0000003`.
pub fn obo_id_to_iri(id: &str) -> Result<String> {
    if !is_obo_id(id) {
        return Err(FinderError::InvalidOboId(id.to_string()));
    }
    Ok(format!("{OBO_BASE_IRI}{}", id.replacen(':', "_", 1)))
}
