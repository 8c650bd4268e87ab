//! Static ontologies and catalogs used across harnesses.
//!
//! [`toef_ontology`] mirrors the reference entity-finder test ontology: a
//! handful of TOEF terms covering every entity kind and every way of
//! attaching a label, plus one imported OBITO class.

use super::builders::OntologyBuilder;
use ontofind::{AnnotationContent, EntityKind, InMemoryOntology};

pub const TOEF_IRI: &str = "http://purl.obolibrary.org/obo/toef.owl";
pub const OBITO_IRI: &str = "http://purl.obolibrary.org/obo/obito.owl";

/// The imported ontology: a single class.
pub fn obito_ontology() -> InMemoryOntology {
    OntologyBuilder::new(OBITO_IRI)
        .class("OBITO:0001")
        .label("imported test class 1")
        .build()
}

/// The TOEF test ontology, importing [`obito_ontology`].
pub fn toef_ontology() -> InMemoryOntology {
    OntologyBuilder::new(TOEF_IRI)
        .entity("TOEF:0001", EntityKind::ObjectProperty)
        .label("has object")
        .entity("TOEF:0020", EntityKind::DataProperty)
        .label("has datum")
        .entity("TOEF:0030", EntityKind::AnnotationProperty)
        .label("has annotation")
        .class("TOEF:0010")
        .label("something")
        .label("alternative name")
        .synonym("skos:altLabel", "another name")
        .synonym("oboInOwl:hasSynonym", "synonymous name")
        .synonym("rdfs:comment", "should be ignored")
        .annotate(
            "rdfs:seeAlso",
            AnnotationContent::Iri("http://purl.obolibrary.org/obo/TOEF_0011".to_string()),
        )
        .class("TOEF:0011")
        .label("something else")
        .class("TOEF:0012")
        .label("testing labels")
        .class("TOEF:0013")
        .label("test label")
        .entity("TOEF:8000", EntityKind::NamedIndividual)
        .label("an individual")
        .import(obito_ontology())
        .build()
}

/// [`toef_ontology`] as catalog JSON, property names as CURIEs.
pub const TOEF_CATALOG_JSON: &str = r#"{
  "iri": "http://purl.obolibrary.org/obo/toef.owl",
  "entities": [
    {
      "iri": "http://purl.obolibrary.org/obo/TOEF_0001",
      "kind": "object_property",
      "annotations": [
        { "property": "rdfs:label", "value": { "literal": "has object" } }
      ]
    },
    {
      "iri": "http://purl.obolibrary.org/obo/TOEF_0010",
      "kind": "class",
      "annotations": [
        { "property": "rdfs:label", "value": { "literal": "something" } },
        { "property": "skos:altLabel", "value": { "literal": "another name" } },
        { "property": "rdfs:comment", "value": { "literal": "should be ignored" } }
      ]
    },
    {
      "iri": "http://purl.obolibrary.org/obo/TOEF_0011",
      "kind": "class",
      "annotations": [
        { "property": "rdfs:label", "value": { "literal": "something else" } },
        { "property": "oboInOwl:hasExactSynonym", "value": { "literal": "another thing" } }
      ]
    }
  ],
  "imports": [
    {
      "iri": "http://purl.obolibrary.org/obo/obito.owl",
      "entities": [
        {
          "iri": "http://purl.obolibrary.org/obo/OBITO_0001",
          "kind": "class",
          "annotations": [
            { "property": "rdfs:label", "value": { "literal": "imported test class 1" } }
          ]
        }
      ]
    }
  ]
}"#;
