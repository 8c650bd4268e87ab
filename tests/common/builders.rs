//! Test builders — ergonomic constructors for ontologies and finders.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use ontofind::obo::obo_id_to_iri;
use ontofind::vocab::Prefixes;
use ontofind::{AnnotationContent, EntityFinder, EntityKind, InMemoryOntology};

// ---------------------------------------------------------------------------
// OntologyBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`InMemoryOntology`] fixtures. Entity ids are OBO IDs
/// (`TOEF:0001`) and property names are CURIEs.
///
/// # Example
///
/// ```rust
/// let ont = OntologyBuilder::new("http://purl.obolibrary.org/obo/toef.owl")
///     .entity("TOEF:0001", EntityKind::ObjectProperty)
///     .label("has object")
///     .synonym("skos:altLabel", "holds")
///     .build();
/// ```
pub struct OntologyBuilder {
    ontology: InMemoryOntology,
    current: Option<String>,
}

impl OntologyBuilder {
    pub fn new(iri: &str) -> Self {
        Self {
            ontology: InMemoryOntology::new(iri),
            current: None,
        }
    }

    /// Declare an entity; following annotation calls apply to it.
    pub fn entity(mut self, obo_id: &str, kind: EntityKind) -> Self {
        let iri = obo_id_to_iri(obo_id).expect("fixture ids must be OBO IDs");
        self.ontology.declare(iri.clone(), kind);
        self.current = Some(iri);
        self
    }

    pub fn class(self, obo_id: &str) -> Self {
        self.entity(obo_id, EntityKind::Class)
    }

    pub fn label(self, text: &str) -> Self {
        self.synonym("rdfs:label", text)
    }

    /// Add a literal annotation on any property, given as a CURIE.
    pub fn synonym(self, property: &str, text: &str) -> Self {
        self.annotate(property, AnnotationContent::Literal(text.to_string()))
    }

    pub fn annotate(mut self, property: &str, value: AnnotationContent) -> Self {
        let iri = self.current.clone().expect("call entity() before annotating");
        let property = Prefixes::well_known()
            .expand(property)
            .expect("fixture properties must use known prefixes");
        self.ontology
            .entity_mut(&iri)
            .expect("current entity is declared")
            .annotate(property, value);
        self
    }

    pub fn import(mut self, ontology: InMemoryOntology) -> Self {
        self.ontology.import(ontology);
        self
    }

    pub fn build(self) -> InMemoryOntology {
        self.ontology
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// An ontology of classes `TEST:0001`, `TEST:0002`, … labelled in order.
pub fn labelled_classes(labels: &[&str]) -> InMemoryOntology {
    labels
        .iter()
        .enumerate()
        .fold(OntologyBuilder::new("http://purl.obolibrary.org/obo/test.owl"), |b, (i, label)| {
            b.class(&format!("TEST:{:04}", i + 1)).label(label)
        })
        .build()
}

/// A finder populated from `ontology`.
pub fn finder_for(ontology: &InMemoryOntology) -> EntityFinder {
    let mut finder = EntityFinder::new();
    finder.add_ontology_entities(ontology);
    finder
}
