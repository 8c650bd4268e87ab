//! Ontology — the read-only collaborator the finder indexes.
//!
//! [`Ontology`] is everything the finder needs from an ontology library: the
//! entities of the imports closure and the annotations asserted on each.
//! [`InMemoryOntology`] is a plain-data implementation that can be built in
//! code or deserialized from a term catalog.

use crate::error::Result;
use crate::types::{AnnotationContent, AnnotationValue, Entity, EntityKind};
use crate::vocab::Prefixes;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// ---------------------------------------------------------------------------
// Ontology trait
// ---------------------------------------------------------------------------

pub trait Ontology {
    type Entity: Entity;

    /// The ontology's own IRI, for logging.
    fn iri(&self) -> &str;

    /// Every class, property and named individual in the ontology and its
    /// transitive imports closure, each listed once.
    fn entities(&self) -> Vec<Self::Entity>;

    /// Annotation values asserted on `entity` anywhere in the closure.
    fn annotations(&self, entity: &Self::Entity) -> Vec<AnnotationValue>;

    /// Entities paired with their annotations. Implementations that can
    /// produce both in one pass should override this.
    fn annotated_entities(&self) -> Vec<(Self::Entity, Vec<AnnotationValue>)> {
        self.entities()
            .into_iter()
            .map(|entity| {
                let values = self.annotations(&entity);
                (entity, values)
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// EntityRef
// ---------------------------------------------------------------------------

/// Entity handle used by [`InMemoryOntology`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub iri: String,
    pub kind: EntityKind,
}

impl EntityRef {
    pub fn new(iri: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            iri: iri.into(),
            kind,
        }
    }
}

impl Entity for EntityRef {
    fn iri(&self) -> &str {
        &self.iri
    }
}

// ---------------------------------------------------------------------------
// InMemoryOntology
// ---------------------------------------------------------------------------

/// An entity declaration together with the annotations asserted on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDecl {
    pub iri: String,
    pub kind: EntityKind,
    #[serde(default)]
    pub annotations: Vec<AnnotationValue>,
}

impl EntityDecl {
    pub fn annotate(&mut self, property: impl Into<String>, value: AnnotationContent) -> &mut Self {
        self.annotations.push(AnnotationValue {
            property: property.into(),
            value,
        });
        self
    }

    /// Add an `rdfs:label` literal.
    pub fn label(&mut self, text: impl Into<String>) -> &mut Self {
        self.annotate(RDFS_LABEL, AnnotationContent::Literal(text.into()))
    }
}

const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

/// A self-contained ontology: its entities plus the ontologies it imports.
///
/// Imports are owned, so the closure is a tree; an ontology IRI that shows
/// up more than once in it is only visited the first time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryOntology {
    pub iri: String,
    #[serde(default)]
    pub entities: Vec<EntityDecl>,
    #[serde(default)]
    pub imports: Vec<InMemoryOntology>,
    /// IRI → position in `entities`, filled in on demand.
    #[serde(skip)]
    slots: DeclSlots,
}

/// Lookup from entity IRI to its first declaration, covering `entities[..covered]`.
/// Declarations pushed directly onto `entities` are picked up on the next
/// lookup. A stale hit (an IRI edited in place, or a truncated list) rebuilds
/// the whole table.
#[derive(Debug, Clone, Default)]
struct DeclSlots {
    by_iri: HashMap<String, usize>,
    covered: usize,
}

impl DeclSlots {
    fn find(&mut self, entities: &[EntityDecl], iri: &str) -> Option<usize> {
        if self.covered > entities.len() {
            *self = Self::default();
        }
        for (pos, decl) in entities.iter().enumerate().skip(self.covered) {
            self.by_iri.entry(decl.iri.clone()).or_insert(pos);
        }
        self.covered = entities.len();

        let pos = *self.by_iri.get(iri)?;
        if entities[pos].iri == iri {
            return Some(pos);
        }
        // A declaration was edited in place; start over.
        *self = Self::default();
        self.find(entities, iri)
    }
}

impl PartialEq for InMemoryOntology {
    fn eq(&self, other: &Self) -> bool {
        self.iri == other.iri && self.entities == other.entities && self.imports == other.imports
    }
}

impl InMemoryOntology {
    pub fn new(iri: impl Into<String>) -> Self {
        Self {
            iri: iri.into(),
            ..Self::default()
        }
    }

    /// Declare an entity, or return the existing declaration with this IRI.
    /// An existing declaration keeps the kind it was first declared with.
    pub fn declare(&mut self, iri: impl Into<String>, kind: EntityKind) -> &mut EntityDecl {
        let iri = iri.into();
        let pos = match self.slots.find(&self.entities, &iri) {
            Some(pos) => pos,
            None => {
                let pos = self.entities.len();
                self.slots.by_iri.insert(iri.clone(), pos);
                self.slots.covered = pos + 1;
                self.entities.push(EntityDecl {
                    iri,
                    kind,
                    annotations: Vec::new(),
                });
                pos
            }
        };
        &mut self.entities[pos]
    }

    /// The declaration with this IRI in this ontology (not its imports).
    pub fn entity_mut(&mut self, iri: &str) -> Option<&mut EntityDecl> {
        let pos = self.slots.find(&self.entities, iri)?;
        Some(&mut self.entities[pos])
    }

    pub fn import(&mut self, ontology: InMemoryOntology) -> &mut Self {
        self.imports.push(ontology);
        self
    }

    /// Expand CURIE annotation property names (`rdfs:label`) to full IRIs
    /// throughout the closure.
    pub fn expand_property_curies(&mut self, prefixes: &Prefixes) -> Result<()> {
        for decl in &mut self.entities {
            for value in &mut decl.annotations {
                value.property = prefixes.expand(&value.property)?;
            }
        }
        for import in &mut self.imports {
            import.expand_property_curies(prefixes)?;
        }
        Ok(())
    }

    /// Ontologies of the imports closure, depth-first, self first.
    pub fn closure(&self) -> Vec<&InMemoryOntology> {
        let mut seen = HashSet::new();
        let mut stack = vec![self];
        let mut order = Vec::new();
        while let Some(ontology) = stack.pop() {
            if !seen.insert(ontology.iri.as_str()) {
                continue;
            }
            order.push(ontology);
            stack.extend(ontology.imports.iter().rev());
        }
        order
    }
}

impl Ontology for InMemoryOntology {
    type Entity = EntityRef;

    fn iri(&self) -> &str {
        &self.iri
    }

    fn entities(&self) -> Vec<EntityRef> {
        let mut seen = HashSet::new();
        self.closure()
            .into_iter()
            .flat_map(|ontology| ontology.entities.iter())
            .filter(|decl| seen.insert(decl.iri.as_str()))
            .map(|decl| EntityRef::new(decl.iri.clone(), decl.kind))
            .collect()
    }

    fn annotations(&self, entity: &EntityRef) -> Vec<AnnotationValue> {
        self.closure()
            .into_iter()
            .flat_map(|ontology| ontology.entities.iter())
            .filter(|decl| decl.iri == entity.iri)
            .flat_map(|decl| decl.annotations.iter().cloned())
            .collect()
    }

    fn annotated_entities(&self) -> Vec<(EntityRef, Vec<AnnotationValue>)> {
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut out: Vec<(EntityRef, Vec<AnnotationValue>)> = Vec::new();
        for ontology in self.closure() {
            for decl in &ontology.entities {
                let slot = *slots.entry(decl.iri.as_str()).or_insert_with(|| {
                    out.push((EntityRef::new(decl.iri.clone(), decl.kind), Vec::new()));
                    out.len() - 1
                });
                out[slot].1.extend(decl.annotations.iter().cloned());
            }
        }
        out
    }
}
