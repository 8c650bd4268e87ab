//! EntityFinder — the public façade over [`EntityIndex`].
//!
//! Populate once per ontology with [`EntityFinder::add_ontology_entities`],
//! then query with [`EntityFinder::find_entities`]. A query is stemmed and
//! looked up verbatim in both maps; it is never split further, so query cost
//! does not depend on the size of the ontology.

use crate::index::EntityIndex;
use crate::ontology::{EntityRef, Ontology};
use crate::phrases::phrase_key;
use crate::types::{Entity, MatchEntry};
use crate::vocab::LabelProperty;

/// Counters for one [`EntityFinder::add_ontology_entities`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub entities_seen: usize,
    pub values_indexed: usize,
    pub values_skipped: usize,
}

#[derive(Debug)]
pub struct EntityFinder<E = EntityRef> {
    index: EntityIndex<E>,
}

impl<E: Entity> EntityFinder<E> {
    /// A finder over the default label and synonym properties.
    pub fn new() -> Self {
        Self {
            index: EntityIndex::new(),
        }
    }

    /// A finder that indexes only `properties`.
    pub fn with_label_properties(properties: impl IntoIterator<Item = LabelProperty>) -> Self {
        Self {
            index: EntityIndex::with_label_properties(properties),
        }
    }

    /// Index the labels and synonyms of every entity in `ontology`'s imports
    /// closure.
    ///
    /// Calling this twice for the same ontology indexes everything twice.
    pub fn add_ontology_entities<O>(&mut self, ontology: &O) -> IndexStats
    where
        O: Ontology<Entity = E>,
    {
        let mut stats = IndexStats::default();
        for (entity, values) in ontology.annotated_entities() {
            let outcome = self.index.add_entity(entity, values);
            stats.entities_seen += 1;
            stats.values_indexed += outcome.indexed;
            stats.values_skipped += outcome.skipped;
        }

        tracing::debug!(
            ontology = ontology.iri(),
            entities = stats.entities_seen,
            indexed = stats.values_indexed,
            skipped = stats.values_skipped,
            max_term_size = self.index.max_term_size(),
            "indexed ontology entities"
        );
        stats
    }

    /// Entities with a label or synonym matching `text`.
    ///
    /// Whole-label matches come back as [`MatchKind::Full`], matches on a
    /// proper fragment of a label as [`MatchKind::SubPhrase`]. The order of
    /// the returned entries is unspecified; use [`sort_matches`] for a stable
    /// one. Blank text matches nothing.
    ///
    /// [`MatchKind::Full`]: crate::types::MatchKind::Full
    /// [`MatchKind::SubPhrase`]: crate::types::MatchKind::SubPhrase
    pub fn find_entities(&self, text: &str) -> Vec<MatchEntry<'_, E>> {
        let tokens = self.index.stemmer().stem_phrase(text);
        if tokens.is_empty() {
            return Vec::new();
        }

        let key = phrase_key(&tokens);
        let matches: Vec<_> = self
            .index
            .exact_matches(&key)
            .chain(self.index.sub_matches(&key))
            .collect();
        tracing::trace!(query = text, key = %key, hits = matches.len(), "find_entities");
        matches
    }

    /// Largest token count among all indexed labels.
    pub fn max_term_size(&self) -> usize {
        self.index.max_term_size()
    }

    pub fn index(&self) -> &EntityIndex<E> {
        &self.index
    }
}

impl<E: Entity> Default for EntityFinder<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort matches by entity IRI, then property, literal and match kind.
pub fn sort_matches<E: Entity>(matches: &mut [MatchEntry<'_, E>]) {
    matches.sort_by(|a, b| {
        a.entity
            .iri()
            .cmp(b.entity.iri())
            .then_with(|| a.property.cmp(b.property))
            .then_with(|| a.literal.cmp(b.literal))
            .then_with(|| a.kind.cmp(&b.kind))
    });
}
