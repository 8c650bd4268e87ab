//! EntityIndex — phrase-keyed lookup tables built from entity labels.
//!
//! Every indexed literal becomes one term record. The exact map sends the
//! stemmed key of the whole literal to its term; the sub map sends the key of
//! every proper contiguous sub-phrase to the same term. Both maps only hold
//! term ids, so a literal's text is stored once however many keys it has.
//!
//! Indexing is append-only: repeated or duplicate values produce separate
//! records, keeping the (property, literal) provenance of every hit.

use crate::phrases::{phrase_key, sub_phrases};
use crate::stemmer::Stemmer;
use crate::types::{AnnotationValue, Entity, MatchEntry, MatchKind};
use crate::vocab::{default_label_properties, LabelProperty};
use std::collections::HashMap;

type TermId = usize;

#[derive(Debug)]
struct Term<E> {
    entity: E,
    property: String,
    literal: String,
}

/// Result of indexing one entity's annotation values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityOutcome {
    /// Literals added to the index.
    pub indexed: usize,
    /// Values on a label property that could not be indexed: IRI values and
    /// blank literals.
    pub skipped: usize,
}

#[derive(Debug)]
pub struct EntityIndex<E> {
    stemmer: Stemmer,
    /// Label property IRI → short name.
    label_properties: HashMap<String, String>,
    terms: Vec<Term<E>>,
    exact: HashMap<String, Vec<TermId>>,
    sub: HashMap<String, Vec<TermId>>,
    max_term_size: usize,
}

impl<E: Entity> EntityIndex<E> {
    /// An empty index over the default label and synonym properties.
    pub fn new() -> Self {
        Self::with_label_properties(default_label_properties())
    }

    pub fn with_label_properties(properties: impl IntoIterator<Item = LabelProperty>) -> Self {
        Self {
            stemmer: Stemmer::english(),
            label_properties: properties
                .into_iter()
                .map(|p| (p.iri, p.short_name))
                .collect(),
            terms: Vec::new(),
            exact: HashMap::new(),
            sub: HashMap::new(),
            max_term_size: 0,
        }
    }

    pub fn stemmer(&self) -> &Stemmer {
        &self.stemmer
    }

    /// Short name of `property` if it is one of the indexed label properties.
    pub fn label_property(&self, property: &str) -> Option<&str> {
        self.label_properties.get(property).map(String::as_str)
    }

    // -----------------------------------------------------------------------
    // Build
    // -----------------------------------------------------------------------

    /// Index the literal values of `entity` that sit on a label property.
    /// Values on any other property are ignored.
    pub fn add_entity<I>(&mut self, entity: E, values: I) -> EntityOutcome
    where
        I: IntoIterator<Item = AnnotationValue>,
    {
        let mut outcome = EntityOutcome::default();
        for value in values {
            let Some(short_name) = self.label_properties.get(&value.property).cloned() else {
                continue;
            };
            let indexed = match value.as_literal() {
                Some(text) => self.add_term(entity.clone(), short_name, text),
                None => false,
            };
            if indexed {
                outcome.indexed += 1;
            } else {
                tracing::trace!(
                    entity = entity.iri(),
                    property = %value.property,
                    "skipping non-literal or blank label value"
                );
                outcome.skipped += 1;
            }
        }
        outcome
    }

    /// Index one literal under its full key and all of its sub-phrase keys.
    /// Returns `false`, indexing nothing, if the literal has no words.
    pub fn add_term(&mut self, entity: E, property: impl Into<String>, literal: &str) -> bool {
        let tokens = self.stemmer.stem_phrase(literal);
        if tokens.is_empty() {
            return false;
        }

        let id = self.terms.len();
        self.terms.push(Term {
            entity,
            property: property.into(),
            literal: literal.to_string(),
        });

        self.exact.entry(phrase_key(&tokens)).or_default().push(id);
        for phrase in sub_phrases(&tokens) {
            self.sub.entry(phrase_key(phrase)).or_default().push(id);
        }
        self.max_term_size = self.max_term_size.max(tokens.len());
        true
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Terms whose whole stemmed text equals `key`.
    pub fn exact_matches<'a>(&'a self, key: &str) -> impl Iterator<Item = MatchEntry<'a, E>> + 'a {
        self.entries(&self.exact, key, MatchKind::Full)
    }

    /// Terms with a proper sub-phrase whose stemmed text equals `key`.
    pub fn sub_matches<'a>(&'a self, key: &str) -> impl Iterator<Item = MatchEntry<'a, E>> + 'a {
        self.entries(&self.sub, key, MatchKind::SubPhrase)
    }

    fn entries<'a>(
        &'a self,
        map: &'a HashMap<String, Vec<TermId>>,
        key: &str,
        kind: MatchKind,
    ) -> impl Iterator<Item = MatchEntry<'a, E>> + 'a {
        map.get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&id| {
                let term = &self.terms[id];
                MatchEntry {
                    entity: &term.entity,
                    property: &term.property,
                    literal: &term.literal,
                    kind,
                }
            })
    }

    // -----------------------------------------------------------------------
    // Stats
    // -----------------------------------------------------------------------

    /// Largest token count among indexed literals.
    pub fn max_term_size(&self) -> usize {
        self.max_term_size
    }

    /// Number of indexed literals.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn exact_key_count(&self) -> usize {
        self.exact.len()
    }

    pub fn sub_key_count(&self) -> usize {
        self.sub.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<E: Entity> Default for EntityIndex<E> {
    fn default() -> Self {
        Self::new()
    }
}
