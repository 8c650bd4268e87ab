//! Stemmer — reduces free text to an ordered sequence of word stems.
//!
//! Text is split on whitespace runs, every word is lowercased and stemmed with
//! the Snowball English algorithm. No stop words are removed.

use rust_stemmers::{Algorithm, Stemmer as Snowball};

/// Upper bound on re-stemming passes in [`Stemmer::stem_word`].
const MAX_PASSES: usize = 8;

pub struct Stemmer {
    snowball: Snowball,
}

impl Stemmer {
    pub fn english() -> Self {
        Self {
            snowball: Snowball::create(Algorithm::English),
        }
    }

    /// Stem a single word.
    ///
    /// Snowball is not idempotent on every input ("agreed" → "agre" → "agr"),
    /// so the algorithm is re-applied until the output stops changing. Every
    /// stem this returns is therefore a fixed point of `stem_word`.
    pub fn stem_word(&self, word: &str) -> String {
        let mut current = word.to_lowercase();
        for _ in 0..MAX_PASSES {
            let next = self.snowball.stem(&current);
            if next == current {
                break;
            }
            current = next.into_owned();
        }
        current
    }

    /// Stem every whitespace-separated word of `text`, in order. Blank input
    /// yields an empty vector.
    pub fn stem_phrase(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| self.stem_word(word))
            .collect()
    }
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl std::fmt::Debug for Stemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stemmer")
            .field("algorithm", &"snowball-english")
            .finish()
    }
}
