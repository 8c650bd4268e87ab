//! Phrase expansion and phrase keys.
//!
//! A label of N stemmed tokens is indexed under its full key plus the keys of
//! all N·(N+1)/2 − 1 proper contiguous sub-phrases, so that a partial query is
//! a single hash lookup at search time.

/// Separator between tokens in a phrase key. Tokens never contain whitespace.
pub const KEY_SEPARATOR: &str = " ";

/// All proper contiguous sub-sequences of `tokens`.
///
/// Ordered by increasing start index, then increasing length. The whole
/// sequence is never included, so one token or fewer yields nothing.
///
/// ```
/// use ontofind_core::phrases::sub_phrases;
///
/// let subs = sub_phrases(&["one", "more", "word"]);
/// assert_eq!(
///     subs,
///     vec![
///         &["one"][..],
///         &["one", "more"][..],
///         &["more"][..],
///         &["more", "word"][..],
///         &["word"][..],
///     ]
/// );
/// ```
pub fn sub_phrases<T>(tokens: &[T]) -> Vec<&[T]> {
    let n = tokens.len();
    if n < 2 {
        return Vec::new();
    }

    let mut phrases = Vec::with_capacity(sub_phrase_count(n));
    for start in 0..n {
        for end in (start + 1)..=n {
            if start == 0 && end == n {
                continue;
            }
            phrases.push(&tokens[start..end]);
        }
    }
    phrases
}

/// Number of phrases [`sub_phrases`] returns for `n` tokens.
pub fn sub_phrase_count(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n * (n + 1) / 2 - 1
    }
}

/// Canonical index key for a token sequence.
pub fn phrase_key<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut key = String::with_capacity(tokens.iter().map(|t| t.as_ref().len() + 1).sum());
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            key.push_str(KEY_SEPARATOR);
        }
        key.push_str(token.as_ref());
    }
    key
}
