//! Domain-specific assertion macros for ontofind harnesses.
//!
//! These wrap `pretty_assertions` and compare search results in a stable
//! order, so a failure shows exactly which hits were missing or unexpected.

use ontofind::{sort_matches, EntityFinder, MatchKind};

/// One expected hit: (OBO ID, property short name, literal, kind).
pub type Hit = (&'static str, &'static str, &'static str, MatchKind);

/// Search `finder` and return hits as (OBO ID or IRI, property, literal, kind)
/// sorted by IRI.
pub fn hits(finder: &EntityFinder, query: &str) -> Vec<(String, String, String, MatchKind)> {
    let mut matches = finder.find_entities(query);
    sort_matches(&mut matches);
    matches
        .iter()
        .map(|m| {
            let (iri, property, literal, kind) = m.to_tuple();
            let id = ontofind::obo::iri_to_obo_id(&iri).unwrap_or(iri);
            (id, property, literal, kind)
        })
        .collect()
}

/// Assert that a query returns exactly the expected hits, in IRI order.
///
/// ```rust
/// assert_hits!(finder, "has object", [("TOEF:0001", "rdfs:label", "has object", MatchKind::Full)]);
/// ```
#[macro_export]
macro_rules! assert_hits {
    ($finder:expr, $query:expr, [$($hit:expr),* $(,)?]) => {{
        let expected: Vec<(String, String, String, ontofind::MatchKind)> = vec![
            $({
                let hit: $crate::common::Hit = $hit;
                (hit.0.to_string(), hit.1.to_string(), hit.2.to_string(), hit.3)
            }),*
        ];
        let actual = $crate::common::hits(&$finder, $query);
        pretty_assertions::assert_eq!(actual, expected, "query {:?}", $query);
    }};
}

/// Assert that a query matches nothing.
#[macro_export]
macro_rules! assert_no_hits {
    ($finder:expr, $query:expr) => {{
        let actual = $crate::common::hits(&$finder, $query);
        if !actual.is_empty() {
            panic!(
                "assert_no_hits! failed for query {:?}:\n  unexpected hits: {:#?}",
                $query, actual
            );
        }
    }};
}
