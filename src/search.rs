//! Search entry points: tokenize a query, rank the index, cap the results.

use crate::scoring::score;
use crate::types::{Document, SearchIndex};
use crate::utils::tokenize;

/// Queries shorter than this (trimmed) do not run a search at all.
///
/// Below the minimum the session is "inactive": results are cleared and the
/// empty indicator stays hidden. This is not the same as a search that ran
/// and found nothing.
pub const MIN_QUERY_LEN: usize = 2;

/// Upper bound on the number of results returned for any query.
pub const MAX_RESULTS: usize = 10;

/// Rank every document in the index against the given terms.
///
/// Documents scoring zero are dropped; the rest are sorted descending by
/// score with the original index order as the tie-break (the sort is
/// stable), then truncated to [`MAX_RESULTS`].
///
/// The whole index is rescored from scratch on every call. That is O(docs ×
/// terms × text length) per keystroke, which is fine for a per-page post
/// count; a corpus orders of magnitude larger would want a real inverted
/// index instead.
pub fn rank(index: &SearchIndex, terms: &[String]) -> Vec<Document> {
    let mut scored: Vec<(u32, &Document)> = index
        .docs
        .iter()
        .map(|doc| (score(doc, terms), doc))
        .filter(|(s, _)| *s > 0)
        .collect();

    // Stable sort: equal scores keep build-time document order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(MAX_RESULTS);

    scored.into_iter().map(|(_, doc)| doc.clone()).collect()
}

/// Run a full search for a raw query string.
///
/// Applies the minimum-length gate, tokenizes, and ranks. Returns the
/// derived terms alongside the results so callers can keep them in their
/// query state; an empty term list means the query was below the minimum
/// and no search ran.
pub fn search(index: &SearchIndex, raw_query: &str) -> (Vec<String>, Vec<Document>) {
    if raw_query.trim().chars().count() < MIN_QUERY_LEN {
        return (Vec::new(), Vec::new());
    }
    let terms = tokenize(raw_query);
    if terms.is_empty() {
        return (Vec::new(), Vec::new());
    }
    let results = rank(index, &terms);
    (terms, results)
}
