//! Utility functions for query string processing.

/// Normalize a string for matching: lowercase only.
///
/// Matching is deliberately case-insensitive substring containment and
/// nothing more. A term like "art" matches "Smart" - that approximation is
/// part of the ranking contract for small per-page corpora, so don't add
/// word-boundary or diacritic handling here without changing the scorer too.
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Split a raw query into search terms.
///
/// Terms are lowercased and whitespace-delimited; empty terms are dropped,
/// so any run of whitespace acts as a single separator.
pub fn tokenize(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
