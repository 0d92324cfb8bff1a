//! The building blocks of a search session.
//!
//! These types define how indexed documents and per-session query state fit
//! together. Documents are produced once at build time by the static-site
//! generator and are read-only for the lifetime of a page view; `QueryState`
//! is the single mutable object, owned by the session and touched only by
//! the input and navigation handlers.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **QueryState**: `selected` is `None` or a valid index into `results`.
//!   Every selection transition must re-establish this before returning.
//! - **QueryState**: `results.len() <= MAX_RESULTS` (enforced by `rank`).
//! - **SearchIndex**: document order is the build-time order; ranking uses
//!   it as the stable tie-break, so it must never be shuffled after load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One indexed post record, as emitted by the site generator.
///
/// Everything here is match material or result metadata. We keep the record
/// flat because it is serialized into the page at build time and parsed once
/// per page view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub url: String,
    /// Publication time, epoch seconds in the serialized form.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,
}

/// The complete searchable index: an ordered sequence of documents.
///
/// Loaded once per page view, never mutated. There is no derived index
/// structure on purpose: every query rescans the documents, which is the
/// right trade for per-page post counts (see `rank` for the scaling note).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    pub docs: Vec<Document>,
}

impl SearchIndex {
    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// True when the index holds no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// Per-session query state, mutated on every keystroke and navigation action.
///
/// `selected` replaces the classic `-1` sentinel with `Option<usize>`, so the
/// "nothing selected" case cannot be confused with a valid index.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    /// The query exactly as typed (used verbatim for highlighting).
    pub raw_query: String,
    /// Lowercased, whitespace-split terms derived from `raw_query`.
    pub terms: Vec<String>,
    /// Ranked matches, best first, at most `MAX_RESULTS` entries.
    pub results: Vec<Document>,
    /// Current keyboard selection into `results`.
    pub selected: Option<usize>,
}

impl QueryState {
    /// Reset to the pristine state (modal closed, nothing searched).
    pub fn clear(&mut self) {
        self.raw_query.clear();
        self.terms.clear();
        self.results.clear();
        self.selected = None;
    }

    /// True when a search has actually run for the current query.
    ///
    /// Distinguishes "not searched" (query below the minimum length) from
    /// "searched, zero hits" - the empty indicator only shows for the latter.
    pub fn is_active(&self) -> bool {
        !self.terms.is_empty()
    }
}
