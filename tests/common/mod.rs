//! Shared test utilities and fixtures.

#![allow(dead_code)]

use lantern::{Document, SearchIndex};

// Re-export canonical test fixtures from lantern::testing
pub use lantern::testing::{make_doc, make_doc_full, make_doc_tagged, make_index};

/// A small but realistic blog index: mixed tags, categories, and dates.
pub fn blog_index() -> SearchIndex {
    make_index(vec![
        make_doc_full(
            "Rust Basics",
            "Getting started with ownership and borrowing",
            "Rust's ownership model makes memory safety a compile-time property.",
            &["rust", "beginners"],
            &["engineering"],
        ),
        make_doc_full(
            "Go Patterns",
            "Concurrency patterns that actually ship",
            "Channels and goroutines compared with rust async tasks.",
            &["go", "rust"],
            &["engineering"],
        ),
        make_doc_full(
            "Hiking the Dolomites",
            "A week above the tree line",
            "Trail notes, hut bookings, and far too many photos.",
            &["travel", "hiking"],
            &["adventures"],
        ),
        make_doc_full(
            "Smart Pointers",
            "Box, Rc, and friends",
            "When a plain reference is not enough.",
            &["rust"],
            &["engineering"],
        ),
        make_doc_full(
            "Sourdough Starter",
            "Feeding schedules for a lazy baker",
            "Flour, water, patience.",
            &["baking"],
            &["kitchen"],
        ),
    ])
}

/// The same index as its build-time JSON payload.
pub fn blog_index_json() -> String {
    serde_json::to_string(&blog_index()).expect("fixture index serializes")
}

/// Shorthand for the titles of a result list.
pub fn titles(results: &[Document]) -> Vec<&str> {
    results.iter().map(|d| d.title.as_str()).collect()
}
