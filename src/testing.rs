//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test fixtures to avoid duplication.

#![doc(hidden)]

use chrono::{DateTime, Utc};

use crate::types::{Document, SearchIndex};

/// Fixed publication date for fixtures: 2023-11-14 22:13:20 UTC.
fn fixture_date() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default()
}

/// Create a simple test document with a slugged URL and default fields.
pub fn make_doc(title: &str) -> Document {
    let slug = title.to_lowercase().replace(' ', "-");
    Document {
        title: title.to_string(),
        excerpt: String::new(),
        content: String::new(),
        tags: vec![],
        categories: vec![],
        url: format!("/posts/{}/", slug),
        date: fixture_date(),
    }
}

/// Create a test document with tags.
pub fn make_doc_tagged(title: &str, tags: &[&str]) -> Document {
    Document {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..make_doc(title)
    }
}

/// Create a test document with every match field populated.
pub fn make_doc_full(
    title: &str,
    excerpt: &str,
    content: &str,
    tags: &[&str],
    categories: &[&str],
) -> Document {
    Document {
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        ..make_doc(title)
    }
}

/// Wrap documents in an index, preserving order.
pub fn make_index(docs: Vec<Document>) -> SearchIndex {
    SearchIndex { docs }
}
