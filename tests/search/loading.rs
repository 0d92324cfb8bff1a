//! Index loading from files and the disabled-session failure path.

use std::io::Write;

use crate::common::blog_index_json;
use lantern::{SearchIndex, SearchSession};
use tempfile::NamedTempFile;

#[test]
fn test_round_trip_through_index_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(blog_index_json().as_bytes()).expect("write index");

    let index = SearchIndex::from_path(file.path()).expect("load index");
    assert_eq!(index.len(), 5);
    assert_eq!(index.docs[0].title, "Rust Basics");
    assert_eq!(index.docs[0].categories, vec!["engineering"]);
}

#[test]
fn test_truncated_payload_fails_to_load() {
    let payload = blog_index_json();
    let truncated = &payload[..payload.len() / 2];

    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(truncated.as_bytes()).expect("write index");

    assert!(SearchIndex::from_path(file.path()).is_err());
}

#[test]
fn test_malformed_payload_disables_search_silently() {
    let mut session = SearchSession::from_json("[{\"title\": 42}]");
    assert!(!session.is_enabled());

    // The trigger still works; queries just never produce anything.
    session.open();
    assert!(session.is_open());
    session.set_query("rust");
    assert!(session.state().results.is_empty());
    assert!(!session.state().is_active());
}

#[test]
fn test_valid_payload_enables_search() {
    let session = SearchSession::from_json(&blog_index_json());
    assert!(session.is_enabled());
}
