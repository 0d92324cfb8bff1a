//! End-to-end scoring and matching behavior over a realistic index.

use crate::common::{blog_index, titles};
use lantern::{score, search, tokenize, WEIGHT_TAG, WEIGHT_TITLE};

#[test]
fn test_multi_field_query_finds_expected_posts() {
    let index = blog_index();
    let (_, results) = search(&index, "rust");

    // Title, tag, and content hits across four posts; the baking post
    // stays out.
    let found = titles(&results);
    assert!(found.contains(&"Rust Basics"));
    assert!(found.contains(&"Go Patterns"));
    assert!(found.contains(&"Smart Pointers"));
    assert!(!found.contains(&"Sourdough Starter"));
}

#[test]
fn test_title_plus_tag_outranks_tag_only() {
    // The documented two-post scenario: title+tag (15) beats tag-only (5).
    let index = crate::common::make_index(vec![
        crate::common::make_doc_tagged("Rust Basics", &["rust"]),
        crate::common::make_doc_tagged("Go Patterns", &["go", "rust"]),
    ]);
    let terms = tokenize("rust");
    assert_eq!(score(&index.docs[0], &terms), WEIGHT_TITLE + WEIGHT_TAG);
    assert_eq!(score(&index.docs[1], &terms), WEIGHT_TAG);

    let (_, results) = search(&index, "rust");
    assert_eq!(titles(&results), vec!["Rust Basics", "Go Patterns"]);
}

#[test]
fn test_substring_containment_matches_inside_words() {
    let index = blog_index();
    let (_, results) = search(&index, "art");

    // "art" is a substring of "Smart Pointers" and "Sourdough Starter".
    let found = titles(&results);
    assert!(found.contains(&"Smart Pointers"));
    assert!(found.contains(&"Sourdough Starter"));
}

#[test]
fn test_multi_term_query_accumulates_across_terms() {
    let index = blog_index();
    let (terms, results) = search(&index, "rust ownership");

    assert_eq!(terms, vec!["rust", "ownership"]);
    // "Rust Basics" matches both terms and must lead.
    assert_eq!(results[0].title, "Rust Basics");
}

#[test]
fn test_query_casing_is_irrelevant() {
    let index = blog_index();
    let (_, lower) = search(&index, "rust");
    let (_, mixed) = search(&index, "RuSt");
    assert_eq!(titles(&lower), titles(&mixed));
}
