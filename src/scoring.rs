//! Scoring: how a document earns relevance weight for a query.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## WEIGHT TABLE
//! Per term, a document accumulates every applicable weight:
//!
//! ```text
//! title substring        +10
//! exact title equality   +5   (additional: a one-word title equal to the
//!                              term contributes 15 from the title alone)
//! tag substring          +5
//! category substring     +5
//! excerpt substring      +3
//! content substring      +1
//! ```
//!
//! Total document score = sum over all terms. The table is ordered so that
//! a single title hit always outweighs any combination of excerpt and
//! content hits for the same term.
//!
//! ## MATCHING SEMANTICS
//! Case-insensitive substring containment, not token-boundary aware. A term
//! can hit several fields at once and every hit counts. Changing this to
//! whole-word matching changes ranking for existing sites; don't.

use crate::types::Document;
use crate::utils::normalize;

/// Weight for a term appearing anywhere in the title.
pub const WEIGHT_TITLE: u32 = 10;
/// Additional weight when the term equals the whole title.
pub const WEIGHT_TITLE_EXACT: u32 = 5;
/// Weight for a term appearing in any tag.
pub const WEIGHT_TAG: u32 = 5;
/// Weight for a term appearing in any category.
pub const WEIGHT_CATEGORY: u32 = 5;
/// Weight for a term appearing in the excerpt.
pub const WEIGHT_EXCERPT: u32 = 3;
/// Weight for a term appearing in the body content.
pub const WEIGHT_CONTENT: u32 = 1;

/// Score a single document against a list of query terms.
///
/// Returns the accumulated weight; `0` means "no match" and callers drop
/// the document from the results entirely.
pub fn score(doc: &Document, terms: &[String]) -> u32 {
    let title = normalize(&doc.title);
    let excerpt = normalize(&doc.excerpt);
    let content = normalize(&doc.content);
    let tags = normalize(&doc.tags.join(" "));
    let categories = normalize(&doc.categories.join(" "));

    let mut total = 0u32;
    for term in terms {
        if title.contains(term.as_str()) {
            total += WEIGHT_TITLE;
        }
        if title == *term {
            total += WEIGHT_TITLE_EXACT;
        }
        if tags.contains(term.as_str()) {
            total += WEIGHT_TAG;
        }
        if categories.contains(term.as_str()) {
            total += WEIGHT_CATEGORY;
        }
        if excerpt.contains(term.as_str()) {
            total += WEIGHT_EXCERPT;
        }
        if content.contains(term.as_str()) {
            total += WEIGHT_CONTENT;
        }
    }
    total
}
