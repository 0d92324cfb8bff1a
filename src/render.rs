//! Result presentation: turning query state into the overlay's HTML fragment.
//!
//! Rendering is whole-fragment replacement: every call produces the full
//! markup for the current state and the shell swaps it in. There is no
//! diffing and no retained nodes, which keeps the surface trivially in sync
//! with the single source of truth in [`QueryState`].
//!
//! Highlighting wraps every case-insensitive occurrence of the literal raw
//! query (not the individual terms) in `<mark>`, matching what a single
//! global case-insensitive replace does.

use crate::types::{Document, QueryState};

/// How many tags a result row shows at most.
const MAX_TAGS_SHOWN: usize = 3;

/// A fully rendered view of the current query state.
///
/// `html` replaces the previous fragment wholesale. `empty_visible` drives
/// the "no results" indicator; it is mutually exclusive with a non-empty
/// result list and stays false while the query is below the minimum length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub html: String,
    pub empty_visible: bool,
}

/// Escape text for safe interpolation into the fragment.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Find every case-insensitive occurrence of `query` in `text`.
///
/// Returns non-overlapping byte ranges into the original `text`, left to
/// right. Lowercasing can change byte lengths (ß → ss), so matching runs on
/// a lowercased shadow string with a byte-offset map back to the original.
fn find_case_insensitive(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut shadow = String::with_capacity(text.len());
    // For each shadow byte: the original char's start and end offsets.
    let mut starts = Vec::with_capacity(text.len());
    let mut ends = Vec::with_capacity(text.len());
    for (offset, c) in text.char_indices() {
        let char_end = offset + c.len_utf8();
        for lc in c.to_lowercase() {
            for _ in 0..lc.len_utf8() {
                starts.push(offset);
                ends.push(char_end);
            }
            shadow.push(lc);
        }
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = shadow[from..].find(&needle) {
        let begin = from + pos;
        let end = begin + needle.len();
        ranges.push((starts[begin], ends[end - 1]));
        from = end;
    }
    ranges
}

/// Escape `text` and wrap every occurrence of the raw query in `<mark>`.
pub fn highlight(text: &str, raw_query: &str) -> String {
    let query = raw_query.trim();
    if query.is_empty() {
        return escape_html(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, end) in find_case_insensitive(text, query) {
        // Lowercase expansion (ß → "ss") can map two shadow matches onto the
        // same original char; keep the first and skip the overlap.
        if start < cursor {
            continue;
        }
        out.push_str(&escape_html(&text[cursor..start]));
        out.push_str("<mark>");
        out.push_str(&escape_html(&text[start..end]));
        out.push_str("</mark>");
        cursor = end;
    }
    out.push_str(&escape_html(&text[cursor..]));
    out
}

/// Render one result row.
///
/// The selected row carries the exclusive `selected` class and
/// `aria-selected="true"`; every other row gets an explicit
/// `aria-selected="false"` so stale selection markers cannot linger.
fn render_result(doc: &Document, raw_query: &str, selected: bool) -> String {
    let class = if selected {
        "search-result selected"
    } else {
        "search-result"
    };
    let mut row = format!(
        "<li class=\"{class}\" role=\"option\" aria-selected=\"{selected}\">\
         <a href=\"{url}\">\
         <h3 class=\"search-result-title\">{title}</h3>\
         <p class=\"search-result-excerpt\">{excerpt}</p>",
        class = class,
        selected = selected,
        url = escape_html(&doc.url),
        title = highlight(&doc.title, raw_query),
        excerpt = highlight(&doc.excerpt, raw_query),
    );

    row.push_str("<div class=\"search-result-meta\">");
    row.push_str(&format!(
        "<time>{}</time>",
        doc.date.format("%b %-d, %Y")
    ));
    if let Some(category) = doc.categories.first() {
        row.push_str(&format!(
            "<span class=\"search-result-category\">{}</span>",
            escape_html(category)
        ));
    }
    for tag in doc.tags.iter().take(MAX_TAGS_SHOWN) {
        row.push_str(&format!(
            "<span class=\"search-result-tag\">#{}</span>",
            escape_html(tag)
        ));
    }
    row.push_str("</div></a></li>");
    row
}

/// Render the whole surface for the current query state.
///
/// After swapping the fragment in, the shell scrolls the `.selected`
/// element into view; the markup carries everything else.
pub fn render(state: &QueryState) -> Fragment {
    if !state.is_active() {
        // Below the minimum query length: nothing searched, nothing shown.
        return Fragment {
            html: String::new(),
            empty_visible: false,
        };
    }

    if state.results.is_empty() {
        return Fragment {
            html: "<div class=\"search-empty\">No results found</div>".to_string(),
            empty_visible: true,
        };
    }

    let mut html = String::from("<ul class=\"search-results\" role=\"listbox\">");
    for (i, doc) in state.results.iter().enumerate() {
        html.push_str(&render_result(doc, &state.raw_query, state.selected == Some(i)));
    }
    html.push_str("</ul>");
    Fragment {
        html,
        empty_visible: false,
    }
}
