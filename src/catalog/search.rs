//! Search filter and query highlighting.
//!
//! The filter is a pure predicate: a document matches when the query is a
//! case-insensitive substring of its title or of any tag. Filtering never
//! reorders; callers see the catalog's own order.

use regex::RegexBuilder;

use crate::catalog::model::Document;

/// Whether `doc` matches `query`. The empty query matches everything.
pub fn matches(doc: &Document, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    doc.title.to_lowercase().contains(&q) || doc.tags.iter().any(|t| t.to_lowercase().contains(&q))
}

/// A contiguous slice of highlighted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub text: String,
    /// Whether this span is an occurrence of the query.
    pub matched: bool,
}

/// Split `text` into spans, marking every case-insensitive occurrence of
/// `query`. A blank query yields the whole text as a single unmatched span.
///
/// The query is treated literally (regex metacharacters are escaped).
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSpan> {
    let whole = || {
        vec![HighlightSpan {
            text: text.to_string(),
            matched: false,
        }]
    };

    if query.trim().is_empty() {
        return whole();
    }
    let Ok(re) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return whole();
    };

    let mut spans = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            spans.push(HighlightSpan {
                text: text[last..m.start()].to_string(),
                matched: false,
            });
        }
        spans.push(HighlightSpan {
            text: m.as_str().to_string(),
            matched: true,
        });
        last = m.end();
    }
    if last < text.len() || spans.is_empty() {
        spans.push(HighlightSpan {
            text: text[last..].to_string(),
            matched: false,
        });
    }
    spans
}
