//! Document Tree Adapter
//!
//! Wraps the `dom_query` crate behind the handful of operations the
//! field extractors rely on: predicate-based cell search, same-kind
//! sibling navigation, and text extraction with whitespace
//! normalization. The underlying parser recovers from malformed and
//! unbalanced markup, so none of these operations can fail; absence is
//! always expressed as `None` or an empty string.

use regex::Regex;
use std::sync::LazyLock;

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Runs of Unicode whitespace, including the ideographic space the
/// review pages pad labels with.
#[allow(clippy::expect_used)]
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Parse HTML into a document.
///
/// Never raises; html5ever's recovery produces a tree for any input.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// First table cell in document order satisfying the predicate.
#[must_use]
pub fn find_first_cell<'a, P>(doc: &'a Document, pred: P) -> Option<Selection<'a>>
where
    P: Fn(&Selection<'a>) -> bool,
{
    for node in doc.select("td").nodes() {
        let cell = Selection::from(*node);
        if pred(&cell) {
            return Some(cell);
        }
    }
    None
}

/// All table cells in document order satisfying the predicate.
#[must_use]
pub fn find_all_cells<'a, P>(doc: &'a Document, pred: P) -> Vec<Selection<'a>>
where
    P: Fn(&Selection<'a>) -> bool,
{
    let mut cells = Vec::new();
    for node in doc.select("td").nodes() {
        let cell = Selection::from(*node);
        if pred(&cell) {
            cells.push(cell);
        }
    }
    cells
}

/// Next following sibling of the same element kind.
///
/// Used for label-cell → value-cell layouts; intervening siblings of
/// other kinds are skipped.
#[must_use]
pub fn next_sibling_of_same_kind<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    let node = sel.nodes().first()?;
    let kind = node.node_name()?;

    let mut sibling = node.next_element_sibling();
    while let Some(s) = sibling {
        if s.node_name().is_some_and(|name| name.eq_ignore_ascii_case(&kind)) {
            return Some(Selection::from(s));
        }
        sibling = s.next_element_sibling();
    }
    None
}

/// Descendant text fragments, each trimmed, empties dropped, joined
/// with `sep`.
///
/// A separator of `" "` reassembles titles split across inline
/// elements; `""` matches the raw reading of a simple value cell.
#[must_use]
pub fn joined_text(sel: &Selection, sep: &str) -> String {
    let Some(node) = sel.nodes().first() else {
        return String::new();
    };

    let mut parts: Vec<String> = Vec::new();
    for child in node.descendants() {
        if child.is_text() {
            let text = child.text();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        }
    }
    parts.join(sep)
}

/// Concatenated text of the node's immediate text children only.
///
/// Text inside nested elements is not included; this is the "direct
/// text" reading the strategy-tag primary pass matches against.
#[must_use]
pub fn direct_text(sel: &Selection) -> String {
    let Some(node) = sel.nodes().first() else {
        return String::new();
    };

    let mut out = String::new();
    for child in node.children() {
        if child.is_text() {
            out.push_str(&child.text());
        }
    }
    out
}

/// All visible text of the document, concatenated.
#[must_use]
pub fn page_text(doc: &Document) -> String {
    doc.select("html").text().to_string()
}

/// Get all text content of node and descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Check whether an attribute carries an exact value.
#[must_use]
pub fn attr_equals(sel: &Selection, name: &str, value: &str) -> bool {
    sel.attr(name).is_some_and(|v| &*v == value)
}

/// Collapse runs of whitespace to single spaces and trim the ends.
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s, " ").trim().to_string()
}
