//! Title extraction.
//!
//! Titles appear in three markup generations: a wide cell spanning the
//! header table with the series name and title as separate text nodes,
//! a bare `<strong>` on the oldest pages, and a highlighted header cell
//! on a handful of mid-era pages. Whichever shape matches, the raw text
//! then goes through the same cleanup.

use regex::Regex;
use std::sync::LazyLock;

use super::FieldStrategy;
use crate::dom::{self, Document, Selection};

/// Decorative list marker some header cells prefix the title with.
#[allow(clippy::expect_used)]
static LEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*■\s*").expect("valid regex"));

/// Title strategies, in priority order.
static TITLE_STRATEGIES: &[FieldStrategy] =
    &[wide_header_cell, first_strong, highlighted_header_cell];

/// Extract the cleaned book title, or an empty string.
#[must_use]
pub fn extract_title(doc: &Document) -> String {
    super::first_non_empty(doc, TITLE_STRATEGIES)
        .map(|raw| clean_title(&raw))
        .unwrap_or_default()
}

/// Strategy 1: `<td colspan="2">` containing a `<strong>`.
///
/// The series line and the title line are separate text nodes inside
/// the cell, so fragments are rejoined with single spaces.
fn wide_header_cell(doc: &Document) -> Option<String> {
    let cell = dom::find_first_cell(doc, |c| {
        dom::attr_equals(c, "colspan", "2") && c.select("strong").exists()
    })?;
    Some(dom::joined_text(&cell, " "))
}

/// Strategy 2: first `<strong>` anywhere in the document.
fn first_strong(doc: &Document) -> Option<String> {
    let strong_nodes = doc.select("strong");
    let node = strong_nodes.nodes().first()?;
    Some(dom::joined_text(&Selection::from(*node), " "))
}

/// Strategy 3: highlighted header cell containing a `<strong>`.
fn highlighted_header_cell(doc: &Document) -> Option<String> {
    let cell = dom::find_first_cell(doc, |c| {
        dom::attr_equals(c, "bgcolor", "#FFFFE6") && c.select("strong").exists()
    })?;
    Some(dom::joined_text(&cell, " "))
}

/// Normalize a raw title: strip one leading marker glyph, collapse
/// whitespace, drop embedded double quotes.
///
/// Idempotent; re-cleaning a cleaned title is a no-op.
#[must_use]
pub fn clean_title(raw: &str) -> String {
    let unmarked = LEADING_MARKER.replace(raw, "");
    dom::collapse_whitespace(&unmarked).replace('"', "")
}
