//! Author extraction.
//!
//! Creator credits appear either as a label/value cell pair
//! (`<td>著者</td><td>誰か</td>`) or as a bracketed inline label inside
//! a single cell (`【編】　毎日新聞社`). Role labels are tried in a
//! fixed priority order; the first role that yields a value through
//! either shape decides the field, so an author credit always beats a
//! supervising-editor credit further down the page.

use regex::Regex;
use std::sync::LazyLock;

use crate::dom::{self, Document};

/// Creator role labels, in priority order. Full-width spacing variants
/// are distinct labels on the source pages.
pub(crate) const ROLE_LABELS: &[&str] = &["著者", "編", "編　者", "著　者", "監　修", "著"];

/// Per-role pattern capturing the value after a bracketed inline
/// label, allowing an optional colon/comma run before it.
#[allow(clippy::expect_used)]
static BRACKETED_VALUES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ROLE_LABELS
        .iter()
        .map(|label| Regex::new(&format!("【{label}】[：:、\\s]*(.*)")).expect("valid regex"))
        .collect()
});

/// Extract the first-priority creator credit, or an empty string.
#[must_use]
pub fn extract_author(doc: &Document) -> String {
    for (label, pattern) in ROLE_LABELS.iter().zip(BRACKETED_VALUES.iter()) {
        if let Some(value) = label_value_pair(doc, label) {
            return value;
        }
        if let Some(value) = bracketed_inline(doc, label, pattern) {
            return value;
        }
    }
    String::new()
}

/// Sub-strategy A: label cell followed by a value cell.
fn label_value_pair(doc: &Document, label: &str) -> Option<String> {
    let label_cell = dom::find_first_cell(doc, |c| dom::direct_text(c).contains(label))?;
    let value_cell = dom::next_sibling_of_same_kind(&label_cell)?;

    let value = dom::joined_text(&value_cell, "").trim().to_string();
    (!value.is_empty()).then_some(value)
}

/// Sub-strategy B: bracketed label and value inside one cell.
fn bracketed_inline(doc: &Document, label: &str, pattern: &Regex) -> Option<String> {
    let bracketed = format!("【{label}】");
    let cell = dom::find_first_cell(doc, |c| dom::joined_text(c, "").contains(&bracketed))?;

    let text = dom::joined_text(&cell, "");
    let captures = pattern.captures(&text)?;
    let value = dom::collapse_whitespace(captures.get(1)?.as_str());
    (!value.is_empty()).then_some(value)
}
