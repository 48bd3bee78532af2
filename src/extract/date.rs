//! Publication date extraction.
//!
//! Newer pages carry a `発行年月` label cell with the date in the next
//! cell; older pages inline it as `発行：2003年7月` somewhere in the
//! colophon cell. The value stays free-form text; formats drift too
//! much across the corpus to parse into a date type.

use regex::Regex;
use std::sync::LazyLock;

use super::FieldStrategy;
use crate::dom::{self, Document};

/// Value following the inline `発行：` label.
#[allow(clippy::expect_used)]
static PUBLISHED_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"発行：(.+)").expect("valid regex"));

/// Date strategies, in priority order.
static DATE_STRATEGIES: &[FieldStrategy] = &[label_value_date, inline_published_date];

/// Extract the publication date text, or an empty string.
#[must_use]
pub fn extract_publication_date(doc: &Document) -> String {
    super::first_non_empty(doc, DATE_STRATEGIES).unwrap_or_default()
}

/// Strategy 1: `発行年月` label cell, value in the next cell.
fn label_value_date(doc: &Document) -> Option<String> {
    let label_cell = dom::find_first_cell(doc, |c| dom::direct_text(c).trim() == "発行年月")?;
    let value_cell = dom::next_sibling_of_same_kind(&label_cell)?;
    Some(dom::joined_text(&value_cell, ""))
}

/// Strategy 2: inline `発行：` label inside a colophon cell.
fn inline_published_date(doc: &Document) -> Option<String> {
    let cell = dom::find_first_cell(doc, |c| dom::joined_text(c, "").contains("発行："))?;

    let text = dom::collapse_whitespace(&dom::joined_text(&cell, ""));
    let captures = PUBLISHED_VALUE.captures(&text)?;
    Some(captures.get(1)?.as_str().trim().to_string())
}
