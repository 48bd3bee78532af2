//! Overall-rating extraction.
//!
//! The grade (`S`, `A`..`E`) hides in three markup generations: a
//! labelled cell with the grade in a `<strong>` or trailing the label
//! text, a bracketed label cell with the grade in the next cell, and
//! an old table layout marked by a highlighted cell. The row-level
//! shape is tried last; its precedence against the bracketed-cell
//! shape is unobserved on the live corpus.

use regex::Regex;
use std::sync::LazyLock;

use super::FieldStrategy;
use crate::dom::{self, Document, Selection};

/// Grade letters following the label, tolerating one opening bracket
/// and punctuation between label and value.
#[allow(clippy::expect_used)]
static LABELLED_GRADE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[?総合評価[^\w]*([A-Z]+)").expect("valid regex"));

/// Grade letters after an optional colon, within the label cell itself.
#[allow(clippy::expect_used)]
static COLON_GRADE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"総合評価[：:]*\s*([A-Z]+)").expect("valid regex"));

/// Rating strategies, in priority order.
static RATING_STRATEGIES: &[FieldStrategy] =
    &[labelled_cell, bracketed_label_cell, highlighted_row];

/// Extract the overall rating code, or an empty string.
#[must_use]
pub fn extract_rating(doc: &Document) -> String {
    super::first_non_empty(doc, RATING_STRATEGIES).unwrap_or_default()
}

/// Stripped text of the first `<strong>` inside the selection.
fn first_strong_text(sel: &Selection) -> Option<String> {
    let strong_nodes = sel.select("strong");
    let node = strong_nodes.nodes().first()?;
    Some(dom::joined_text(&Selection::from(*node), ""))
}

/// Strategy 1: any cell whose text mentions the label.
///
/// The grade is either a `<strong>` child or trails the label in the
/// cell's own text.
fn labelled_cell(doc: &Document) -> Option<String> {
    let cell = dom::find_first_cell(doc, |c| dom::text_content(c).contains("総合評価"))?;

    if let Some(grade) = first_strong_text(&cell) {
        return Some(grade);
    }

    let text = dom::joined_text(&cell, "");
    let captures = LABELLED_GRADE.captures(&text)?;
    Some(captures.get(1)?.as_str().to_string())
}

/// Strategy 2: bracketed label cell, grade in the next cell or after a
/// colon in the same cell.
fn bracketed_label_cell(doc: &Document) -> Option<String> {
    let cell = dom::find_first_cell(doc, |c| dom::text_content(c).contains("[総合評価]"))?;

    if let Some(value_cell) = dom::next_sibling_of_same_kind(&cell) {
        return Some(dom::joined_text(&value_cell, ""));
    }

    let text = dom::joined_text(&cell, "");
    let captures = COLON_GRADE.captures(&text)?;
    Some(captures.get(1)?.as_str().to_string())
}

/// Strategy 3: row marked with a highlighted cell, grade in a
/// `<strong>` anywhere in the row.
fn highlighted_row(doc: &Document) -> Option<String> {
    for node in doc.select("tr").nodes() {
        let row = Selection::from(*node);
        let has_marker = row.select("td[bgcolor='#DFFFDF']").exists();
        if has_marker && dom::text_content(&row).contains("総合評価") {
            return first_strong_text(&row);
        }
    }
    None
}
