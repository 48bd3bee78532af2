//! Review-link discovery on the index page.
//!
//! The archive's index lists every review as a relative link shaped
//! like `12/12-3.htm` (volume directory, then a digit/hyphen page
//! name). Anchors are scanned in document order and resolved against
//! the index URL; duplicates on the source page are kept as-is.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

use crate::dom::{Document, Selection};

/// Accepted review-page target shape.
#[allow(clippy::expect_used)]
static REVIEW_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+/[\d-]+\.htm$").expect("valid regex"));

/// Collect absolute review-page URLs from an index document.
///
/// Anchors whose target does not match the review shape are ignored;
/// targets that fail to resolve against `base` are skipped. Document
/// order is preserved and no de-duplication is performed.
#[must_use]
pub fn discover_links(doc: &Document, base: &Url) -> Vec<String> {
    let mut links = Vec::new();

    for node in doc.select("a[href]").nodes() {
        let anchor = Selection::from(*node);
        let Some(href) = anchor.attr("href") else {
            continue;
        };
        if !REVIEW_HREF.is_match(&href) {
            continue;
        }

        match base.join(&href) {
            Ok(resolved) => {
                debug!(url = %resolved, "matched review link");
                links.push(resolved.to_string());
            }
            Err(err) => {
                debug!(href = %href, error = %err, "skipping unresolvable link");
            }
        }
    }

    links
}
