//! Strategy-tag extraction.
//!
//! Tags come from a closed vocabulary passed in by the caller; no
//! other string is ever emitted. The primary pass matches each term
//! against the direct text of table cells, where the archive's data
//! tables put them. Pages without such cells fall back to a substring
//! scan of the whole page text, which catches terms mentioned only in
//! the review body.

use crate::dom::{self, Document};
use crate::record::TagSet;

/// Collect the distinct vocabulary terms present on the page.
///
/// Terms are checked in vocabulary order, so the resulting set's
/// iteration order is deterministic. The full-text fallback runs only
/// when the cell pass finds nothing at all.
#[must_use]
pub fn extract_strategies(doc: &Document, vocabulary: &[String]) -> TagSet {
    let mut tags = TagSet::new();

    for term in vocabulary {
        let in_cell =
            dom::find_first_cell(doc, |c| dom::direct_text(c).contains(term.as_str())).is_some();
        if in_cell {
            tags.insert(term.clone());
        }
    }

    if tags.is_empty() {
        let text = dom::page_text(doc);
        for term in vocabulary {
            if text.contains(term.as_str()) {
                tags.insert(term.clone());
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vec<String> {
        crate::options::DEFAULT_STRATEGIES
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn tags_of(html: &str) -> Vec<String> {
        let doc = dom::parse(html);
        extract_strategies(&doc, &vocabulary())
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_cell_pass_matches_direct_text() {
        let html = r#"
            <table>
                <tr><td>戦法</td><td>居飛車</td></tr>
            </table>
        "#;
        assert_eq!(tags_of(html), vec!["居飛車"]);
    }

    #[test]
    fn test_cell_pass_collects_multiple_terms_in_vocabulary_order() {
        let html = r#"
            <table>
                <tr><td>中飛車</td></tr>
                <tr><td>四間飛車</td></tr>
            </table>
        "#;
        // 四間飛車 precedes 中飛車 in the vocabulary, not on the page.
        assert_eq!(tags_of(html), vec!["四間飛車", "中飛車"]);
    }

    #[test]
    fn test_fallback_scans_whole_page_text() {
        let html = "<body><p>本書は横歩取りの定跡書である。</p></body>";
        assert_eq!(tags_of(html), vec!["横歩取り"]);
    }

    #[test]
    fn test_fallback_not_used_when_cell_pass_matches() {
        // 角換わり appears only in body prose; with a cell match
        // present, the fallback never runs and the prose term is not
        // collected.
        let html = r#"
            <body>
                <table><tr><td>三間飛車</td></tr></table>
                <p>角換わりにも少し触れる。</p>
            </body>
        "#;
        assert_eq!(tags_of(html), vec!["三間飛車"]);
    }

    #[test]
    fn test_term_inside_nested_element_needs_fallback() {
        // The cell's direct text is empty, so the term is only found
        // by the full-text scan.
        let html = "<table><tr><td><em>振り飛車</em></td></tr></table>";
        assert_eq!(tags_of(html), vec!["振り飛車"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let html = r#"
            <table>
                <tr><td>居飛車</td></tr>
                <tr><td>居飛車</td></tr>
            </table>
        "#;
        assert_eq!(tags_of(html), vec!["居飛車"]);
    }

    #[test]
    fn test_terms_outside_vocabulary_are_never_emitted() {
        let doc = dom::parse("<table><tr><td>矢倉</td><td>居飛車</td></tr></table>");
        let tags = extract_strategies(&doc, &vocabulary());

        assert!(!tags.contains("矢倉"));
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["居飛車"]);
    }

    #[test]
    fn test_alternate_vocabulary() {
        let doc = dom::parse("<table><tr><td>矢倉</td><td>居飛車</td></tr></table>");
        let vocab = vec!["矢倉".to_string()];
        let tags = extract_strategies(&doc, &vocab);

        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["矢倉"]);
    }

    #[test]
    fn test_no_terms_anywhere_yields_empty_set() {
        assert!(tags_of("<body><p>詰将棋の本</p></body>").is_empty());
    }
}
