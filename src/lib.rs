//! # kisho-scraper
//!
//! Scraper for the Kisho Michelin shogi book-review archive.
//!
//! The archive spans decades of hand-authored HTML with no stable
//! schema, so each record field (title, author, rating, strategy tags,
//! publication date) is recovered by an ordered chain of fallback
//! pattern-matching strategies over the parsed page. When no known
//! shape matches, a field is left empty rather than guessed.
//!
//! ## Quick Start
//!
//! ```rust
//! use kisho_scraper::{parse_review, ScrapeOptions};
//!
//! let html = r#"<table>
//!   <tr><td colspan="2"><strong>四間飛車を指しこなす本</strong></td></tr>
//!   <tr><td>著者</td><td>藤井猛</td></tr>
//! </table>"#;
//!
//! let record = parse_review(html, "https://example.com/1/1-1.htm", &ScrapeOptions::default());
//! assert_eq!(record.title, "四間飛車を指しこなす本");
//! assert_eq!(record.author, "藤井猛");
//! assert!(record.strategies.contains("四間飛車"));
//! ```
//!
//! A full run (index discovery, paced page retrieval, TSV output) goes
//! through [`ReviewScraper`] and [`output::save_to_tsv`]; the
//! `kisho-scrape` binary wires those together with default options.

mod error;
mod options;

/// Document tree adapter providing predicate search and text extraction.
pub mod dom;

/// Forced-label character decoding.
pub mod encoding;

/// Per-field extraction chains and record assembly.
pub mod extract;

/// Retrieval collaborator trait and blocking HTTP implementation.
pub mod fetch;

/// Review-link discovery on the index page.
pub mod links;

/// Tab-delimited serialization.
pub mod output;

/// Record and tag-set types.
pub mod record;

/// Sequential batch driver.
pub mod scraper;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{
    ScrapeOptions, DEFAULT_BASE_URL, DEFAULT_OUTPUT_FILE, DEFAULT_PAGE_ENCODING,
    DEFAULT_REQUEST_DELAY, DEFAULT_STRATEGIES,
};
pub use record::{Record, TagSet};
pub use scraper::ReviewScraper;

/// Extract one record from review-page HTML.
///
/// `source_url` must be the non-empty absolute URL the page came from;
/// it is stored on the record and embedded in the serialized title
/// cell.
#[must_use]
pub fn parse_review(html: &str, source_url: &str, options: &ScrapeOptions) -> Record {
    let doc = dom::parse(html);
    extract::extract_record(&doc, source_url, options)
}

/// Extract one record from raw review-page bytes.
///
/// The bytes are decoded with the encoding configured in `options`
/// (Shift_JIS for the live archive). If the configured label names no
/// known encoding, the bytes are read as lossy UTF-8 instead, keeping
/// extraction infallible.
#[must_use]
pub fn parse_review_bytes(html: &[u8], source_url: &str, options: &ScrapeOptions) -> Record {
    let html_str = encoding::decode_with_label(html, &options.page_encoding)
        .unwrap_or_else(|| String::from_utf8_lossy(html).into_owned());
    parse_review(&html_str, source_url, options)
}
