//! Field extraction engine.
//!
//! One module per record field, each an ordered chain of independent
//! matching strategies over the document tree. The source pages span
//! many years of hand-authored markup with no stable schema, so every
//! field is recognized by trying known shapes in priority order; the
//! first non-empty match wins and no value is ever guessed.

pub mod author;
pub mod date;
pub mod rating;
pub mod strategy;
pub mod title;

use crate::dom::Document;
use crate::record::Record;
use crate::ScrapeOptions;

pub use author::extract_author;
pub use date::extract_publication_date;
pub use rating::extract_rating;
pub use strategy::extract_strategies;
pub use title::extract_title;

/// One fallback strategy in a field's chain.
///
/// A strategy is a pure function: it either recognizes its markup
/// shape and produces a raw value, or it declines with `None` and the
/// chain moves on.
pub type FieldStrategy = fn(&Document) -> Option<String>;

/// Run a strategy chain, returning the first non-empty result.
///
/// Strategies are tried strictly in slice order; a strategy that
/// matches structurally but yields only whitespace does not stop the
/// chain.
pub(crate) fn first_non_empty(doc: &Document, strategies: &[FieldStrategy]) -> Option<String> {
    strategies.iter().find_map(|strategy| {
        strategy(doc)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

/// Assemble one record from a parsed review page.
///
/// The five extractors are independent of one another; any of them may
/// come back empty without affecting the rest. `source_url` must be
/// the non-empty absolute URL the page was retrieved from.
#[must_use]
pub fn extract_record(doc: &Document, source_url: &str, options: &ScrapeOptions) -> Record {
    Record {
        title: title::extract_title(doc),
        author: author::extract_author(doc),
        rating: rating::extract_rating(doc),
        strategies: strategy::extract_strategies(doc, &options.strategies),
        publication_date: date::extract_publication_date(doc),
        source_url: source_url.to_string(),
    }
}
