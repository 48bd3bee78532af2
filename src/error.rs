//! Error types for kisho-scraper.
//!
//! This module defines the error taxonomy for a scrape run: retrieval,
//! extraction, and output failures.

/// Error type for scraping operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fetching a document over the network failed.
    #[error("request for {url} failed: {source}")]
    Fetch {
        /// The URL that was being fetched.
        url: String,
        /// The underlying transport or HTTP-status error.
        source: reqwest::Error,
    },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL {url}: {source}")]
    InvalidUrl {
        /// The offending URL string.
        url: String,
        /// The underlying parse error.
        source: url::ParseError,
    },

    /// Preparing or running extraction failed unexpectedly.
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// Writing the result file failed.
    #[error("writing output failed: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, Error>;
