//! Page retrieval.
//!
//! The [`Fetch`] trait is the engine's only window onto the network:
//! raw bytes for the index page (charset sniffed downstream) and
//! forced-label decoded text for the review pages. The blocking
//! [`HttpFetcher`] is the production implementation; tests substitute
//! canned documents.

use crate::encoding;
use crate::error::{Error, Result};

/// Retrieval collaborator contract.
pub trait Fetch {
    /// Fetch a URL and return the raw response body.
    ///
    /// Fails with [`Error::Fetch`] on transport failure or a non-success
    /// HTTP status.
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;

    /// Fetch a URL and decode the body with the given WHATWG encoding
    /// label.
    fn fetch_text(&self, url: &str, encoding_label: &str) -> Result<String>;
}

/// Blocking HTTP implementation of [`Fetch`].
#[derive(Debug, Default)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default client configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fetch for HttpFetcher {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|source| Error::Fetch {
                url: url.to_string(),
                source,
            })?;

        let body = response.bytes().map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?;
        Ok(body.to_vec())
    }

    fn fetch_text(&self, url: &str, encoding_label: &str) -> Result<String> {
        let bytes = self.fetch_bytes(url)?;
        encoding::decode_with_label(&bytes, encoding_label)
            .ok_or_else(|| Error::Extraction(format!("unknown encoding label: {encoding_label}")))
    }
}
