//! Batch driver.
//!
//! A run is strictly sequential: the index page is fetched and its
//! review links discovered up front, then each page is retrieved and
//! extracted one at a time in discovery order, with a pacing delay
//! before every retrieval. A failing page is logged and skipped; a
//! failing index aborts the run before any page is touched.

use std::thread;

use tracing::{info, warn};
use url::Url;

use crate::dom;
use crate::encoding;
use crate::error::{Error, Result};
use crate::extract;
use crate::fetch::{Fetch, HttpFetcher};
use crate::links;
use crate::options::ScrapeOptions;
use crate::record::Record;

/// Scraper for the review archive.
///
/// Generic over the retrieval collaborator so the batch logic can be
/// exercised against canned documents.
#[derive(Debug)]
pub struct ReviewScraper<F = HttpFetcher> {
    options: ScrapeOptions,
    fetcher: F,
}

impl ReviewScraper<HttpFetcher> {
    /// Create a scraper backed by the blocking HTTP fetcher.
    #[must_use]
    pub fn new(options: ScrapeOptions) -> Self {
        Self::with_fetcher(options, HttpFetcher::new())
    }
}

impl<F: Fetch> ReviewScraper<F> {
    /// Create a scraper with a custom retrieval collaborator.
    pub fn with_fetcher(options: ScrapeOptions, fetcher: F) -> Self {
        Self { options, fetcher }
    }

    /// The configuration this scraper was built with.
    #[must_use]
    pub fn options(&self) -> &ScrapeOptions {
        &self.options
    }

    /// Fetch the index page and collect the review links.
    ///
    /// The index lives on the same Shift_JIS site as the reviews, so
    /// its bytes are decoded with the configured page encoding. Any
    /// failure here is fatal: no links means no work.
    pub fn discover_links(&self) -> Result<Vec<String>> {
        let base = Url::parse(&self.options.base_url).map_err(|source| Error::InvalidUrl {
            url: self.options.base_url.clone(),
            source,
        })?;

        let bytes = self.fetcher.fetch_bytes(&self.options.base_url)?;
        let html = encoding::decode_with_label(&bytes, &self.options.page_encoding)
            .ok_or_else(|| {
                Error::Extraction(format!(
                    "unknown encoding label: {}",
                    self.options.page_encoding
                ))
            })?;
        let doc = dom::parse(&html);

        let links = links::discover_links(&doc, &base);
        info!(count = links.len(), "extracted review links");
        Ok(links)
    }

    /// Retrieve one review page and assemble its record.
    pub fn scrape_page(&self, url: &str) -> Result<Record> {
        let html = self.fetcher.fetch_text(url, &self.options.page_encoding)?;
        let doc = dom::parse(&html);

        let record = extract::extract_record(&doc, url, &self.options);
        info!(%url, "parsed review page");
        Ok(record)
    }

    /// Run the whole batch: discover links, then process each page in
    /// order, skipping pages that fail.
    pub fn run(&self) -> Result<Vec<Record>> {
        let links = self.discover_links()?;

        let mut records = Vec::new();
        for url in &links {
            thread::sleep(self.options.delay);

            match self.scrape_page(url) {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(%url, error = %err, "skipping review page");
                }
            }
        }

        Ok(records)
    }
}
