//! Configuration for a scrape run.
//!
//! `ScrapeOptions` carries everything the engine needs at construction
//! time: the index endpoint, the pacing delay, the page encoding, and
//! the strategy vocabulary. The vocabulary is an explicit input rather
//! than a hidden constant, so the extraction engine can be exercised
//! against alternate term lists.

use std::path::PathBuf;
use std::time::Duration;

/// Index page of the review archive.
pub const DEFAULT_BASE_URL: &str =
    "https://rocky-and-hopper.sakura.ne.jp/Kisho-Michelin/serial-number.htm";

/// Output file written next to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "kisho_reviews.tsv";

/// WHATWG label for the encoding the review pages are authored in.
pub const DEFAULT_PAGE_ENCODING: &str = "shift_jis";

/// Delay before each page retrieval.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(1200);

/// The closed strategy vocabulary, in match-priority order.
pub const DEFAULT_STRATEGIES: &[&str] = &[
    "居飛車",
    "振り飛車",
    "四間飛車",
    "三間飛車",
    "中飛車",
    "角換わり",
    "横歩取り",
];

/// Configuration options for a scrape run.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the live archive settings.
///
/// # Example
///
/// ```rust
/// use kisho_scraper::ScrapeOptions;
/// use std::time::Duration;
///
/// // Use defaults
/// let options = ScrapeOptions::default();
///
/// // Customize specific fields
/// let options = ScrapeOptions {
///     delay: Duration::ZERO,
///     ..ScrapeOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// URL of the index page the run starts from.
    ///
    /// Default: [`DEFAULT_BASE_URL`]
    pub base_url: String,

    /// Path the tab-delimited result file is written to.
    ///
    /// Default: [`DEFAULT_OUTPUT_FILE`]
    pub output_file: PathBuf,

    /// Delay slept before each review-page retrieval.
    ///
    /// Default: [`DEFAULT_REQUEST_DELAY`]
    pub delay: Duration,

    /// WHATWG encoding label the review pages are decoded with.
    ///
    /// Default: [`DEFAULT_PAGE_ENCODING`]
    pub page_encoding: String,

    /// Strategy vocabulary, tried in order. Only terms from this list
    /// are ever emitted as strategy tags.
    ///
    /// Default: [`DEFAULT_STRATEGIES`]
    pub strategies: Vec<String>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            delay: DEFAULT_REQUEST_DELAY,
            page_encoding: DEFAULT_PAGE_ENCODING.to_string(),
            strategies: DEFAULT_STRATEGIES.iter().map(ToString::to_string).collect(),
        }
    }
}
