//! Scrape the review archive and write the tab-delimited result file.
//!
//! Takes no arguments; endpoint, pacing, and output location are the
//! defaults in [`ScrapeOptions`]. `RUST_LOG` adjusts verbosity.

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use kisho_scraper::{output, Result, ReviewScraper, ScrapeOptions};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "scrape run failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let scraper = ReviewScraper::new(ScrapeOptions::default());

    let records = scraper.run()?;
    output::save_to_tsv(&records, &scraper.options().output_file)
}
