//! Downloads the most recent natural-color Earth image published by NASA's
//! EPIC camera.
//!
//! The pipeline is linear and runs once: fetch the metadata array, resolve the
//! archive URL of its last record, then stream that PNG to disk.

mod archive;
pub mod config;
mod downloader;
mod error;
pub mod logging;
mod metadata;

use url::Url;

pub use archive::{archive_url, latest_archive_url};
pub use config::EpicConfig;
pub use downloader::{Body, Download, Downloader, Fetcher, Response, UReqFetcher};
pub use error::{DateError, Error};
pub use metadata::{fetch_metadata, ImageRecord};

/// Runs the whole pipeline over HTTP with the configured timeout.
pub fn run(config: &EpicConfig) -> Result<Download, Error> {
    let fetcher = UReqFetcher::new(config.timeout);

    run_with_fetcher(config, &fetcher)
}

/// Fetch → resolve → download, stopping at the first error.
pub fn run_with_fetcher<F>(config: &EpicConfig, fetcher: &F) -> Result<Download, Error>
where
    F: Fetcher,
{
    let base = Url::parse(&config.archive_base)?;

    let records = fetch_metadata(fetcher, &config.metadata_url)?;
    let url = latest_archive_url(&base, &records)?;

    Downloader::with_fetcher(&config.output_path, fetcher).download(&url)
}
