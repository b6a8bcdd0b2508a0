use std::io::BufReader;

use serde::Deserialize;

use crate::downloader::Fetcher;
use crate::Error;

/// One entry of the EPIC metadata array. Fields other than these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRecord {
    /// Capture time, `YYYY-MM-DD HH:MM:SS`.
    pub date: String,
    /// Filename stem in the archive.
    pub image: String,
}

impl ImageRecord {
    pub fn new(date: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            image: image.into(),
        }
    }
}

/// GETs `url` and decodes the body as an array of [`ImageRecord`], in the
/// order the API returned them.
pub fn fetch_metadata<F>(fetcher: &F, url: &str) -> Result<Vec<ImageRecord>, Error>
where
    F: Fetcher + ?Sized,
{
    tracing::info!(url, "fetching image metadata");

    let body = fetcher.fetch(url).into_body(url)?;

    let records: Vec<ImageRecord> =
        serde_json::from_reader(BufReader::new(body)).map_err(Error::Metadata)?;

    tracing::debug!(count = records.len(), "metadata records received");

    Ok(records)
}
