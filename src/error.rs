use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop the fetch → resolve → download pipeline.
///
/// Nothing is retried: the first error ends the run.
#[derive(Debug, Error)]
pub enum Error {
    /// DNS, TCP or TLS failure reaching an endpoint, or the body stream breaking
    /// partway through.
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The endpoint answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The metadata body is not a JSON array of image records.
    #[error("metadata response is not a valid image list")]
    Metadata(#[source] serde_json::Error),

    /// A record's `date` does not match `YYYY-MM-DD HH:MM:SS`.
    #[error("invalid capture date {date:?}")]
    Date {
        date: String,
        #[source]
        source: DateError,
    },

    /// The metadata array has no records, so there is no latest image.
    #[error("metadata list is empty")]
    EmptyMetadata,

    #[error("invalid archive url")]
    Url(#[from] url::ParseError),

    /// Creating or writing the output file failed.
    #[error("failed to write image to {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a capture date was rejected.
#[derive(Debug, Error)]
pub enum DateError {
    #[error("expected `YYYY-MM-DD HH:MM:SS` with a single space before the time")]
    Layout,

    #[error(transparent)]
    Parse(#[from] chrono::ParseError),
}
