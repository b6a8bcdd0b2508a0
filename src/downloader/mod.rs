mod fetcher;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use url::Url;

use crate::Error;

pub use fetcher::{Body, Fetcher, Response, UReqFetcher};

#[cfg(test)]
pub use fetcher::MockFetcher;

const CHUNK_SIZE: usize = 64 * 1024;

/// Streams a remote file to a fixed local path.
pub struct Downloader<T: Fetcher> {
    fetcher: T,
    path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub source: Url,
    pub file: PathBuf,
    pub bytes: u64,
}

impl<T> Downloader<T>
where
    T: Fetcher,
{
    pub fn with_fetcher(path: impl Into<PathBuf>, fetcher: T) -> Self {
        Downloader {
            fetcher,
            path: path.into(),
        }
    }

    /// GETs `url` and copies the body into the output file, truncating it first.
    ///
    /// The body is copied in chunks and never held in memory whole. A read that
    /// fails partway is a [`Error::Network`], a failed write an [`Error::Io`]. On
    /// error the file may be left empty or truncated; it is not cleaned up.
    pub fn download(&self, url: &Url) -> Result<Download, Error> {
        tracing::info!(url = %url, path = %self.path.display(), "downloading image");

        let mut body = self.fetcher.fetch(url.as_str()).into_body(url.as_str())?;

        let file = File::create(&self.path).map_err(|source| self.io_error(source))?;
        let mut writer = BufWriter::new(file);

        let mut chunk = vec![0u8; CHUNK_SIZE];
        let mut bytes = 0u64;

        loop {
            let n = match body.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(Error::Network {
                        url: url.to_string(),
                        message: format!("response body interrupted after {} bytes: {}", bytes, e),
                    })
                }
            };

            writer
                .write_all(&chunk[..n])
                .map_err(|source| self.io_error(source))?;
            bytes += n as u64;
        }

        writer.flush().map_err(|source| self.io_error(source))?;

        tracing::info!(bytes, path = %self.path.display(), "image saved");

        Ok(Download {
            source: url.clone(),
            file: self.path.clone(),
            bytes,
        })
    }

    fn io_error(&self, source: io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }
}
