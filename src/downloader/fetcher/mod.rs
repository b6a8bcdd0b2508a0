mod ureq_fetcher;

use std::io::{Cursor, Read};

use crate::Error;

pub use ureq_fetcher::UReqFetcher;


#[cfg(test)]
pub use mock_fetcher::MockFetcher;

/// Streaming response body. Dropping it releases the underlying connection.
pub type Body = Box<dyn Read + Send + Sync + 'static>;

pub enum Response {
    Ok(Body),
    Status(u16),
    NetworkError(String),
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::Ok(Box::new(Cursor::new(body)))
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self::NetworkError(message.into())
    }

    /// Turns anything but a successful reply into the matching [`Error`].
    pub fn into_body(self, url: &str) -> Result<Body, Error> {
        match self {
            Response::Ok(body) => Ok(body),
            Response::Status(status) => Err(Error::Status {
                url: url.to_string(),
                status,
            }),
            Response::NetworkError(message) => Err(Error::Network {
                url: url.to_string(),
                message,
            }),
        }
    }
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::Ok(_) => f.write_str("Ok(<body>)"),
            Response::Status(code) => f.debug_tuple("Status").field(code).finish(),
            Response::NetworkError(message) => {
                f.debug_tuple("NetworkError").field(message).finish()
            }
        }
    }
}

/// A blocking HTTP GET.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Response;
}

impl<T> Fetcher for &T
where
    T: Fetcher + ?Sized,
{
    fn fetch(&self, url: &str) -> Response {
        (**self).fetch(url)
    }
}
