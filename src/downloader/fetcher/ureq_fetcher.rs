use std::time::Duration;

use ureq::Error::{Status, Transport};

use super::{Fetcher, Response};

pub struct UReqFetcher {
    agent: ureq::Agent,
}

impl Fetcher for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        tracing::debug!(url, "GET");

        match self.agent.get(url).call() {
            // ureq only errors on 4xx/5xx; an unfollowed 3xx still lands here.
            Ok(response) if !(200..300).contains(&response.status()) => {
                Response::status(response.status())
            }

            Ok(response) => Response::Ok(response.into_reader()),

            Err(Status(code, _)) => Response::status(code),

            Err(Transport(transport)) => Response::network_error(transport.to_string()),
        }
    }
}

impl UReqFetcher {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .build();

        UReqFetcher { agent }
    }
}
