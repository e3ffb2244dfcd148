//! Test fetcher — canned `DataFetcher` responses keyed by URL.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use moviequiz_core::fetcher::{DataFetcher, TransportError};

/// A fetcher that answers from a fixed URL table and records every request.
/// Unknown URLs fail with a 404 status.
#[derive(Debug, Default)]
pub struct StubFetcher {
    responses: HashMap<String, Result<Vec<u8>, TransportError>>,
    requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    /// Create a fetcher with no routes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `body`.
    #[must_use]
    pub fn with_body(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(url.to_owned(), Ok(body.into()));
        self
    }

    /// Fail `url` with `error`.
    #[must_use]
    pub fn with_error(mut self, url: &str, error: TransportError) -> Self {
        self.responses.insert(url.to_owned(), Err(error));
        self
    }

    /// Returns the URLs fetched so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.requested.lock().unwrap().push(url.to_owned());
        self.responses
            .get(url)
            .cloned()
            .unwrap_or(Err(TransportError::Status(404)))
    }
}
