//! Data fetcher abstraction.
//!
//! The transport itself lives outside this workspace; the quiz only needs
//! "give me the bytes at this URL or tell me it failed".

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a [`DataFetcher`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server answered with a status outside `200..=299`.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
}

impl TransportError {
    /// Classifies an HTTP status code, returning `Ok(())` for success codes.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Status` for any code outside `200..=299`.
    pub fn check_status(code: u16) -> Result<(), Self> {
        if (200..=299).contains(&code) {
            Ok(())
        } else {
            Err(Self::Status(code))
        }
    }
}

/// Retrieves raw bytes for a URL. Timeouts are the implementation's concern.
#[async_trait]
pub trait DataFetcher: Send + Sync {
    /// Fetch the body at `url`.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status_accepts_2xx_range() {
        assert!(TransportError::check_status(200).is_ok());
        assert!(TransportError::check_status(299).is_ok());
    }

    #[test]
    fn test_check_status_rejects_everything_else() {
        assert_eq!(
            TransportError::check_status(199),
            Err(TransportError::Status(199))
        );
        assert_eq!(
            TransportError::check_status(300),
            Err(TransportError::Status(300))
        );
        assert_eq!(
            TransportError::check_status(404),
            Err(TransportError::Status(404))
        );
    }
}
