//! Error types for the Vigia client layer
//!
//! Transport failures are distinct from "backend returned success:false";
//! the latter never surfaces here at all (the normalizer yields `None` and
//! callers treat it as "no data").

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request rejected before anything touched the wire
    #[error("Validation error: {0}")]
    Validation(#[from] vigia_core::CoreError),

    /// The bounded wait elapsed
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Network-level failure (connect, TLS, read)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend answered outside the 2xx range
    #[error("HTTP error {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Body did not parse as the expected JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Map a reqwest failure, keeping timeouts distinct
    pub(crate) fn from_reqwest(error: reqwest::Error, timeout_secs: u64) -> Self {
        if error.is_timeout() {
            ClientError::Timeout(timeout_secs)
        } else {
            ClientError::Transport(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message() {
        let error = ClientError::Timeout(20);
        assert_eq!(error.to_string(), "Request timed out after 20s");
    }

    #[test]
    fn test_validation_error_converts_from_core() {
        let error: ClientError = vigia_core::CoreError::MissingWarehouse.into();
        assert!(matches!(error, ClientError::Validation(_)));
        assert!(error.to_string().contains("No warehouse selected"));
    }

    #[test]
    fn test_http_status_message() {
        let error = ClientError::HttpStatus {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert!(error.to_string().contains("502"));
        assert!(error.to_string().contains("bad gateway"));
    }
}
