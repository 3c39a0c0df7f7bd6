//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Submission blocked before any request was sent
    #[error("Validation error: {0}")]
    Validation(#[from] vigia_core::CoreError),

    /// Transport-level failure from the client layer
    #[error("Client error: {0}")]
    Client(#[from] vigia_client::ClientError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_conversion() {
        let error: SdkError = vigia_core::CoreError::MissingWarehouse.into();
        assert!(error.to_string().contains("No warehouse selected"));
    }

    #[test]
    fn test_client_error_conversion() {
        let error: SdkError = vigia_client::ClientError::Timeout(20).into();
        assert!(error.to_string().contains("timed out"));
    }

    #[test]
    fn test_config_error() {
        let error = SdkError::Config("empty base URL".to_string());
        assert!(error.to_string().contains("Configuration error"));
    }
}
