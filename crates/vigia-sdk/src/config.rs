//! Client configuration

use serde::{Deserialize, Serialize};
use vigia_client::chat::DEFAULT_CHAT_URL;
use vigia_client::risk::DEFAULT_TIMEOUT_SECS;

/// Configuration for the assessment clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the dashboard proxy; the risk and catalog paths hang off
    /// it (`/api/consultar-riesgo`, `/api/ml/...`)
    pub base_url: String,

    /// AI chat endpoint URL
    pub chat_url: String,

    /// Timeout bound for risk and catalog calls, seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a configuration with the local development defaults
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            chat_url: DEFAULT_CHAT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the chat endpoint URL
    pub fn with_chat_url(mut self, chat_url: impl Into<String>) -> Self {
        self.chat_url = chat_url.into();
        self
    }

    /// Set the timeout bound
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
