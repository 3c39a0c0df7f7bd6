//! Risk-query transport client

use crate::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, EXPIRES, PRAGMA};
use std::time::Duration;
use vigia_core::{RawRiskResponse, RiskQueryRequest};

/// Bounded wait on a risk query, seconds. Same bound as the chat client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Fixed risk-query endpoint path
pub const RISK_QUERY_PATH: &str = "/api/consultar-riesgo";

/// Async seam over the risk-query backend
#[async_trait]
pub trait RiskApi: Send + Sync {
    /// Submit one risk query and return the raw backend response.
    ///
    /// Implementations must not retry: a risk query is not safe to repeat
    /// silently, so retry policy belongs to the caller.
    async fn query_risk(&self, request: &RiskQueryRequest) -> Result<RawRiskResponse>;

    /// Get the name of this backend
    fn name(&self) -> &str;
}

/// HTTP implementation of `RiskApi`
pub struct HttpRiskClient {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpRiskClient {
    /// Create a client against the given base URL with the default timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a client with a custom timeout bound
    pub fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ClientError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, RISK_QUERY_PATH)
    }
}

#[async_trait]
impl RiskApi for HttpRiskClient {
    async fn query_risk(&self, request: &RiskQueryRequest) -> Result<RawRiskResponse> {
        let url = self.endpoint();
        tracing::debug!(%url, scenarios = ?request.scenarios, "submitting risk query");

        // Cache-defeating headers: stale scores must never be replayed from
        // an intermediary cache.
        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-cache, no-store, must-revalidate")
            .header(PRAGMA, "no-cache")
            .header(EXPIRES, "0")
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, self.timeout_secs))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::Transport(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let raw: RawRiskResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("risk response: {e}")))?;

        tracing::info!(
            success = raw.success,
            recommendations = raw.recommendations.len(),
            "risk query answered"
        );
        Ok(raw)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_cleanly() {
        let client = HttpRiskClient::new("http://localhost:3000").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000/api/consultar-riesgo");

        let trailing = HttpRiskClient::new("http://localhost:3000/").unwrap();
        assert_eq!(
            trailing.endpoint(),
            "http://localhost:3000/api/consultar-riesgo"
        );
    }

    #[test]
    fn test_client_name() {
        let client = HttpRiskClient::new("http://localhost:3000").unwrap();
        assert_eq!(client.name(), "http");
    }

    #[test]
    fn test_custom_timeout() {
        let client = HttpRiskClient::with_timeout("http://localhost:3000", 5).unwrap();
        assert_eq!(client.timeout_secs, 5);
    }
}
