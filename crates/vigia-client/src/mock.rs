//! Mock risk backend for testing

use crate::error::Result;
use crate::risk::RiskApi;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use vigia_core::{RawRiskResponse, RiskQueryRequest};

struct ScriptedCall {
    response: RawRiskResponse,
    delay: Duration,
}

/// Mock risk backend for testing.
///
/// Calls pop scripted responses in order; when the script runs out, the
/// default response is returned. Per-call delays let tests reorder
/// completions relative to issue order.
pub struct MockRiskApi {
    name: String,
    default_response: RawRiskResponse,
    script: Mutex<VecDeque<ScriptedCall>>,
}

impl MockRiskApi {
    /// Create a mock that answers `success: false` by default
    pub fn new() -> Self {
        Self {
            name: "mock".to_string(),
            default_response: RawRiskResponse::default(),
            script: Mutex::new(VecDeque::new()),
        }
    }

    /// Create with a custom default response
    pub fn with_response(response: RawRiskResponse) -> Self {
        Self {
            default_response: response,
            ..Self::new()
        }
    }

    /// Queue one scripted response with a completion delay
    pub fn script_call(&self, response: RawRiskResponse, delay: Duration) {
        let mut script = self.script.lock().unwrap_or_else(|e| e.into_inner());
        script.push_back(ScriptedCall { response, delay });
    }
}

impl Default for MockRiskApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RiskApi for MockRiskApi {
    async fn query_risk(&self, _request: &RiskQueryRequest) -> Result<RawRiskResponse> {
        let scripted = {
            let mut script = self.script.lock().unwrap_or_else(|e| e.into_inner());
            script.pop_front()
        };

        match scripted {
            Some(call) => {
                tokio::time::sleep(call.delay).await;
                Ok(call.response)
            }
            None => Ok(self.default_response.clone()),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
