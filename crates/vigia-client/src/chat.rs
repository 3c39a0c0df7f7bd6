//! AI chat adapter
//!
//! Thin client for the assistant endpoint. Chat failures degrade to an
//! inline localized message; nothing throws past this boundary, so a broken
//! chat service can never take the surrounding UI down with it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

/// Default chat endpoint
pub const DEFAULT_CHAT_URL: &str = "http://localhost:8015/ai-chat";

/// Bounded wait on a chat exchange, seconds
pub const CHAT_TIMEOUT_SECS: u64 = 20;

/// Wire payload for one chat message
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
    pub analysis_context: Value,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    response: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Client for the AI chat endpoint
pub struct ChatClient {
    url: String,
    user_id: String,
    client: reqwest::Client,
}

impl ChatClient {
    /// Create a chat client with a fresh session user id
    pub fn new(url: impl Into<String>) -> crate::Result<Self> {
        Self::with_user_id(url, format!("user_{}", Uuid::new_v4()))
    }

    /// Create a chat client with an explicit user id
    pub fn with_user_id(
        url: impl Into<String>,
        user_id: impl Into<String>,
    ) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(CHAT_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                crate::ClientError::Transport(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            url: url.into(),
            user_id: user_id.into(),
            client,
        })
    }

    /// Session user id attached to every message
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Send a message and return the assistant's reply.
    ///
    /// Always returns a displayable string: server-reported problems come
    /// back as "Error del servidor: ...", anything else as a generic
    /// connection error.
    pub async fn send_message(&self, message: &str, analysis_context: Value) -> String {
        let payload = ChatRequest {
            message: message.to_string(),
            user_id: self.user_id.clone(),
            analysis_context,
        };

        tracing::debug!(url = %self.url, "sending chat message");

        let resp = match self.client.post(&self.url).json(&payload).send().await {
            Ok(resp) => resp,
            Err(error) => {
                tracing::warn!(%error, "chat request failed");
                return "Error de conexión con el servidor de IA.".to_string();
            }
        };

        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(error) => {
                tracing::warn!(%error, "failed to read chat response");
                return "Error de conexión con el servidor de IA.".to_string();
            }
        };

        if !status.is_success() {
            if let Ok(ChatErrorBody { detail: Some(detail) }) = serde_json::from_str(&body) {
                return format!("Error del servidor: {detail}");
            }
            return "Error de conexión con el servidor de IA.".to_string();
        }

        match serde_json::from_str::<ChatReply>(&body) {
            Ok(ChatReply { response: Some(reply) }) => reply,
            _ => "No se recibió respuesta válida del servidor de IA.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_shape() {
        let request = ChatRequest {
            message: "¿Por qué tengo este % de riesgo exacto?".to_string(),
            user_id: "user_123".to_string(),
            analysis_context: json!({"motor": "scientific_risk_engine_v4"}),
        };
        let payload = serde_json::to_value(&request).unwrap();
        let object = payload.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("message"));
        assert!(object.contains_key("user_id"));
        assert!(object.contains_key("analysis_context"));
    }

    #[test]
    fn test_fresh_client_gets_session_user_id() {
        let client = ChatClient::new(DEFAULT_CHAT_URL).unwrap();
        assert!(client.user_id().starts_with("user_"));

        let other = ChatClient::new(DEFAULT_CHAT_URL).unwrap();
        assert_ne!(client.user_id(), other.user_id());
    }

    #[test]
    fn test_explicit_user_id_is_kept() {
        let client = ChatClient::with_user_id(DEFAULT_CHAT_URL, "user_abc").unwrap();
        assert_eq!(client.user_id(), "user_abc");
    }

    #[tokio::test]
    async fn test_unreachable_server_degrades_to_message() {
        // Port 9 (discard) is not listening; the adapter must answer with a
        // localized string instead of an error.
        let client = ChatClient::with_user_id("http://127.0.0.1:9/ai-chat", "user_test").unwrap();
        let reply = client.send_message("hola", json!({})).await;
        assert_eq!(reply, "Error de conexión con el servidor de IA.");
    }
}
