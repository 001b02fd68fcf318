// src/services/relay_client.rs
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::message::{ChatRequest, RelayPayload};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("relay answered with an error: {0}")]
    Server(String),

    #[error("relay answered without a response")]
    MissingResponse,
}

/// The client side of the relay: one message out, one reply text back.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    async fn send(&self, message: &str) -> Result<String, RelayError>;
}

#[derive(Debug, Clone)]
pub struct HttpRelayClient {
    client: Client,
    endpoint: String,
}

impl HttpRelayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayTransport for HttpRelayClient {
    async fn send(&self, message: &str) -> Result<String, RelayError> {
        let payload: RelayPayload = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest::new(message))
            .send()
            .await?
            .json()
            .await?;

        into_reply(payload)
    }
}

/// An `error` field wins whatever the HTTP status was.
pub fn into_reply(payload: RelayPayload) -> Result<String, RelayError> {
    if let Some(error) = payload.error {
        return Err(RelayError::Server(error));
    }
    payload.response.ok_or(RelayError::MissingResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_built_from_base_url() {
        let client = HttpRelayClient::new("http://localhost:3000/");
        assert_eq!(client.endpoint(), "http://localhost:3000/api/chat");
    }

    #[test]
    fn payload_fields_decide_the_outcome() {
        let ok: RelayPayload = serde_json::from_str(r#"{"response":"Hi there"}"#).unwrap();
        assert_eq!(into_reply(ok).unwrap(), "Hi there");

        let failed: RelayPayload = serde_json::from_str(r#"{"error":"Response Failed"}"#).unwrap();
        assert!(matches!(into_reply(failed), Err(RelayError::Server(e)) if e == "Response Failed"));

        let empty: RelayPayload = serde_json::from_str("{}").unwrap();
        assert!(matches!(into_reply(empty), Err(RelayError::MissingResponse)));
    }
}
