// src/message.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`. A missing or `null` message is treated as blank.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// What a client reads back: exactly one of the two fields is set by the relay.
#[derive(Debug, Default, Deserialize)]
pub struct RelayPayload {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
