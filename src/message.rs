// src/message.rs
use serde::{Deserialize, Serialize};

/// Inbound chat payload. `message` stays optional at the wire level so a
/// missing or null field reaches the handler and gets the 400 treatment
/// instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub conversation_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub conversation_id: String,
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
