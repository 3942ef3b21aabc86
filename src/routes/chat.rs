use axum::{Json, extract::State};
use tracing::info;
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::now_timestamp,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = payload.message.as_deref().unwrap_or("");

    if message.is_empty() {
        return Err(AppError::BadRequest("Message requis".to_string()));
    }

    // Echo a caller-supplied id verbatim, mint a fresh one otherwise. Ids are
    // never validated or stored.
    let conversation_id = match payload.conversation_id {
        Some(id) if !id.is_empty() => id,
        _ => Uuid::new_v4().to_string(),
    };

    let response = state.picker.pick(state.catalog).to_string();

    info!(%conversation_id, "message received: {}", message);
    info!(%conversation_id, "response selected: {}", response);

    Ok(Json(ChatResponse {
        response,
        conversation_id,
        status: "success".to_string(),
        timestamp: now_timestamp(),
    }))
}
