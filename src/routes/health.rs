use axum::Json;

use crate::message::HealthResponse;
use crate::services::now_timestamp;

/// Liveness probe. Always succeeds.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: now_timestamp(),
    })
}
