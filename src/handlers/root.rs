use axum::{Json, response::IntoResponse};
use serde_json::json;

use crate::error::AppError;

pub async fn index() -> impl IntoResponse {
    Json(json!({
        "value": "Yah, HaRoo! Make your voice heard - give comments a like up <3",
    }))
}

/// Fallback for unknown routes, so 404s share the failure envelope.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
