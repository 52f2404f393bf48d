use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};

use crate::{error::AppError, state::UseCases, utils::jwt::Claims};

/// Create a new thread owned by the caller.
pub async fn post_thread(
    State(use_cases): State<Arc<UseCases>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let added_thread = use_cases.add_thread.execute(&payload, &claims.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "addedThread": added_thread },
        })),
    ))
}

/// Public thread view with nested comments and replies.
pub async fn get_thread_details(
    State(use_cases): State<Arc<UseCases>>,
    Path(thread_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let thread = use_cases.get_thread_details.execute(&thread_id).await?;

    Ok(Json(json!({
        "status": "success",
        "data": { "thread": thread },
    })))
}
