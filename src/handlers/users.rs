use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Value, json};

use crate::{error::AppError, state::UseCases};

/// Register a new user.
pub async fn post_user(
    State(use_cases): State<Arc<UseCases>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let added_user = use_cases.add_user.execute(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "addedUser": added_user },
        })),
    ))
}
