use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Value, json};

use crate::{error::AppError, state::UseCases};

/// Login: issues an access/refresh token pair.
pub async fn post_authentication(
    State(use_cases): State<Arc<UseCases>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let auth = use_cases.login_user.execute(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": auth,
        })),
    ))
}

/// Exchanges a stored refresh token for a new access token.
pub async fn put_authentication(
    State(use_cases): State<Arc<UseCases>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let access_token = use_cases.refresh_authentication.execute(&payload).await?;

    Ok(Json(json!({
        "status": "success",
        "data": { "accessToken": access_token },
    })))
}

/// Logout: revokes the refresh token.
pub async fn delete_authentication(
    State(use_cases): State<Arc<UseCases>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    use_cases.logout_user.execute(&payload).await?;

    Ok(Json(json!({ "status": "success" })))
}
