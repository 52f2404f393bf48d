use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};

use crate::{
    error::AppError, models::comment::DeleteComment, state::UseCases, utils::jwt::Claims,
};

pub async fn post_comment(
    State(use_cases): State<Arc<UseCases>>,
    Extension(claims): Extension<Claims>,
    Path(thread_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let added_comment = use_cases
        .add_comment
        .execute(&payload, &thread_id, &claims.id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "addedComment": added_comment },
        })),
    ))
}

/// Soft delete. Only the comment's owner may do this.
pub async fn delete_comment(
    State(use_cases): State<Arc<UseCases>>,
    Extension(claims): Extension<Claims>,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let request = DeleteComment::new(&comment_id, &thread_id, &claims.id)?;
    use_cases.delete_comment.execute(&request).await?;

    Ok(Json(json!({
        "status": "success",
        "message": "komentar dihapus",
    })))
}
