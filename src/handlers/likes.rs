use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError, models::like_comment::LikeComment, state::UseCases, utils::jwt::Claims,
};

/// Toggle Like.
/// If already liked -> Unlike. If not liked -> Like.
pub async fn put_like(
    State(use_cases): State<Arc<UseCases>>,
    Extension(claims): Extension<Claims>,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let like = LikeComment::new(&thread_id, &comment_id, &claims.id)?;
    let liked = use_cases.like_comment.execute(&like).await?;

    tracing::debug!("Comment {} liked by {}: {}", comment_id, claims.username, liked);

    Ok(Json(json!({ "status": "success" })))
}
