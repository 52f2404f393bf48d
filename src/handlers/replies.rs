use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};

use crate::{error::AppError, models::reply::DeleteReply, state::UseCases, utils::jwt::Claims};

pub async fn post_reply(
    State(use_cases): State<Arc<UseCases>>,
    Extension(claims): Extension<Claims>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let added_reply = use_cases
        .add_reply
        .execute(&payload, &thread_id, &comment_id, &claims.id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "data": { "addedReply": added_reply },
        })),
    ))
}

pub async fn delete_reply(
    State(use_cases): State<Arc<UseCases>>,
    Extension(claims): Extension<Claims>,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let request = DeleteReply::new(&reply_id, &comment_id, &thread_id, &claims.id)?;
    use_cases.delete_reply.execute(&request).await?;

    Ok(Json(json!({
        "status": "success",
        "message": "balasan dihapus",
    })))
}
