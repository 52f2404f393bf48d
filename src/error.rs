// src/error.rs

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Message returned to clients whenever the server itself failed.
pub const SERVER_FAILURE_MESSAGE: &str = "terjadi kegagalan pada server kami";

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    // 500 Internal Server Error
    #[error("internal server error: {0}")]
    InternalServerError(String),

    // 400 Bad Request (invariant violations, untranslatable input)
    #[error("bad request: {0}")]
    BadRequest(String),

    // 401 Unauthorized
    #[error("authentication error: {0}")]
    AuthError(String),

    // 403 Forbidden (acting user is not the owner)
    #[error("forbidden: {0}")]
    Forbidden(String),

    // 404 Not Found
    #[error("not found: {0}")]
    NotFound(String),
}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                let body = Json(json!({
                    "status": "error",
                    "message": SERVER_FAILURE_MESSAGE,
                }));
                return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::AuthError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        let body = Json(json!({
            "status": "fail",
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::InternalServerError`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

/// The payload or entity a [`DomainError`] was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    RegisterUser,
    RegisteredUser,
    UserLogin,
    NewAuth,
    RefreshAuthenticationUseCase,
    DeleteAuthenticationUseCase,
    NewThread,
    AddedThread,
    ThreadDetails,
    NewComment,
    AddedComment,
    CommentDetails,
    DeleteCommentUseCase,
    NewReply,
    AddedReply,
    ReplyDetails,
    DeleteReplyUseCase,
    LikeComment,
}

impl Scope {
    pub fn code(self) -> &'static str {
        match self {
            Scope::RegisterUser => "REGISTER_USER",
            Scope::RegisteredUser => "REGISTERED_USER",
            Scope::UserLogin => "USER_LOGIN",
            Scope::NewAuth => "NEW_AUTH",
            Scope::RefreshAuthenticationUseCase => "REFRESH_AUTHENTICATION_USE_CASE",
            Scope::DeleteAuthenticationUseCase => "DELETE_AUTHENTICATION_USE_CASE",
            Scope::NewThread => "NEW_THREAD",
            Scope::AddedThread => "ADDED_THREAD",
            Scope::ThreadDetails => "THREAD_DETAILS",
            Scope::NewComment => "NEW_COMMENT",
            Scope::AddedComment => "ADDED_COMMENT",
            Scope::CommentDetails => "COMMENT_DETAILS",
            Scope::DeleteCommentUseCase => "DELETE_COMMENT_USE_CASE",
            Scope::NewReply => "NEW_REPLY",
            Scope::AddedReply => "ADDED_REPLY",
            Scope::ReplyDetails => "REPLY_DETAILS",
            Scope::DeleteReplyUseCase => "DELETE_REPLY_USE_CASE",
            Scope::LikeComment => "LIKE_COMMENT",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Validation failure raised while constructing an entity or a use-case payload.
///
/// `Display` renders the machine-readable code (e.g.
/// `NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY`); the localized message is
/// produced when the error crosses into [`AppError`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}.NOT_CONTAIN_NEEDED_PROPERTY")]
    MissingProperty(Scope),

    #[error("{0}.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    InvalidType(Scope),

    #[error("{0}.NOT_CONTAIN_REFRESH_TOKEN")]
    MissingRefreshToken(Scope),

    #[error("REGISTER_USER.USERNAME_LIMIT_CHAR")]
    UsernameLimitChar,

    #[error("REGISTER_USER.USERNAME_CONTAIN_RESTRICTED_CHARACTER")]
    UsernameRestrictedCharacter,
}

impl DomainError {
    /// Localized client message, or `None` when the code is not meant to reach clients.
    pub fn translate(&self) -> Option<&'static str> {
        use DomainError::*;
        use Scope::*;

        let message = match self {
            MissingProperty(RegisterUser) => {
                "tidak dapat membuat user baru karena property yang dibutuhkan tidak ada"
            }
            InvalidType(RegisterUser) => {
                "tidak dapat membuat user baru karena tipe data tidak sesuai"
            }
            UsernameLimitChar => {
                "tidak dapat membuat user baru karena karakter username melebihi batas limit"
            }
            UsernameRestrictedCharacter => {
                "tidak dapat membuat user baru karena username mengandung karakter terlarang"
            }
            MissingProperty(UserLogin) => "harus mengirimkan username dan password",
            InvalidType(UserLogin) => "username dan password harus string",
            MissingRefreshToken(RefreshAuthenticationUseCase)
            | MissingRefreshToken(DeleteAuthenticationUseCase) => "harus mengirimkan token refresh",
            InvalidType(RefreshAuthenticationUseCase) | InvalidType(DeleteAuthenticationUseCase) => {
                "refresh token harus string"
            }
            MissingProperty(NewThread) => "gagal menambahkan thread, property tidak lengkap",
            InvalidType(NewThread) => "gagal menambahkan thread, tipe data tidak sesuai",
            MissingProperty(NewComment) => "gagal menambahkan komentar, property tidak lengkap",
            InvalidType(NewComment) => "gagal menambahkan komentar, tipe data tidak sesuai",
            MissingProperty(DeleteCommentUseCase) => {
                "gagal menghapus komentar, property tidak lengkap"
            }
            InvalidType(DeleteCommentUseCase) => "gagal menghapus komentar, tipe data tidak sesuai",
            MissingProperty(NewReply) => "gagal menambahkan balasan, property tidak lengkap",
            InvalidType(NewReply) => "gagal menambahkan balasan, tipe data tidak sesuai",
            MissingProperty(DeleteReplyUseCase) => "gagal menghapus balasan, property tidak lengkap",
            InvalidType(DeleteReplyUseCase) => "gagal menghapus balasan, tipe data tidak sesuai",
            _ => return None,
        };

        Some(message)
    }
}

/// Domain error translation: known codes become 400 responses with a
/// localized message, anything else is an integration fault.
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err.translate() {
            Some(message) => AppError::BadRequest(message.to_string()),
            None => AppError::InternalServerError(err.to_string()),
        }
    }
}
