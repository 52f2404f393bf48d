//! Storage contracts consumed by the use cases.
//!
//! None of the methods carry a default body: a storage backend has to
//! implement every capability before it can be wired into `AppState`.

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        comment::{AddedComment, CommentRow, NewComment},
        like_comment::LikeComment,
        reply::{AddedReply, NewReply, ReplyRow},
        thread::{AddedThread, NewThread, ThreadDetails},
        user::{RegisterUser, RegisteredUser},
    },
};

#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod postgres;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, new_thread: &NewThread) -> Result<AddedThread, AppError>;

    /// Fails with `NotFound` when the thread does not exist.
    async fn check_availability_thread(&self, thread_id: &str) -> Result<(), AppError>;

    /// The thread joined with its owner's username, comments left empty.
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadDetails, AppError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, new_comment: &NewComment) -> Result<AddedComment, AppError>;

    async fn check_availability_comment(&self, comment_id: &str) -> Result<(), AppError>;

    /// Fails with `Forbidden` unless `owner` wrote the comment.
    async fn verify_comment_access(&self, comment_id: &str, owner: &str) -> Result<(), AppError>;

    /// Soft delete: flips `is_delete`, keeps the content.
    async fn delete_comment(&self, comment_id: &str) -> Result<(), AppError>;

    /// Rows ordered by creation time, oldest first.
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentRow>, AppError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, new_reply: &NewReply) -> Result<AddedReply, AppError>;

    async fn check_availability_reply(&self, reply_id: &str) -> Result<(), AppError>;

    async fn verify_reply_access(&self, reply_id: &str, owner: &str) -> Result<(), AppError>;

    async fn delete_reply(&self, reply_id: &str) -> Result<(), AppError>;

    /// Rows ordered by creation time, oldest first.
    async fn get_replies_by_comment_id(&self, comment_id: &str) -> Result<Vec<ReplyRow>, AppError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeCommentRepository: Send + Sync {
    async fn add_like_comment(&self, like: &LikeComment) -> Result<(), AppError>;

    /// Whether `like.owner` currently likes `like.comment_id`.
    async fn check_availability_like_comment(&self, like: &LikeComment) -> Result<bool, AppError>;

    async fn delete_like_comment(&self, like: &LikeComment) -> Result<(), AppError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// `user.password` must already be hashed.
    async fn add_user(&self, user: &RegisterUser) -> Result<RegisteredUser, AppError>;

    /// Fails with `BadRequest` when the username is taken.
    async fn verify_available_username(&self, username: &str) -> Result<(), AppError>;

    async fn get_password_by_username(&self, username: &str) -> Result<String, AppError>;

    async fn get_id_by_username(&self, username: &str) -> Result<String, AppError>;
}

/// Storage for issued refresh tokens.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    async fn add_token(&self, token: &str) -> Result<(), AppError>;

    async fn check_availability_token(&self, token: &str) -> Result<(), AppError>;

    async fn delete_token(&self, token: &str) -> Result<(), AppError>;
}

// Messages shared by every storage backend.
pub(crate) const THREAD_NOT_FOUND: &str = "thread tidak ditemukan";
pub(crate) const COMMENT_NOT_FOUND: &str = "komentar tidak ditemukan";
pub(crate) const REPLY_NOT_FOUND: &str = "balasan tidak ditemukan";
pub(crate) const COMMENT_FORBIDDEN: &str = "anda tidak memiliki akses pada komentar terpilih";
pub(crate) const REPLY_FORBIDDEN: &str = "anda tidak memiliki akses pada balasan terpilih";
pub(crate) const USERNAME_UNAVAILABLE: &str = "username tidak tersedia";
pub(crate) const USERNAME_NOT_FOUND: &str = "username tidak ditemukan";
pub(crate) const USER_NOT_FOUND: &str = "user tidak ditemukan";
pub(crate) const TOKEN_NOT_FOUND: &str = "refresh token tidak ditemukan di database";
