//! PostgreSQL storage backend.

mod authentication;
mod comment;
mod like_comment;
mod reply;
mod thread;
mod user;

pub use authentication::AuthenticationRepositoryPostgres;
pub use comment::CommentRepositoryPostgres;
pub use like_comment::LikeCommentRepositoryPostgres;
pub use reply::ReplyRepositoryPostgres;
pub use thread::ThreadRepositoryPostgres;
pub use user::UserRepositoryPostgres;
