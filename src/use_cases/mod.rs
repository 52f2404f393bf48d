//! Application use cases. Each one owns the repositories it needs and runs a
//! single request flow, propagating the first failure with `?`.

pub mod authentications;
pub mod comments;
pub mod like_comment;
pub mod replies;
pub mod threads;
pub mod users;

pub use authentications::{LoginUserUseCase, LogoutUserUseCase, RefreshAuthenticationUseCase};
pub use comments::{AddCommentUseCase, DeleteCommentUseCase};
pub use like_comment::LikeCommentUseCase;
pub use replies::{AddReplyUseCase, DeleteReplyUseCase};
pub use threads::{AddThreadUseCase, GetThreadDetailsUseCase};
pub use users::AddUserUseCase;
