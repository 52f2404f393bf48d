// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::{
    config::Config,
    repositories::{
        AuthenticationRepository, CommentRepository, LikeCommentRepository, ReplyRepository,
        ThreadRepository, UserRepository, postgres,
    },
    use_cases::{
        AddCommentUseCase, AddReplyUseCase, AddThreadUseCase, AddUserUseCase,
        DeleteCommentUseCase, DeleteReplyUseCase, GetThreadDetailsUseCase, LikeCommentUseCase,
        LoginUserUseCase, LogoutUserUseCase, RefreshAuthenticationUseCase,
    },
    utils::{hash::Argon2Hasher, jwt::JwtTokenManager},
};

/// Storage backends the use cases are built from.
#[derive(Clone)]
pub struct Repositories {
    pub user: Arc<dyn UserRepository>,
    pub authentication: Arc<dyn AuthenticationRepository>,
    pub thread: Arc<dyn ThreadRepository>,
    pub comment: Arc<dyn CommentRepository>,
    pub reply: Arc<dyn ReplyRepository>,
    pub like_comment: Arc<dyn LikeCommentRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            user: Arc::new(postgres::UserRepositoryPostgres::new(pool.clone())),
            authentication: Arc::new(postgres::AuthenticationRepositoryPostgres::new(
                pool.clone(),
            )),
            thread: Arc::new(postgres::ThreadRepositoryPostgres::new(pool.clone())),
            comment: Arc::new(postgres::CommentRepositoryPostgres::new(pool.clone())),
            reply: Arc::new(postgres::ReplyRepositoryPostgres::new(pool.clone())),
            like_comment: Arc::new(postgres::LikeCommentRepositoryPostgres::new(pool)),
        }
    }

    /// Every repository backed by one shared in-process store.
    #[cfg(any(test, feature = "test-support"))]
    pub fn in_memory(store: crate::repositories::memory::InMemoryStore) -> Self {
        Self {
            user: Arc::new(store.clone()),
            authentication: Arc::new(store.clone()),
            thread: Arc::new(store.clone()),
            comment: Arc::new(store.clone()),
            reply: Arc::new(store.clone()),
            like_comment: Arc::new(store),
        }
    }
}

pub struct UseCases {
    pub add_user: AddUserUseCase,
    pub login_user: LoginUserUseCase,
    pub refresh_authentication: RefreshAuthenticationUseCase,
    pub logout_user: LogoutUserUseCase,
    pub add_thread: AddThreadUseCase,
    pub get_thread_details: GetThreadDetailsUseCase,
    pub add_comment: AddCommentUseCase,
    pub delete_comment: DeleteCommentUseCase,
    pub add_reply: AddReplyUseCase,
    pub delete_reply: DeleteReplyUseCase,
    pub like_comment: LikeCommentUseCase,
}

impl UseCases {
    pub fn new(repositories: Repositories, config: &Config) -> Self {
        let Repositories {
            user,
            authentication,
            thread,
            comment,
            reply,
            like_comment,
        } = repositories;

        let password_hash = Arc::new(Argon2Hasher);
        let token_manager = Arc::new(JwtTokenManager::new(config));

        Self {
            add_user: AddUserUseCase::new(user.clone(), password_hash.clone()),
            login_user: LoginUserUseCase::new(
                user,
                authentication.clone(),
                token_manager.clone(),
                password_hash,
            ),
            refresh_authentication: RefreshAuthenticationUseCase::new(
                authentication.clone(),
                token_manager,
            ),
            logout_user: LogoutUserUseCase::new(authentication),
            add_thread: AddThreadUseCase::new(thread.clone()),
            get_thread_details: GetThreadDetailsUseCase::new(
                thread.clone(),
                comment.clone(),
                reply.clone(),
            ),
            add_comment: AddCommentUseCase::new(comment.clone(), thread.clone()),
            delete_comment: DeleteCommentUseCase::new(comment.clone(), thread.clone()),
            add_reply: AddReplyUseCase::new(reply.clone(), comment.clone(), thread.clone()),
            delete_reply: DeleteReplyUseCase::new(reply, comment.clone(), thread.clone()),
            like_comment: LikeCommentUseCase::new(like_comment, comment, thread),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub use_cases: Arc<UseCases>,
}

impl AppState {
    pub fn new(config: Config, repositories: Repositories) -> Self {
        let use_cases = Arc::new(UseCases::new(repositories, &config));

        Self { config, use_cases }
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<UseCases> {
    fn from_ref(state: &AppState) -> Self {
        state.use_cases.clone()
    }
}
