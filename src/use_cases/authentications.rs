use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::{AppError, Scope},
    models::{
        auth::{NewAuth, refresh_token_from_payload},
        user::UserLogin,
    },
    repositories::{AuthenticationRepository, UserRepository},
    utils::{
        hash::CredentialHasher,
        jwt::{TokenManager, TokenPayload},
    },
};

/// Exchanges credentials for an access/refresh token pair.
pub struct LoginUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn TokenManager>,
    password_hash: Arc<dyn CredentialHasher>,
}

impl LoginUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn TokenManager>,
        password_hash: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self {
            user_repository,
            authentication_repository,
            token_manager,
            password_hash,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<NewAuth, AppError> {
        let UserLogin { username, password } = UserLogin::from_payload(payload)?;

        let encrypted_password = self
            .user_repository
            .get_password_by_username(&username)
            .await?;
        self.password_hash
            .compare_password(&password, &encrypted_password)?;

        let id = self.user_repository.get_id_by_username(&username).await?;
        let token_payload = TokenPayload { id, username };

        let access_token = self.token_manager.create_access_token(&token_payload)?;
        let refresh_token = self.token_manager.create_refresh_token(&token_payload)?;

        self.authentication_repository
            .add_token(&refresh_token)
            .await?;

        tracing::debug!("User {} logged in", token_payload.username);
        Ok(NewAuth::new(access_token, refresh_token)?)
    }
}

/// Issues a fresh access token for a stored refresh token.
pub struct RefreshAuthenticationUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn TokenManager>,
}

impl RefreshAuthenticationUseCase {
    pub fn new(
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn TokenManager>,
    ) -> Self {
        Self {
            authentication_repository,
            token_manager,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<String, AppError> {
        let refresh_token =
            refresh_token_from_payload(payload, Scope::RefreshAuthenticationUseCase)?;

        self.token_manager.verify_refresh_token(&refresh_token)?;
        self.authentication_repository
            .check_availability_token(&refresh_token)
            .await?;

        let token_payload = self.token_manager.decode_payload(&refresh_token)?;
        self.token_manager.create_access_token(&token_payload)
    }
}

/// Revokes a refresh token.
pub struct LogoutUserUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
}

impl LogoutUserUseCase {
    pub fn new(authentication_repository: Arc<dyn AuthenticationRepository>) -> Self {
        Self {
            authentication_repository,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<(), AppError> {
        let refresh_token =
            refresh_token_from_payload(payload, Scope::DeleteAuthenticationUseCase)?;

        self.authentication_repository
            .check_availability_token(&refresh_token)
            .await?;
        self.authentication_repository
            .delete_token(&refresh_token)
            .await
    }
}
