use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::AppError,
    models::user::{RegisterUser, RegisteredUser},
    repositories::UserRepository,
    utils::hash::CredentialHasher,
};

pub struct AddUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hash: Arc<dyn CredentialHasher>,
}

impl AddUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hash: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self {
            user_repository,
            password_hash,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<RegisteredUser, AppError> {
        let register_user = RegisterUser::from_payload(payload)?;

        self.user_repository
            .verify_available_username(&register_user.username)
            .await?;

        let hashed_password = self.password_hash.hash(&register_user.password)?;
        let register_user = register_user.with_password(hashed_password);

        tracing::debug!("Registering user {}", register_user.username);
        self.user_repository.add_user(&register_user).await
    }
}
