use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::AppError;

const INVALID_CREDENTIALS: &str = "kredensial yang Anda masukkan salah";

/// Password hashing capability used by the user and login use cases.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AppError>;

    /// Fails with `AuthError` when `password` does not match `hashed`.
    fn compare_password(&self, password: &str, hashed: &str) -> Result<(), AppError>;
}

/// Argon2id with default parameters, PHC string output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, AppError> {
        hash_password(password)
    }

    fn compare_password(&self, password: &str, hashed: &str) -> Result<(), AppError> {
        if verify_password(password, hashed)? {
            Ok(())
        } else {
            Err(AppError::AuthError(INVALID_CREDENTIALS.to_string()))
        }
    }
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .to_string();

    Ok(password_hash)
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let result = Argon2::default().verify_password(password.as_bytes(), &parsed_hash);

    Ok(result.is_ok())
}
