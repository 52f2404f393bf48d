// src/utils/jwt.rs

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::Config, error::AppError};

const INVALID_REFRESH_TOKEN: &str = "refresh token tidak valid";

/// Identity carried inside both token kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub id: String,
    pub username: String,
}

/// JWT Claims structure.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Claims {
    /// User ID.
    pub id: String,
    pub username: String,
    /// Issued at, Unix timestamp.
    pub iat: usize,
    /// Expiration time as Unix timestamp. Refresh tokens carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}

impl From<Claims> for TokenPayload {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            username: claims.username,
        }
    }
}

/// Token issuance and verification used by the authentication use cases.
#[cfg_attr(test, mockall::automock)]
pub trait TokenManager: Send + Sync {
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String, AppError>;

    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, AppError>;

    /// Fails with `BadRequest` when the signature does not match the refresh key.
    fn verify_refresh_token(&self, token: &str) -> Result<(), AppError>;

    fn decode_payload(&self, token: &str) -> Result<TokenPayload, AppError>;
}

/// HS256 tokens: access tokens expire after `access_token_age` seconds,
/// refresh tokens never expire and live until logout.
#[derive(Debug, Clone)]
pub struct JwtTokenManager {
    access_key: String,
    refresh_key: String,
    access_token_age: u64,
}

impl JwtTokenManager {
    pub fn new(config: &Config) -> Self {
        Self {
            access_key: config.access_token_key.clone(),
            refresh_key: config.refresh_token_key.clone(),
            access_token_age: config.access_token_age,
        }
    }

    fn refresh_validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation
    }
}

impl TokenManager for JwtTokenManager {
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String, AppError> {
        sign_jwt(payload, &self.access_key, Some(self.access_token_age))
    }

    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, AppError> {
        sign_jwt(payload, &self.refresh_key, None)
    }

    fn verify_refresh_token(&self, token: &str) -> Result<(), AppError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.refresh_key.as_bytes()),
            &Self::refresh_validation(),
        )
        .map(|_| ())
        .map_err(|_| AppError::BadRequest(INVALID_REFRESH_TOKEN.to_string()))
    }

    fn decode_payload(&self, token: &str) -> Result<TokenPayload, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.refresh_key.as_bytes()),
            &Self::refresh_validation(),
        )
        .map_err(|_| AppError::BadRequest(INVALID_REFRESH_TOKEN.to_string()))?;

        Ok(token_data.claims.into())
    }
}

fn now() -> Result<usize, AppError> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .as_secs() as usize)
}

/// Signs a new HS256 JWT for the user.
///
/// Arguments:
/// * `payload`: identity to embed.
/// * `expiration_seconds`: lifetime, or `None` for a token without `exp`.
pub fn sign_jwt(
    payload: &TokenPayload,
    secret: &str,
    expiration_seconds: Option<u64>,
) -> Result<String, AppError> {
    let iat = now()?;

    let claims = Claims {
        id: payload.id.clone(),
        username: payload.username.clone(),
        iat,
        exp: expiration_seconds.map(|age| iat + age as usize),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(e.to_string()))
}

/// Verifies an access token: signature and a mandatory, unexpired `exp`.
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims, AppError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|_| AppError::AuthError("Invalid token".to_string()))?;

    Ok(token_data.claims)
}

/// Axum Middleware: Authentication.
///
/// Validates the 'Authorization: Bearer <token>' header and injects `Claims`
/// into the request extensions for handlers to use.
pub async fn auth_middleware(
    State(config): State<Config>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = match auth_header.and_then(|header| header.strip_prefix("Bearer ")) {
        Some(token) => token,
        None => return Err(AppError::AuthError("Missing authentication".to_string())),
    };

    let claims = verify_jwt(token, &config.access_token_key)?;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> JwtTokenManager {
        JwtTokenManager {
            access_key: "access-secret".to_string(),
            refresh_key: "refresh-secret".to_string(),
            access_token_age: 3000,
        }
    }

    fn dicoding() -> TokenPayload {
        TokenPayload {
            id: "user-123".to_string(),
            username: "dicoding".to_string(),
        }
    }

    #[test]
    fn access_token_verifies_with_access_key_and_expires() {
        let token = manager().create_access_token(&dicoding()).unwrap();

        let claims = verify_jwt(&token, "access-secret").unwrap();
        assert_eq!(claims.id, "user-123");
        assert_eq!(claims.username, "dicoding");
        assert_eq!(claims.exp, Some(claims.iat + 3000));

        assert!(matches!(
            verify_jwt(&token, "refresh-secret"),
            Err(AppError::AuthError(_))
        ));
    }

    #[test]
    fn refresh_token_has_no_expiry_and_decodes_payload() {
        let manager = manager();
        let token = manager.create_refresh_token(&dicoding()).unwrap();

        assert!(manager.verify_refresh_token(&token).is_ok());
        assert_eq!(manager.decode_payload(&token).unwrap(), dicoding());
    }

    #[test]
    fn refresh_token_cannot_be_used_as_access_token() {
        let token = manager().create_refresh_token(&dicoding()).unwrap();

        assert!(verify_jwt(&token, "access-secret").is_err());
    }

    #[test]
    fn access_token_is_not_a_valid_refresh_token() {
        let manager = manager();
        let token = manager.create_access_token(&dicoding()).unwrap();

        assert_eq!(
            manager.verify_refresh_token(&token),
            Err(AppError::BadRequest("refresh token tidak valid".to_string()))
        );
    }

    #[test]
    fn garbage_is_not_a_valid_refresh_token() {
        assert_eq!(
            manager().verify_refresh_token("bukan.token.jwt"),
            Err(AppError::BadRequest("refresh token tidak valid".to_string()))
        );
    }
}
