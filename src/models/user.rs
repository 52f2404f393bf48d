// src/models/user.rs

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use validator::Validate;

use super::{all_present, payload::Payload};
use crate::error::{DomainError, Scope};

const USERNAME_LIMIT_CHAR: &str = "username_limit_char";

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("username pattern is a valid regex"));

/// Registration request (`POST /users`).
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RegisterUser {
    #[validate(
        length(max = 50, code = "username_limit_char"),
        regex(path = *USERNAME_PATTERN, code = "username_restricted_character")
    )]
    pub username: String,

    /// Plain password until the use case swaps in the argon2 hash.
    pub password: String,

    pub fullname: String,
}

impl RegisterUser {
    pub fn new(username: &str, password: &str, fullname: &str) -> Result<Self, DomainError> {
        if !all_present(&[username, password, fullname]) {
            return Err(DomainError::MissingProperty(Scope::RegisterUser));
        }

        let user = Self {
            username: username.to_string(),
            password: password.to_string(),
            fullname: fullname.to_string(),
        };
        user.check_username()?;

        Ok(user)
    }

    /// Validates the raw JSON body.
    pub fn from_payload(body: &Value) -> Result<Self, DomainError> {
        let payload = Payload::new(body);

        if !payload.has_all(&["username", "password", "fullname"]) {
            return Err(DomainError::MissingProperty(Scope::RegisterUser));
        }

        match (
            payload.str("username"),
            payload.str("password"),
            payload.str("fullname"),
        ) {
            (Some(username), Some(password), Some(fullname)) => {
                Self::new(username, password, fullname)
            }
            _ => Err(DomainError::InvalidType(Scope::RegisterUser)),
        }
    }

    /// Replaces the plain password with its hash.
    pub fn with_password(self, hashed_password: String) -> Self {
        Self {
            password: hashed_password,
            ..self
        }
    }

    /// Length is reported before charset when both rules fail.
    fn check_username(&self) -> Result<(), DomainError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let field_errors = errors.field_errors();
        let over_limit = field_errors
            .get("username")
            .is_some_and(|errs| errs.iter().any(|e| e.code == USERNAME_LIMIT_CHAR));

        if over_limit {
            Err(DomainError::UsernameLimitChar)
        } else {
            Err(DomainError::UsernameRestrictedCharacter)
        }
    }
}

/// Public view of a freshly registered user (never carries the password).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

impl RegisteredUser {
    pub fn new(id: &str, username: &str, fullname: &str) -> Result<Self, DomainError> {
        if !all_present(&[id, username, fullname]) {
            return Err(DomainError::MissingProperty(Scope::RegisteredUser));
        }

        Ok(Self {
            id: id.to_string(),
            username: username.to_string(),
            fullname: fullname.to_string(),
        })
    }
}

/// Login request (`POST /authentications`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

impl UserLogin {
    pub fn from_payload(body: &Value) -> Result<Self, DomainError> {
        let payload = Payload::new(body);

        if !payload.has_all(&["username", "password"]) {
            return Err(DomainError::MissingProperty(Scope::UserLogin));
        }

        match (payload.str("username"), payload.str("password")) {
            (Some(username), Some(password)) => Ok(Self {
                username: username.to_string(),
                password: password.to_string(),
            }),
            _ => Err(DomainError::InvalidType(Scope::UserLogin)),
        }
    }
}
