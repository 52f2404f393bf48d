use serde::Serialize;
use serde_json::Value;

use super::{all_present, payload::Payload};
use crate::error::{DomainError, Scope};

/// Token pair issued on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuth {
    pub access_token: String,
    pub refresh_token: String,
}

impl NewAuth {
    pub fn new(access_token: String, refresh_token: String) -> Result<Self, DomainError> {
        if !all_present(&[&access_token, &refresh_token]) {
            return Err(DomainError::MissingProperty(Scope::NewAuth));
        }

        Ok(Self {
            access_token,
            refresh_token,
        })
    }
}

/// Extracts `refreshToken` from the body of `PUT`/`DELETE /authentications`.
///
/// `scope` tells the refresh flow and the logout flow apart in error codes.
pub fn refresh_token_from_payload(body: &Value, scope: Scope) -> Result<String, DomainError> {
    let payload = Payload::new(body);

    if !payload.has("refreshToken") {
        return Err(DomainError::MissingRefreshToken(scope));
    }

    payload
        .str("refreshToken")
        .map(str::to_string)
        .ok_or(DomainError::InvalidType(scope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_auth_requires_both_tokens() {
        assert_eq!(
            NewAuth::new("access".to_string(), String::new()),
            Err(DomainError::MissingProperty(Scope::NewAuth))
        );
    }

    #[test]
    fn new_auth_serializes_in_camel_case() {
        let auth = NewAuth::new("access".to_string(), "refresh".to_string()).unwrap();

        assert_eq!(
            serde_json::to_value(&auth).unwrap(),
            json!({ "accessToken": "access", "refreshToken": "refresh" })
        );
    }

    #[test]
    fn refresh_token_payload_is_validated() {
        let scope = Scope::RefreshAuthenticationUseCase;

        assert_eq!(
            refresh_token_from_payload(&json!({}), scope),
            Err(DomainError::MissingRefreshToken(scope))
        );
        assert_eq!(
            refresh_token_from_payload(&json!({ "refreshToken": 1 }), scope),
            Err(DomainError::InvalidType(scope))
        );
        assert_eq!(
            refresh_token_from_payload(&json!({ "refreshToken": "token" }), scope),
            Ok("token".to_string())
        );
    }
}
