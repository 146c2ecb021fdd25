//! Authentication request and response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    #[schema(example = "Hardy123")]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "hardy@gmail.com")]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    #[schema(example = "123456")]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email must not be empty"))]
    #[schema(example = "hardy@gmail.com")]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    #[schema(example = "123456")]
    pub password: String,
}

/// Returned by register and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WhoAmIResponse {
    pub id: i32,
    pub email: String,
    pub name: String,
}

impl From<&rentcar_auth::Identity> for WhoAmIResponse {
    fn from(identity: &rentcar_auth::Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email.clone(),
            name: identity.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentcar_auth::Identity;
    use rentcar_core::RoleName;

    #[test]
    fn test_access_token_is_camel_case() {
        let value = serde_json::to_value(AccessTokenResponse {
            access_token: "abc".to_string(),
        })
        .unwrap();

        assert_eq!(value, serde_json::json!({ "accessToken": "abc" }));
    }

    #[test]
    fn test_register_validation() {
        let valid = RegisterRequest {
            name: "Hardy123".to_string(),
            email: "hardy@gmail.com".to_string(),
            password: "123456".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_whoami_omits_role() {
        let identity = Identity::new(3, "asep123", "asep@gmail.com", RoleName::Customer);
        let value = serde_json::to_value(WhoAmIResponse::from(&identity)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "id": 3, "email": "asep@gmail.com", "name": "asep123" })
        );
    }
}
