//! Token payload structures.

use rentcar_core::RoleName;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role as embedded in a token: `{ "id": 2, "name": "ADMIN" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleClaim {
    pub id: i32,
    pub name: RoleName,
}

impl From<RoleName> for RoleClaim {
    fn from(name: RoleName) -> Self {
        Self { id: name.id(), name }
    }
}

/// The verified caller.
///
/// Built from the user record at login or registration and immutable for the
/// lifetime of the token that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: RoleClaim,
}

impl Identity {
    pub fn new(id: i32, name: impl Into<String>, email: impl Into<String>, role: RoleName) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    pub fn role_name(&self) -> RoleName {
        self.role.name
    }
}

/// Signed envelope: the identity fields at the top level plus registered claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub identity: Identity,
    /// Issued-at (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiration (Unix timestamp); absent unless an expiry is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize_flat() {
        let claims = Claims {
            identity: Identity::new(1, "Hardy123", "hardy@gmail.com", RoleName::Admin),
            iat: Some(1_700_000_000),
            exp: None,
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Hardy123");
        assert_eq!(value["email"], "hardy@gmail.com");
        assert_eq!(value["role"]["id"], 2);
        assert_eq!(value["role"]["name"], "ADMIN");
        assert_eq!(value["iat"], 1_700_000_000);
        assert!(value.get("exp").is_none());
    }

    #[test]
    fn test_claims_deserialize_without_registered_claims() {
        let json = r#"{"id":2,"name":"asep123","email":"asep@gmail.com","role":{"id":1,"name":"CUSTOMER"}}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();

        assert_eq!(claims.identity.role_name(), RoleName::Customer);
        assert_eq!(claims.iat, None);
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let json = r#"{"id":2,"name":"x","email":"x@y.z","role":{"id":9,"name":"ROOT"}}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }
}
