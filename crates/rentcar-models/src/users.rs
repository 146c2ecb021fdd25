//! The persisted user record.

use chrono::{DateTime, Utc};
use rentcar_auth::Identity;
use rentcar_core::{ApplicationError, RoleName};
use serde::Serialize;
use sqlx::FromRow;

/// A row of the `users` table.
///
/// `password` holds the bcrypt hash and is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> Result<RoleName, ApplicationError> {
        RoleName::from_id(self.role_id).ok_or_else(|| {
            ApplicationError::internal(format!(
                "User {} has unknown role id {}",
                self.id, self.role_id
            ))
        })
    }

    /// Identity carried by tokens issued for this user.
    pub fn identity(&self) -> Result<Identity, ApplicationError> {
        Ok(Identity::new(
            self.id,
            self.name.clone(),
            self.email.clone(),
            self.role()?,
        ))
    }
}

/// Insert payload; `password` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: RoleName,
}
