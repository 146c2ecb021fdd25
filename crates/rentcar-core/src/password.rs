//! Password hashing with bcrypt.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::ApplicationError;

pub fn hash_password(password: &str) -> Result<String, ApplicationError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| ApplicationError::internal(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApplicationError> {
    verify(password, hash)
        .map_err(|e| ApplicationError::internal(format!("Failed to verify password: {}", e)))
}
