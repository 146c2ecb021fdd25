//! # Rentcar Core
//!
//! Core types, errors, and utilities for the rentcar API.
//!
//! - [`errors`]: The closed application error taxonomy and its HTTP mapping
//! - [`password`]: Secure password hashing and verification
//! - [`roles`]: The fixed set of user roles
//!
//! # Example
//!
//! ```ignore
//! use rentcar_core::{ApplicationError, RoleName, hash_password};
//!
//! let error = ApplicationError::record_not_found("Car");
//! assert_eq!(error.to_string(), "Car not found!");
//!
//! let hash = hash_password("secure_password")?;
//! ```

pub mod errors;
pub mod password;
pub mod roles;

// Re-export commonly used types at crate root
pub use errors::{ApplicationError, ErrorBody, ErrorPayload};
pub use password::{hash_password, verify_password};
pub use roles::RoleName;
