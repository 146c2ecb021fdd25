//! # Rentcar Auth
//!
//! Identity tokens for the rentcar API.
//!
//! - [`claims`]: The [`Identity`] carried inside a token and its signed envelope
//! - [`token`]: [`TokenService`], which issues and verifies tokens
//!
//! # Example
//!
//! ```ignore
//! use rentcar_auth::{Identity, TokenService};
//! use rentcar_config::JwtConfig;
//!
//! let tokens = TokenService::new(&JwtConfig::from_env());
//! let token = tokens.issue(&identity)?;
//! assert_eq!(tokens.verify(&token)?, identity);
//! ```

pub mod claims;
pub mod token;

// Re-export commonly used types at crate root
pub use claims::{Claims, Identity, RoleClaim};
pub use token::TokenService;
