//! # Rentcar Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Token signing configuration
//! - [`database`]: Database connection parameters and named environments
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listener address
//!
//! Every config exposes `from_env()` and a `from_lookup()` variant that takes
//! a key lookup function, so parsing can be exercised without touching the
//! process environment.
//!
//! # Example
//!
//! ```ignore
//! use rentcar_config::{DatabaseConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let database_config = DatabaseConfig::from_env();
//! println!("connecting to {}", database_config.database_name());
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::{DatabaseConfig, Environment};
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Reads a variable from the process environment.
pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
