//! # Rentcar Models
//!
//! Domain models and DTOs for the rentcar API.
//!
//! # Modules
//!
//! - [`auth`]: Registration, login and who-am-I payloads
//! - [`cars`]: The car record and its create/update DTOs
//! - [`users`]: The persisted user record
//!
//! # Example
//!
//! ```ignore
//! use rentcar_models::{CreateCarDto, User};
//!
//! let identity = user.identity()?;
//! ```

pub mod auth;
pub mod cars;
pub mod users;

pub use auth::{AccessTokenResponse, LoginRequest, RegisterRequest, WhoAmIResponse};
pub use cars::{Car, CreateCarDto, NewCar, UpdateCarDto};
pub use users::{NewUser, User};
