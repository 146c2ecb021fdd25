//! Request pipeline stages for authentication and authorization.
//!
//! # Modules
//!
//! - [`auth`]: Bearer token verification and the [`auth::AuthUser`] extractor
//! - [`role`]: Role guards that run after authentication
//!
//! # Pipeline
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::authenticate`] verifies the token and stores the identity in
//!    request extensions, or short-circuits with `401`
//! 3. [`role::require_admin`] compares the stored identity's role with the
//!    route requirement, or short-circuits with `401 InsufficientAccess`
//! 4. The handler reads the identity through [`auth::AuthUser`]
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::post};
//! use crate::middleware::{auth::authenticate, role::require_admin};
//!
//! // route_layer runs bottom-up: authenticate first, then the role guard
//! let admin = Router::new()
//!     .route("/", post(create_car))
//!     .route_layer(middleware::from_fn(require_admin))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));
//! ```

pub mod auth;
pub mod role;
