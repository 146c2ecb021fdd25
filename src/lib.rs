//! # Rentcar API
//!
//! A REST API for a car-rental service built with Rust, Axum, and PostgreSQL:
//! customer registration and login, JWT bearer authentication, and an
//! ADMIN-only car catalogue.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # authenticate + role guards
//! ├── modules/          # Feature modules
//! │   ├── auth/        # register, login, whoami
//! │   └── cars/        # car CRUD
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # tracing setup and request logging
//! ├── metrics.rs        # Prometheus recorder and business counters
//! ├── router.rs         # route tree and global layers
//! ├── state.rs          # AppState
//! └── validator.rs      # ValidatedJson extractor
//! ```
//!
//! Each feature module has a `router.rs`, a `controller.rs` with the HTTP
//! handlers and a `service.rs` with the business rules. Records and DTOs live
//! in `rentcar-models`; stores live in `rentcar-db`.
//!
//! ## Error contract
//!
//! Every failure is an [`rentcar_core::ApplicationError`] rendered as
//!
//! ```json
//! { "error": { "name": "Error", "message": "...", "details": null } }
//! ```
//!
//! Authorization failures answer `401` and missing cars answer `422`.
//!
//! ## Quick Start
//!
//! ```bash
//! JWT_SIGNATURE_KEY=change-me
//! APP_ENV=development      # database rentcar_development
//! STORE=memory             # optional: run without PostgreSQL
//! ```
//!
//! ```bash
//! cargo run --bin rentcar-cli -- create-admin
//! ```
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:8000/swagger-ui`
//! - Scalar: `http://localhost:8000/scalar`

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use rentcar_auth;
pub use rentcar_config;
pub use rentcar_core;
pub use rentcar_db;
pub use rentcar_models;
