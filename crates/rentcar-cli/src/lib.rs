//! # Rentcar CLI
//!
//! Administrative operations used by the `rentcar-cli` binary. They take
//! repository trait objects, so they run against PostgreSQL in the binary and
//! against the in-memory stores in tests.
//!
//! ## Usage
//!
//! ```ignore
//! use rentcar_cli::{admin::create_admin, seeder::seed_cars};
//!
//! create_admin(&users, "Hardy123", "hardy@gmail.com", "secret").await?;
//! seed_cars(&cars, 20).await?;
//! ```

pub mod admin;
pub mod seeder;
