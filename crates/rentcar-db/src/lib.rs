//! # Rentcar DB
//!
//! PostgreSQL connection pool, schema migrations and the record stores
//! handlers talk to.
//!
//! # Modules
//!
//! - [`repositories`]: `UserRepository` / `CarRepository` traits with
//!   Postgres and in-memory implementations
//!
//! # Example
//!
//! ```ignore
//! use rentcar_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! ```

pub mod repositories;

use rentcar_config::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

pub use repositories::{
    CarRepository, InMemoryCarRepository, InMemoryUserRepository, PgCarRepository,
    PgUserRepository, UserRepository,
};

/// SQL migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Connects a pool to the database selected by `config`.
///
/// # Errors
///
/// Returns the underlying [`sqlx::Error`] if the database cannot be reached.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    info!(
        environment = %config.environment,
        database = %config.database_name(),
        max_connections = config.max_connections,
        "Connecting to database"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url())
        .await
}

/// Applies pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
