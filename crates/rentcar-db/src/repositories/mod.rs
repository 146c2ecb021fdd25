//! Record stores behind the handlers.
//!
//! Handlers hold `Arc<dyn UserRepository>` / `Arc<dyn CarRepository>` and
//! never see which store backs them. Lookups return `Ok(None)` for absent
//! rows; mapping that to a taxonomy error is the caller's job.

mod memory;
mod postgres;

use async_trait::async_trait;
use rentcar_core::ApplicationError;
use rentcar_models::{Car, NewCar, NewUser, UpdateCarDto, User};

pub use memory::{InMemoryCarRepository, InMemoryUserRepository};
pub use postgres::{PgCarRepository, PgUserRepository};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApplicationError>;

    /// Inserts a user.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::EmailAlreadyTaken`] if the email is in use.
    async fn create(&self, user: NewUser) -> Result<User, ApplicationError>;
}

#[async_trait]
pub trait CarRepository: Send + Sync {
    /// All cars, oldest first.
    async fn list(&self) -> Result<Vec<Car>, ApplicationError>;

    async fn find(&self, id: i32) -> Result<Option<Car>, ApplicationError>;

    async fn create(&self, car: NewCar) -> Result<Car, ApplicationError>;

    /// Applies `changes`; `Ok(None)` when no car has `id`.
    async fn update(&self, id: i32, changes: UpdateCarDto)
    -> Result<Option<Car>, ApplicationError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, ApplicationError>;

    async fn delete_all(&self) -> Result<u64, ApplicationError>;
}
