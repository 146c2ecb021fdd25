use async_trait::async_trait;
use rentcar_core::ApplicationError;
use rentcar_models::{Car, NewCar, NewUser, UpdateCarDto, User};
use sqlx::PgPool;
use tracing::instrument;

use super::{CarRepository, UserRepository};

const USER_COLUMNS: &str = "id, name, email, password, role_id, created_at, updated_at";
const CAR_COLUMNS: &str = "id, name, price, size, image, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct PgUserRepository {
    db: PgPool,
}

impl PgUserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApplicationError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self, user), fields(email = %user.email, role = %user.role))]
    async fn create(&self, user: NewUser) -> Result<User, ApplicationError> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, password, role_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.role.id())
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return ApplicationError::EmailAlreadyTaken;
            }
            ApplicationError::from(e)
        })
    }
}

#[derive(Debug, Clone)]
pub struct PgCarRepository {
    db: PgPool,
}

impl PgCarRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Car>, ApplicationError> {
        let cars = sqlx::query_as::<_, Car>(&format!(
            "SELECT {} FROM cars ORDER BY id ASC",
            CAR_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(cars)
    }

    #[instrument(skip(self))]
    async fn find(&self, id: i32) -> Result<Option<Car>, ApplicationError> {
        let car = sqlx::query_as::<_, Car>(&format!(
            "SELECT {} FROM cars WHERE id = $1",
            CAR_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(car)
    }

    #[instrument(skip(self))]
    async fn create(&self, car: NewCar) -> Result<Car, ApplicationError> {
        let car = sqlx::query_as::<_, Car>(&format!(
            "INSERT INTO cars (name, price, size, image)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            CAR_COLUMNS
        ))
        .bind(&car.name)
        .bind(car.price)
        .bind(&car.size)
        .bind(&car.image)
        .fetch_one(&self.db)
        .await?;

        Ok(car)
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        id: i32,
        changes: UpdateCarDto,
    ) -> Result<Option<Car>, ApplicationError> {
        let car = sqlx::query_as::<_, Car>(&format!(
            "UPDATE cars
             SET name = COALESCE($2, name),
                 price = COALESCE($3, price),
                 size = COALESCE($4, size),
                 image = COALESCE($5, image),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            CAR_COLUMNS
        ))
        .bind(id)
        .bind(changes.name)
        .bind(changes.price)
        .bind(changes.size)
        .bind(changes.image)
        .fetch_optional(&self.db)
        .await?;

        Ok(car)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<bool, ApplicationError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> Result<u64, ApplicationError> {
        let result = sqlx::query("DELETE FROM cars").execute(&self.db).await?;
        Ok(result.rows_affected())
    }
}
