//! In-process stores keyed by auto-incrementing ids.
//!
//! Each store keeps its rows and id counter behind one `RwLock`, so the
//! email uniqueness check and the insert happen under the same write guard.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use rentcar_core::ApplicationError;
use rentcar_models::{Car, NewCar, NewUser, UpdateCarDto, User};
use tokio::sync::RwLock;

use super::{CarRepository, UserRepository};

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApplicationError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, ApplicationError> {
        let mut table = self.table.write().await;

        if table.rows.values().any(|u| u.email == user.email) {
            return Err(ApplicationError::EmailAlreadyTaken);
        }

        let now = Utc::now();
        let id = table.next_id();
        let user = User {
            id,
            name: user.name,
            email: user.email,
            password: user.password,
            role_id: user.role.id(),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(id, user.clone());

        Ok(user)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCarRepository {
    table: RwLock<Table<Car>>,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn list(&self) -> Result<Vec<Car>, ApplicationError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Car>, ApplicationError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, car: NewCar) -> Result<Car, ApplicationError> {
        let mut table = self.table.write().await;

        let now = Utc::now();
        let id = table.next_id();
        let car = Car {
            id,
            name: car.name,
            price: car.price,
            size: car.size,
            image: car.image,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(id, car.clone());

        Ok(car)
    }

    async fn update(
        &self,
        id: i32,
        changes: UpdateCarDto,
    ) -> Result<Option<Car>, ApplicationError> {
        let mut table = self.table.write().await;

        Ok(table.rows.get_mut(&id).map(|car| {
            car.apply(changes);
            car.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApplicationError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn delete_all(&self) -> Result<u64, ApplicationError> {
        let mut table = self.table.write().await;
        let removed = table.rows.len() as u64;
        table.rows.clear();
        Ok(removed)
    }
}
