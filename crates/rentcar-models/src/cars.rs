//! Car records and the payloads that create or change them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row of the `cars` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i32,
    #[schema(example = "Toyota Avanza")]
    pub name: String,
    /// Daily rental price
    #[schema(example = 350000)]
    pub price: i64,
    #[schema(example = "MEDIUM")]
    pub size: String,
    #[schema(example = "https://example.com/avanza.png")]
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCarDto {
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,
    #[validate(length(min = 1, max = 64, message = "size must not be empty"))]
    pub size: String,
    #[validate(length(min = 1, message = "image must not be empty"))]
    pub image: String,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCarDto {
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: Option<i64>,
    #[validate(length(min = 1, max = 64, message = "size must not be empty"))]
    pub size: Option<String>,
    #[validate(length(min = 1, message = "image must not be empty"))]
    pub image: Option<String>,
}

/// Column values for an insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub name: String,
    pub price: i64,
    pub size: String,
    pub image: String,
}

impl From<CreateCarDto> for NewCar {
    fn from(dto: CreateCarDto) -> Self {
        Self {
            name: dto.name,
            price: dto.price,
            size: dto.size,
            image: dto.image,
        }
    }
}

impl Car {
    /// Applies the present fields of `changes` and bumps `updated_at`.
    pub fn apply(&mut self, changes: UpdateCarDto) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(size) = changes.size {
            self.size = size;
        }
        if let Some(image) = changes.image {
            self.image = image;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car() -> Car {
        Car {
            id: 1,
            name: "Avanza".to_string(),
            price: 300_000,
            size: "MEDIUM".to_string(),
            image: "https://example.com/avanza.png".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_car_serializes_camel_case() {
        let value = serde_json::to_value(car()).unwrap();

        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
        assert_eq!(value["price"], 300_000);
    }

    #[test]
    fn test_apply_keeps_absent_fields() {
        let mut car = car();
        car.apply(UpdateCarDto {
            price: Some(450_000),
            ..Default::default()
        });

        assert_eq!(car.price, 450_000);
        assert_eq!(car.name, "Avanza");
        assert_eq!(car.size, "MEDIUM");
    }

    #[test]
    fn test_create_car_validation() {
        let dto = CreateCarDto {
            name: String::new(),
            price: -1,
            size: "SMALL".to_string(),
            image: "x".to_string(),
        };

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("price"));
        assert!(!fields.contains_key("size"));
    }
}
