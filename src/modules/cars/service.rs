use rentcar_core::ApplicationError;
use rentcar_db::CarRepository;
use rentcar_models::{Car, CreateCarDto, UpdateCarDto};
use tracing::{info, instrument};

use crate::metrics::track_car_operation;

const RESOURCE: &str = "Car";

pub struct CarService;

impl CarService {
    #[instrument(skip(cars))]
    pub async fn list(cars: &dyn CarRepository) -> Result<Vec<Car>, ApplicationError> {
        cars.list().await
    }

    #[instrument(skip(cars))]
    pub async fn get(cars: &dyn CarRepository, id: i32) -> Result<Car, ApplicationError> {
        cars.find(id)
            .await?
            .ok_or_else(|| ApplicationError::record_not_found(RESOURCE))
    }

    #[instrument(skip(cars))]
    pub async fn create(
        cars: &dyn CarRepository,
        dto: CreateCarDto,
    ) -> Result<Car, ApplicationError> {
        let car = cars.create(dto.into()).await?;

        track_car_operation("created");
        info!(car_id = car.id, "Car created");

        Ok(car)
    }

    #[instrument(skip(cars))]
    pub async fn update(
        cars: &dyn CarRepository,
        id: i32,
        dto: UpdateCarDto,
    ) -> Result<Car, ApplicationError> {
        let car = cars
            .update(id, dto)
            .await?
            .ok_or_else(|| ApplicationError::record_not_found(RESOURCE))?;

        track_car_operation("updated");
        info!(car_id = car.id, "Car updated");

        Ok(car)
    }

    #[instrument(skip(cars))]
    pub async fn delete(cars: &dyn CarRepository, id: i32) -> Result<(), ApplicationError> {
        if !cars.delete(id).await? {
            return Err(ApplicationError::record_not_found(RESOURCE));
        }

        track_car_operation("deleted");
        info!(car_id = id, "Car deleted");

        Ok(())
    }
}
