use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use rentcar_core::{ApplicationError, ErrorBody};
use rentcar_models::{Car, CreateCarDto, UpdateCarDto};
use tracing::instrument;

use super::service::CarService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Ids that are not integers cannot name a car.
fn parse_id(raw: &str) -> Result<i32, ApplicationError> {
    raw.parse()
        .map_err(|_| ApplicationError::record_not_found("Car"))
}

/// List all cars
#[utoipa::path(
    get,
    path = "/v1/cars",
    responses(
        (status = 200, description = "All cars", body = Vec<Car>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Cars"
)]
#[instrument(skip(state))]
pub async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>, ApplicationError> {
    let cars = CarService::list(state.cars.as_ref()).await?;
    Ok(Json(cars))
}

/// Get a car by id
#[utoipa::path(
    get,
    path = "/v1/cars/{id}",
    params(("id" = i32, Path, description = "Car id")),
    responses(
        (status = 200, description = "Car found", body = Car),
        (status = 422, description = "Car not found", body = ErrorBody)
    ),
    tag = "Cars"
)]
#[instrument(skip(state))]
pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Car>, ApplicationError> {
    let car = CarService::get(state.cars.as_ref(), parse_id(&id)?).await?;
    Ok(Json(car))
}

/// Create a car
#[utoipa::path(
    post,
    path = "/v1/cars",
    request_body = CreateCarDto,
    responses(
        (status = 201, description = "Car created", body = Car),
        (status = 401, description = "Missing token or caller is not ADMIN", body = ErrorBody),
        (status = 422, description = "Validation failed", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Cars"
)]
#[instrument(skip(state))]
pub async fn create_car(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCarDto>,
) -> Result<(StatusCode, Json<Car>), ApplicationError> {
    let car = CarService::create(state.cars.as_ref(), dto).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

/// Update a car
#[utoipa::path(
    put,
    path = "/v1/cars/{id}",
    params(("id" = i32, Path, description = "Car id")),
    request_body = UpdateCarDto,
    responses(
        (status = 200, description = "Car updated", body = Car),
        (status = 401, description = "Missing token or caller is not ADMIN", body = ErrorBody),
        (status = 422, description = "Car not found or validation failed", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Cars"
)]
#[instrument(skip(state))]
pub async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateCarDto>,
) -> Result<Json<Car>, ApplicationError> {
    let car = CarService::update(state.cars.as_ref(), parse_id(&id)?, dto).await?;
    Ok(Json(car))
}

/// Delete a car
#[utoipa::path(
    delete,
    path = "/v1/cars/{id}",
    params(("id" = i32, Path, description = "Car id")),
    responses(
        (status = 204, description = "Car deleted"),
        (status = 401, description = "Missing token or caller is not ADMIN", body = ErrorBody),
        (status = 422, description = "Car not found", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Cars"
)]
#[instrument(skip(state))]
pub async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApplicationError> {
    CarService::delete(state.cars.as_ref(), parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
