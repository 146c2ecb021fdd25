use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::router::HealthResponse;
use rentcar_core::{ErrorBody, ErrorPayload, RoleName};
use rentcar_models::{
    AccessTokenResponse, Car, CreateCarDto, LoginRequest, RegisterRequest, UpdateCarDto,
    WhoAmIResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::health,
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::whoami,
        crate::modules::cars::controller::list_cars,
        crate::modules::cars::controller::get_car,
        crate::modules::cars::controller::create_car,
        crate::modules::cars::controller::update_car,
        crate::modules::cars::controller::delete_car,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            AccessTokenResponse,
            WhoAmIResponse,
            RoleName,
            Car,
            CreateCarDto,
            UpdateCarDto,
            ErrorBody,
            ErrorPayload,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Authentication", description = "Registration, login and identity"),
        (name = "Cars", description = "Car catalogue; writes require an ADMIN token")
    ),
    info(
        title = "Rentcar API",
        version = "0.1.0",
        description = "Car rental REST API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
