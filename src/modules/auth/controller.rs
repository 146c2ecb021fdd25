use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use rentcar_core::{ApplicationError, ErrorBody};
use rentcar_models::{AccessTokenResponse, LoginRequest, RegisterRequest, WhoAmIResponse};
use tracing::instrument;

use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new customer account
#[utoipa::path(
    post,
    path = "/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = AccessTokenResponse),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 422, description = "Email already taken or validation failed", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all, fields(email = %dto.email))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AccessTokenResponse>), ApplicationError> {
    let response = AuthService::register(state.users.as_ref(), &state.tokens, dto).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Exchange credentials for an access token
#[utoipa::path(
    post,
    path = "/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 201, description = "Login successful", body = AccessTokenResponse),
        (status = 401, description = "Password is not correct", body = ErrorBody),
        (status = 404, description = "Email is not registered", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all, fields(email = %dto.email))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(StatusCode, Json<AccessTokenResponse>), ApplicationError> {
    let response = AuthService::login(state.users.as_ref(), &state.tokens, dto).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Describe the caller identified by the bearer token
#[utoipa::path(
    get,
    path = "/v1/auth/whoami",
    responses(
        (status = 200, description = "Current user", body = WhoAmIResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all, fields(user_id = identity.id))]
pub async fn whoami(AuthUser(identity): AuthUser) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse::from(&identity))
}
