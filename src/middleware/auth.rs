use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use rentcar_auth::Identity;
use rentcar_core::ApplicationError;

use crate::state::AppState;

/// Identity attached to the request by [`authenticate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser(pub Identity);

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApplicationError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApplicationError::unauthenticated("Missing authorization header"))?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApplicationError::unauthenticated("Invalid authorization header format"))
}

/// Verifies the bearer token and attaches [`AuthUser`] before continuing.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApplicationError> {
    let identity = state.tokens.verify(bearer_token(req.headers())?)?;

    tracing::debug!(user_id = identity.id, role = %identity.role.name, "Authenticated");

    req.extensions_mut().insert(AuthUser(identity));
    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApplicationError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| ApplicationError::unauthenticated("Authentication required"))
    }
}
