//! Role guards.
//!
//! A guard reads the [`AuthUser`] left by `authenticate` and compares its role
//! with the route requirement. A mismatch answers `401` with an
//! `InsufficientAccess` body, never `403`.

use axum::{extract::Request, middleware::Next, response::Response};
use rentcar_auth::Identity;
use rentcar_core::{ApplicationError, RoleName};

use crate::metrics::track_authorization_check;
use crate::middleware::auth::AuthUser;

/// Checks that `identity` holds exactly `required`.
pub fn check_role(identity: &Identity, required: RoleName) -> Result<(), ApplicationError> {
    let actual = identity.role_name();
    let allowed = actual == required;
    track_authorization_check(allowed, actual.as_str());

    if !allowed {
        tracing::debug!(user_id = identity.id, %actual, %required, "Role check failed");
        return Err(ApplicationError::insufficient_access(required, actual));
    }

    Ok(())
}

/// Continues only if the authenticated caller holds `required`.
pub async fn require_role(
    required: RoleName,
    req: Request,
    next: Next,
) -> Result<Response, ApplicationError> {
    let AuthUser(identity) = req
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| ApplicationError::unauthenticated("Authentication required"))?;

    check_role(identity, required)?;

    Ok(next.run(req).await)
}

pub async fn require_admin(req: Request, next: Next) -> Result<Response, ApplicationError> {
    require_role(RoleName::Admin, req, next).await
}
