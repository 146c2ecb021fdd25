use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use axum::{Router, middleware};
use http_body_util::BodyExt;
use rentcar::middleware::auth::{AuthUser, authenticate};
use rentcar::middleware::role::{check_role, require_admin};
use rentcar::state::AppState;
use rentcar_auth::Identity;
use rentcar_config::{CorsConfig, JwtConfig};
use rentcar_core::{ApplicationError, RoleName};
use serde_json::Value;
use tower::ServiceExt;

fn state() -> AppState {
    AppState::in_memory(
        &JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            expires_in: None,
        },
        CorsConfig::from_lookup(|_| None),
    )
}

async fn echo_name(AuthUser(identity): AuthUser) -> String {
    identity.name
}

fn guarded_router(state: &AppState) -> Router {
    Router::new()
        .route("/", get(echo_name))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .with_state(state.clone())
}

async fn call(router: Router, token: Option<String>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().uri("/");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let response = router
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, body.to_vec())
}

#[test]
fn test_check_role_exact_match() {
    let admin = Identity::new(1, "Hardy123", "hardy@gmail.com", RoleName::Admin);
    let customer = Identity::new(2, "asep123", "asep@gmail.com", RoleName::Customer);

    assert!(check_role(&admin, RoleName::Admin).is_ok());
    assert!(check_role(&customer, RoleName::Customer).is_ok());
    assert!(check_role(&customer, RoleName::Admin).is_err());
    assert!(check_role(&admin, RoleName::Customer).is_err());
}

#[test]
fn test_check_role_mismatch_payload() {
    let customer = Identity::new(2, "asep123", "asep@gmail.com", RoleName::Customer);
    let payload = check_role(&customer, RoleName::Admin).unwrap_err().payload();

    assert_eq!(payload.name, "Error");
    assert_eq!(payload.details["role"], "CUSTOMER");
    assert!(payload.details.get("requiredRole").is_none());
    assert!(payload.message.contains("ADMIN"));
}

#[tokio::test]
async fn test_admin_passes_guard() {
    let state = state();
    let token = state
        .tokens
        .issue(&Identity::new(1, "Hardy123", "hardy@gmail.com", RoleName::Admin))
        .unwrap();

    let (status, body) = call(guarded_router(&state), Some(token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Hardy123");
}

#[tokio::test]
async fn test_customer_stopped_by_guard() {
    let state = state();
    let token = state
        .tokens
        .issue(&Identity::new(2, "asep123", "asep@gmail.com", RoleName::Customer))
        .unwrap();

    let (status, body) = call(guarded_router(&state), Some(token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"]["details"]["role"], "CUSTOMER");
}

#[tokio::test]
async fn test_missing_token_stopped_before_guard() {
    let state = state();

    let (status, body) = call(guarded_router(&state), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"]["message"], "Missing authorization header");
}

#[tokio::test]
async fn test_guard_without_authentication_rejects() {
    let router: Router = Router::new()
        .route("/", get(|| async { "unreachable" }))
        .route_layer(middleware::from_fn(require_admin));

    let (status, body) = call(router, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"]["message"], "Authentication required");
    assert_eq!(
        ApplicationError::unauthenticated("Authentication required").status(),
        status
    );
}
