#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rentcar::router::init_router;
use rentcar::state::AppState;
use rentcar_config::{CorsConfig, JwtConfig};
use rentcar_core::{RoleName, hash_password};
use rentcar_db::UserRepository;
use rentcar_models::{NewUser, User};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";

/// Stored in place of a bcrypt hash for users that never log in.
const UNUSABLE_HASH: &str = "!";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        expires_in: None,
    }
}

pub fn setup_test_app() -> TestApp {
    let cors_config = CorsConfig::from_lookup(|_| None);
    let state = AppState::in_memory(&jwt_config(), cors_config);

    TestApp {
        router: init_router(state.clone()),
        state,
    }
}

impl TestApp {
    /// Inserts a user directly; `password` is hashed only when given.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: Option<&str>,
        role: RoleName,
    ) -> User {
        let password = match password {
            Some(password) => hash_password(password).unwrap(),
            None => UNUSABLE_HASH.to_string(),
        };

        self.state
            .users
            .create(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password,
                role,
            })
            .await
            .unwrap()
    }

    pub fn token_for(&self, user: &User) -> String {
        self.state.tokens.issue(&user.identity().unwrap()).unwrap()
    }

    pub async fn admin_token(&self) -> String {
        let admin = self
            .create_user("Hardy123", "hardy@gmail.com", None, RoleName::Admin)
            .await;
        self.token_for(&admin)
    }

    pub async fn customer_token(&self) -> String {
        let customer = self
            .create_user("asep123", "asep@gmail.com", None, RoleName::Customer)
            .await;
        self.token_for(&customer)
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };

        (status, body)
    }
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::empty()).unwrap()
}

/// Asserts the uniform error envelope and returns its payload.
pub fn error_payload(body: &Value) -> &Value {
    let error = body
        .get("error")
        .unwrap_or_else(|| panic!("expected an error body, got {}", body));

    assert_eq!(error["name"], "Error");
    assert!(error["message"].is_string());
    assert!(error.get("details").is_some());

    error
}
