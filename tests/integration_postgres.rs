mod common;

use axum::http::StatusCode;
use common::{TestApp, empty_request, error_payload, jwt_config, json_request};
use rentcar::router::init_router;
use rentcar::state::AppState;
use rentcar_config::CorsConfig;
use rentcar_core::RoleName;
use serde_json::{Value, json};
use sqlx::PgPool;

fn setup_pg_app(pool: PgPool) -> TestApp {
    let state = AppState::postgres(pool, &jwt_config(), CorsConfig::from_lookup(|_| None));

    TestApp {
        router: init_router(state.clone()),
        state,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    let app = setup_pg_app(pool);
    let body = json!({
        "name": "Hardy123",
        "email": "hardy@gmail.com",
        "password": "123456"
    });

    let (status, created) = app
        .send(json_request("POST", "/v1/auth/register", None, body.clone()))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["accessToken"].is_string());

    let (status, body) = app
        .send(json_request("POST", "/v1/auth/register", None, body))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_payload(&body)["message"], "Email already taken!");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_car_lifecycle_against_database(pool: PgPool) {
    let app = setup_pg_app(pool);
    let admin = app
        .create_user("Hardy123", "hardy@gmail.com", None, RoleName::Admin)
        .await;
    let token = app.token_for(&admin);

    let (status, created) = app
        .send(json_request(
            "POST",
            "/v1/cars",
            Some(&token),
            json!({
                "name": "Toyota Avanza",
                "price": 350000,
                "size": "MEDIUM",
                "image": "https://example.com/avanza.png"
            }),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let uri = format!("/v1/cars/{}", created["id"]);

    let (status, updated) = app
        .send(json_request("PUT", &uri, Some(&token), json!({ "price": 400000 })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 400000);
    assert_eq!(updated["name"], "Toyota Avanza");

    let (status, body) = app.send(empty_request("DELETE", &uri, Some(&token))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    for method in ["GET", "DELETE"] {
        let (status, body) = app.send(empty_request(method, &uri, Some(&token))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{} {}", method, uri);
        assert_eq!(error_payload(&body)["message"], "Car not found!");
    }

    let (status, body) = app
        .send(json_request("PUT", &uri, Some(&token), json!({ "price": 1 })))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_payload(&body)["message"], "Car not found!");
}
