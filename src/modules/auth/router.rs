use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::controller::{login, register, whoami};
use crate::middleware::auth::authenticate;
use crate::state::AppState;

pub fn init_auth_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route(
            "/whoami",
            get(whoami).route_layer(middleware::from_fn_with_state(state.clone(), authenticate)),
        )
}
