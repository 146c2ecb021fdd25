use axum::{
    Router, middleware,
    routing::{MethodRouter, get, post, put},
};

use super::controller::{create_car, delete_car, get_car, list_cars, update_car};
use crate::middleware::{auth::authenticate, role::require_admin};
use crate::state::AppState;

/// Reads are public; writes need an ADMIN token.
///
/// The guards wrap only the write handlers of each path, so an unsupported
/// method still reaches the router's method-not-allowed fallback.
pub fn init_cars_router(state: &AppState) -> Router<AppState> {
    let admin_only = |writes: MethodRouter<AppState>| {
        writes
            .route_layer(middleware::from_fn(require_admin))
            .route_layer(middleware::from_fn_with_state(state.clone(), authenticate))
    };

    Router::new()
        .route("/", get(list_cars).merge(admin_only(post(create_car))))
        .route(
            "/{id}",
            get(get_car).merge(admin_only(put(update_car).delete(delete_car))),
        )
}
