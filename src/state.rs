use std::fmt;
use std::sync::Arc;

use rentcar_auth::TokenService;
use rentcar_config::{CorsConfig, JwtConfig};
use rentcar_db::{
    CarRepository, InMemoryCarRepository, InMemoryUserRepository, PgCarRepository, PgPool,
    PgUserRepository, UserRepository,
};

/// Shared, read-only handles injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub cars: Arc<dyn CarRepository>,
    pub tokens: TokenService,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        cars: Arc<dyn CarRepository>,
        jwt_config: &JwtConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            users,
            cars,
            tokens: TokenService::new(jwt_config),
            cors_config,
        }
    }

    pub fn postgres(db: PgPool, jwt_config: &JwtConfig, cors_config: CorsConfig) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(db.clone())),
            Arc::new(PgCarRepository::new(db)),
            jwt_config,
            cors_config,
        )
    }

    /// State backed by empty in-process stores.
    pub fn in_memory(jwt_config: &JwtConfig, cors_config: CorsConfig) -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryCarRepository::new()),
            jwt_config,
            cors_config,
        )
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}
