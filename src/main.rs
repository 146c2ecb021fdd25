use anyhow::Context;
use dotenvy::dotenv;
use rentcar::logging::init_tracing;
use rentcar::metrics::{init_metrics, metrics_app};
use rentcar::router::init_router;
use rentcar::state::AppState;
use rentcar_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
use rentcar_db::{init_db_pool, run_migrations};
use tracing::{info, warn};

async fn init_app_state() -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env();
    let cors_config = CorsConfig::from_env();

    if std::env::var("STORE").is_ok_and(|store| store.eq_ignore_ascii_case("memory")) {
        warn!("STORE=memory: data is kept in process and lost on restart");
        return Ok(AppState::in_memory(&jwt_config, cors_config));
    }

    let database_config = DatabaseConfig::from_env();
    let pool = init_db_pool(&database_config)
        .await
        .with_context(|| format!("Failed to connect to {}", database_config.database_name()))?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(AppState::postgres(pool, &jwt_config, cors_config))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing().context("Failed to initialize logging")?;

    let state = init_app_state().await?;
    let mut app = init_router(state);

    if let Some(handle) = init_metrics().context("Failed to install metrics recorder")? {
        app = app.merge(metrics_app(handle));
    }

    let addr = ServerConfig::from_env().socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, "Server running");
    println!("🚀 Server running on http://{}", addr);
    println!("📚 Swagger UI available at http://{}/swagger-ui", addr);
    println!("📖 Scalar UI available at http://{}/scalar", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
