use anyhow::Context;

use empleados_api::app::app;
use empleados_api::bootstrap::seed_admin;
use empleados_api::config;
use empleados_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up SECURITY_JWT_SECRET, BOOTSTRAP_ADMIN_EMAIL, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Empleados API in {:?} mode", config.environment);

    let state = AppState::from_config(config);
    seed_admin(&state, config).await;

    let app = app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("EMPLEADOS_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Empleados API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;

    Ok(())
}
