use axum::http::HeaderValue;
use axum::Router;
use configs::{AppConfig, CorsConfig};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::info;

use crate::routes;
use crate::state::AppState;

/// Origins come from config; methods and headers are mirrored from the
/// preflight because a wildcard cannot be combined with credentials.
pub fn build_cors(cfg: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| o.trim().parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Connect the store, create missing tables and assemble the router.
pub async fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let db = models::db::connect_with_config(&config.database).await?;
    models::schema::ensure_schema(&db).await?;
    let cors = build_cors(&config.cors)?;
    Ok(routes::build_router(AppState::new(db), cors))
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await
}

/// Resolves once `signal` fires. A signal listener that fails never resolves,
/// so the server keeps running instead of shutting down right after start.
async fn wait_for_shutdown<F>(signal: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&config).await?;
    let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, origins = ?config.cors.allowed_origins, "starting directory server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
