mod api;
mod storage;
mod utils;


use axum::middleware;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::storage::EntryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    utils::init_logging();

    let config = utils::Config::from_env();

    tracing::info!(
        "Starting entry admin service on port {} ({} environment)",
        config.port,
        config.environment
    );

    // Initialize storage layer
    let sdk_config = config.aws_sdk_config().await;
    let store: Arc<dyn EntryStore> = Arc::new(storage::DynamoStore::new(&sdk_config));

    let app = api::router(Arc::new(api::ApiState { store })).layer(
        ServiceBuilder::new()
            .layer(CorsLayer::permissive())
            .layer(middleware::from_fn(logging_middleware)),
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!("Server listening on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Logging middleware
async fn logging_middleware(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let start = std::time::Instant::now();
    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis(),
        "Request completed"
    );

    response
}
