use axum::{
    http::{header, HeaderName, Method},
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::controllers::{download::DownloadController, health};
use crate::infrastructure::config::Config;
use crate::infrastructure::middleware::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with all routes and layers
pub fn build_router(download_controller: Arc<DownloadController>) -> Router {
    // Browser callers on other origins read the filename and request id
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .expose_headers([
            header::CONTENT_DISPOSITION,
            HeaderName::from_static(X_REQUEST_ID),
        ]);

    // Download relay (public)
    let download_routes = Router::new()
        .route("/api/download", get(DownloadController::download))
        .with_state(download_controller);

    Router::new()
        .route("/health", get(health::health))
        .merge(download_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    download_controller: Arc<DownloadController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(download_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
