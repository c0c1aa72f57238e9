use axum::{http::StatusCode, response::IntoResponse};

/// GET /health - liveness check
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
