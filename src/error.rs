use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing url parameter")]
    MissingParameter,

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("Host not allowed: {0}")]
    HostNotAllowed(String),

    #[error("Failed to fetch source: {status} {status_text}")]
    UpstreamFetchFailed { status: u16, status_text: String },

    #[error("Download failed: {0}")]
    DownloadFailed(String),
}

/// Error body returned to the caller: `{"error": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::HostNotAllowed(_) => StatusCode::FORBIDDEN,
            Self::UpstreamFetchFailed { .. } | Self::DownloadFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to hand back to the caller. Upstream details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingParameter => "Missing url parameter",
            Self::InvalidQuery(_) => "Invalid query string",
            Self::HostNotAllowed(_) => "Host not allowed",
            Self::UpstreamFetchFailed { .. } | Self::DownloadFailed(_) => "Download failed",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.public_message().to_string(),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                status = %status.as_u16(),
                "Proxy download failed"
            );
        } else {
            tracing::warn!(
                error = %self,
                status = %status.as_u16(),
                "Request rejected"
            );
        }

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
