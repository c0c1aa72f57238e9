use crate::error::AppError;
use crate::infrastructure::repositories::AudioSourceError;

#[derive(Debug, thiserror::Error)]
pub enum RelayServiceError {
    #[error("missing url parameter")]
    MissingParameter,
    #[error("host not allowed: {0}")]
    HostNotAllowed(String),
    #[error("upstream fetch failed: {status} {status_text}")]
    UpstreamFetchFailed { status: u16, status_text: String },
    #[error("download failed: {0}")]
    DownloadFailed(String),
}

impl From<AudioSourceError> for RelayServiceError {
    fn from(err: AudioSourceError) -> Self {
        match err {
            AudioSourceError::Status {
                status,
                status_text,
            } => RelayServiceError::UpstreamFetchFailed {
                status,
                status_text,
            },
            other => RelayServiceError::DownloadFailed(other.to_string()),
        }
    }
}

impl From<RelayServiceError> for AppError {
    fn from(err: RelayServiceError) -> Self {
        match err {
            RelayServiceError::MissingParameter => AppError::MissingParameter,
            RelayServiceError::HostNotAllowed(host) => AppError::HostNotAllowed(host),
            RelayServiceError::UpstreamFetchFailed {
                status,
                status_text,
            } => AppError::UpstreamFetchFailed {
                status,
                status_text,
            },
            RelayServiceError::DownloadFailed(msg) => AppError::DownloadFailed(msg),
        }
    }
}
