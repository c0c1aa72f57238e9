use async_trait::async_trait;

/// Audio fetched from an upstream host, held in memory for one request.
#[derive(Debug, Clone)]
pub struct FetchedAudio {
    /// Raw `Content-Type` bytes declared by the upstream, if any.
    /// Kept as bytes so obs-text values pass through unchanged.
    pub content_type: Option<Vec<u8>>,
    pub body: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum AudioSourceError {
    #[error("invalid source url: {0}")]
    InvalidUrl(String),

    #[error("upstream responded {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("failed to read upstream body: {0}")]
    Body(String),
}

/// Repository for fetching remote audio resources.
/// Abstracts the outbound HTTP client so the relay can be exercised without a network.
///
/// Implementations must:
/// - issue exactly one request per call, without retries
/// - return the body unmodified
/// - report non-success upstream statuses as `AudioSourceError::Status` without reading the body
#[async_trait]
pub trait AudioSourceRepository: Send + Sync {
    /// Fetch the resource at `url`
    ///
    /// # Errors
    /// Returns error if the url is unusable, the upstream is unreachable,
    /// responds with a non-success status or the body cannot be read
    async fn fetch(&self, url: &str) -> Result<FetchedAudio, AudioSourceError>;
}
