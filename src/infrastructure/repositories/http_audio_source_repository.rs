use super::audio_source_repository::{AudioSourceError, AudioSourceRepository, FetchedAudio};
use async_trait::async_trait;
use reqwest::{header, Client, Url};
use std::time::Duration;

/// reqwest-backed implementation of the audio source repository
pub struct HttpAudioSourceRepository {
    http_client: Client,
}

impl HttpAudioSourceRepository {
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }

    /// Build a client with an optional overall request timeout.
    /// Without one, reqwest waits as long as the upstream keeps the connection open.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(builder.build()?))
    }
}

#[async_trait]
impl AudioSourceRepository for HttpAudioSourceRepository {
    async fn fetch(&self, url: &str) -> Result<FetchedAudio, AudioSourceError> {
        let url = Url::parse(url).map_err(|e| AudioSourceError::InvalidUrl(e.to_string()))?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| AudioSourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AudioSourceError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.as_bytes().to_vec());

        let body = response
            .bytes()
            .await
            .map_err(|e| AudioSourceError::Body(e.to_string()))?
            .to_vec();

        tracing::debug!(
            status = status.as_u16(),
            content_type = ?content_type.as_deref().map(String::from_utf8_lossy),
            body_len = body.len(),
            "Fetched upstream audio"
        );

        Ok(FetchedAudio { content_type, body })
    }
}
