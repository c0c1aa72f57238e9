use super::disposition::attachment_disposition;
use super::error::RelayServiceError;
use super::{RelayRequest, RelayResponse, DEFAULT_CONTENT_TYPE};
use crate::infrastructure::repositories::AudioSourceRepository;
use async_trait::async_trait;
use reqwest::Url;
use std::sync::Arc;

pub struct RelayService {
    audio_source: Arc<dyn AudioSourceRepository>,
    default_filename: String,
    allowed_hosts: Vec<String>,
}

impl RelayService {
    pub fn new(
        audio_source: Arc<dyn AudioSourceRepository>,
        default_filename: String,
        allowed_hosts: Vec<String>,
    ) -> Self {
        Self {
            audio_source,
            default_filename,
            allowed_hosts,
        }
    }

    /// Empty allow-list means every host may be relayed.
    /// Otherwise the host must equal an entry or be a subdomain of one.
    fn check_host(&self, source_url: &str) -> Result<(), RelayServiceError> {
        if self.allowed_hosts.is_empty() {
            return Ok(());
        }

        let url = Url::parse(source_url)
            .map_err(|e| RelayServiceError::DownloadFailed(format!("invalid source url: {}", e)))?;
        let host = url
            .host_str()
            .map(|h| h.trim_end_matches('.').to_ascii_lowercase())
            .unwrap_or_default();

        let allowed = self
            .allowed_hosts
            .iter()
            .any(|entry| host == *entry || host.ends_with(&format!(".{}", entry)));

        if allowed {
            Ok(())
        } else {
            Err(RelayServiceError::HostNotAllowed(host))
        }
    }
}

#[async_trait]
pub trait RelayServiceApi: Send + Sync {
    /// Relay a remote audio resource as a browser download
    ///
    /// This operation:
    /// - Checks the upstream host against the allow-list (if configured)
    /// - Fetches the resource once, without retries
    /// - Returns the bytes unchanged with content type and attachment disposition
    async fn relay(&self, request: RelayRequest) -> Result<RelayResponse, RelayServiceError>;
}

#[async_trait]
impl RelayServiceApi for RelayService {
    async fn relay(&self, request: RelayRequest) -> Result<RelayResponse, RelayServiceError> {
        tracing::info!(
            source_url = %request.source_url,
            filename = ?request.filename,
            "Relay download request"
        );

        self.check_host(&request.source_url)?;

        let fetched = self.audio_source.fetch(&request.source_url).await?;

        let content_type = fetched
            .content_type
            .filter(|ct| !ct.iter().all(u8::is_ascii_whitespace))
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.as_bytes().to_vec());
        let content_disposition =
            attachment_disposition(request.filename.as_deref(), &self.default_filename);

        tracing::info!(
            source_url = %request.source_url,
            content_type = %String::from_utf8_lossy(&content_type),
            body_len = fetched.body.len(),
            "Relaying upstream audio"
        );

        Ok(RelayResponse {
            body: fetched.body,
            content_type,
            content_disposition,
        })
    }
}
